//! Platform-specific directory operations
//!
//! Exactly one backend is compiled in: POSIX `opendir`/`readdir`/`mkdir`
//! on Unix, `FindFirstFileW`/`CreateDirectoryW` on Windows.

use std::ffi::OsString;
use std::io;
use std::path::Path;

#[cfg(unix)]
pub mod unix;

#[cfg(windows)]
pub mod windows;

#[cfg(unix)]
pub use unix::PosixBackend as NativeBackend;

#[cfg(windows)]
pub use windows::FindFileBackend as NativeBackend;

/// Directory enumeration and creation provided by the host OS
pub trait DirectoryBackend: Send + Sync {
    /// On-disk names of the entries in `dir`, never including `.` or `..`
    fn entry_names(&self, dir: &Path) -> io::Result<Vec<OsString>>;

    /// Create a single directory. `mode` is ignored where the OS has no
    /// permission bits.
    fn make_dir(&self, path: &Path, mode: u32) -> io::Result<()>;
}
