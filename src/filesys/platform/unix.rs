//! Unix directory operations

use std::ffi::{OsStr, OsString};
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use nix::dir::Dir;
use nix::fcntl::OFlag;
use nix::sys::stat::Mode;

use super::DirectoryBackend;

/// `opendir`/`readdir` enumeration and `mkdir(2)`
#[derive(Debug, Clone, Copy, Default)]
pub struct PosixBackend;

impl DirectoryBackend for PosixBackend {
    fn entry_names(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        let mut handle = Dir::open(
            dir,
            OFlag::O_RDONLY | OFlag::O_DIRECTORY | OFlag::O_CLOEXEC,
            Mode::empty(),
        )?;

        let mut names = Vec::new();
        for entry in handle.iter() {
            let entry = entry?;
            let name = entry.file_name().to_bytes();
            if name == b"." || name == b".." {
                continue;
            }
            names.push(OsStr::from_bytes(name).to_os_string());
        }
        Ok(names)
    }

    fn make_dir(&self, path: &Path, mode: u32) -> io::Result<()> {
        nix::unistd::mkdir(path, Mode::from_bits_truncate(mode as libc::mode_t))?;
        Ok(())
    }
}
