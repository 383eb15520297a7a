//! Filesystem abstraction
//!
//! This module provides a uniform filesystem interface:
//! - Directory creation, recursive deletion and listing
//! - Path metadata lookup with a non-error "does not exist" result
//! - Files and standard streams opened as seekable byte streams
//!
//! [`LocalFileSystem`] is the only backend; [`get_instance`] picks it for
//! plain paths and `file://` URIs and rejects every other scheme.

pub mod error;
pub mod file_stream;
pub mod info;
pub mod local;
pub mod mode;
pub mod platform;
pub mod stream;
pub mod uri;

use std::collections::VecDeque;

pub use error::{FsError, Result};
pub use file_stream::{FileStream, NativeHandle};
pub use info::{FileInfo, FileType};
pub use local::LocalFileSystem;
pub use mode::OpenMode;
pub use stream::{SeekStream, Stream};
pub use uri::Uri;

/// Operations every filesystem backend provides
pub trait FileSystem: Send + Sync {
    /// Create a single directory. Fails if something already exists there.
    fn create_directory(&self, path: &Uri) -> Result<()>;

    /// Remove `path` and everything below it. A missing path is not an error.
    fn delete_directory(&self, path: &Uri) -> Result<()>;

    /// Metadata for `path`, or a [`FileType::NonExistent`] record
    fn get_path_info(&self, path: &Uri) -> FileInfo;

    /// One entry per child of `path`, excluding `.` and `..`
    fn list_directory(&self, path: &Uri) -> Result<Vec<FileInfo>>;

    /// Whether [`list_directory_recursive`](FileSystem::list_directory_recursive)
    /// should walk into a listed directory
    fn descends_into(&self, entry: &FileInfo) -> bool {
        entry.is_dir()
    }

    /// Every file and directory below `path`, breadth first
    fn list_directory_recursive(&self, path: &Uri) -> Result<Vec<FileInfo>> {
        let mut result = Vec::new();
        let mut queue = VecDeque::from([path.clone()]);

        while let Some(dir) = queue.pop_front() {
            for info in self.list_directory(&dir)? {
                if self.descends_into(&info) {
                    queue.push_back(info.path.clone());
                }
                result.push(info);
            }
        }
        Ok(result)
    }

    /// Open `path` with an `fopen`-style mode. When the open fails and
    /// `allow_null` is set the result is `Ok(None)` instead of an error.
    fn open(&self, path: &Uri, mode: &str, allow_null: bool) -> Result<Option<Box<dyn SeekStream>>>;

    fn open_for_read(&self, path: &Uri, allow_null: bool) -> Result<Option<Box<dyn SeekStream>>> {
        self.open(path, "r", allow_null)
    }
}

/// Backend serving `uri`
pub fn get_instance(uri: &Uri) -> Result<Box<dyn FileSystem>> {
    if uri.is_local() {
        Ok(Box::new(LocalFileSystem::new()))
    } else {
        Err(FsError::UnsupportedScheme {
            protocol: uri.protocol.clone(),
        })
    }
}
