//! Filesystem backend for the host's local disks

use std::borrow::Cow;
use std::io;
use std::path::Path;

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::LocalFsConfig;

use super::error::{FsError, Result};
use super::file_stream::FileStream;
use super::info::{FileInfo, FileType};
use super::mode::{normalize, OpenMode};
use super::platform::{DirectoryBackend, NativeBackend};
use super::stream::SeekStream;
use super::uri::{Uri, FILE_SCHEME};
use super::FileSystem;

/// Pass-through to the operating system's file and directory calls.
///
/// Holds configuration only; every call stats, opens or enumerates afresh.
#[derive(Debug, Clone, Default)]
pub struct LocalFileSystem {
    config: LocalFsConfig,
    backend: NativeBackend,
}

impl LocalFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LocalFsConfig) -> Self {
        Self {
            config,
            backend: NativeBackend,
        }
    }

    pub fn config(&self) -> &LocalFsConfig {
        &self.config
    }

    /// Open `path` with an `fopen`-style mode, failing rather than
    /// yielding no stream
    pub fn open_stream(&self, path: &Uri, mode: &str) -> Result<Box<dyn SeekStream>> {
        let name = path.name.as_str();

        if self.config.stdio_aliases {
            match name {
                "stdin" => return Ok(Box::new(FileStream::stdin())),
                "stdout" => return Ok(Box::new(FileStream::stdout())),
                _ => {}
            }
        }

        let name = name.strip_prefix(FILE_SCHEME).unwrap_or(name);
        let open_mode: OpenMode = normalize(mode).parse()?;

        let file = open_mode
            .to_open_options()
            .open(name)
            .map_err(|source| FsError::Open {
                path: path.str(),
                mode: mode.to_string(),
                source,
            })?;
        debug!("Opened {} with mode {}", name, normalize(mode));
        Ok(Box::new(FileStream::from_file(file)))
    }

    fn already_exists(&self, path: &Uri) -> Result<()> {
        if self.config.strict_create {
            Err(FsError::AlreadyExists { path: path.str() })
        } else {
            debug!("Directory {} already exists", path);
            Ok(())
        }
    }
}

fn delete_error(path: &Path, source: io::Error) -> FsError {
    FsError::DeleteDirectory {
        path: path.display().to_string(),
        source,
    }
}

fn path_info(uri: Uri, on_disk: &Path) -> FileInfo {
    match std::fs::metadata(on_disk) {
        Ok(metadata) => FileInfo {
            path: uri,
            size: metadata.len(),
            file_type: if metadata.is_dir() {
                FileType::Directory
            } else {
                FileType::File
            },
        },
        Err(e) => {
            debug!("Stat of {} failed: {}", uri, e);
            FileInfo::non_existent(uri)
        }
    }
}

impl FileSystem for LocalFileSystem {
    fn create_directory(&self, path: &Uri) -> Result<()> {
        match self.get_path_info(path).file_type {
            FileType::Directory => self.already_exists(path),
            FileType::File => Err(FsError::NotADirectory { path: path.str() }),
            FileType::NonExistent => {
                debug!("Nothing at {}, creating directory", path);
                match self
                    .backend
                    .make_dir(Path::new(&path.name), self.config.dir_mode)
                {
                    Ok(()) => {
                        info!("Created directory {}", path);
                        Ok(())
                    }
                    Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                        warn!("Directory {} was created concurrently", path);
                        self.already_exists(path)
                    }
                    Err(source) => Err(FsError::CreateDirectory {
                        path: path.str(),
                        source,
                    }),
                }
            }
        }
    }

    fn delete_directory(&self, path: &Uri) -> Result<()> {
        let root = Path::new(&path.name);
        let metadata = match std::fs::symlink_metadata(root) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Nothing to delete at {}", path);
                return Ok(());
            }
            Err(e) => return Err(delete_error(root, e)),
        };

        if !metadata.is_dir() {
            std::fs::remove_file(root).map_err(|e| delete_error(root, e))?;
            info!("Deleted {}", path);
            return Ok(());
        }

        for entry in WalkDir::new(root).follow_links(false).contents_first(true) {
            let entry = entry.map_err(|e| {
                let failed = e.path().unwrap_or(root).to_path_buf();
                delete_error(&failed, io::Error::from(e))
            })?;

            let removed = if entry.file_type().is_dir() {
                std::fs::remove_dir(entry.path())
            } else {
                std::fs::remove_file(entry.path())
            };
            removed.map_err(|e| delete_error(entry.path(), e))?;
        }

        info!("Deleted directory tree {}", path);
        Ok(())
    }

    fn get_path_info(&self, path: &Uri) -> FileInfo {
        path_info(path.clone(), Path::new(&path.name))
    }

    fn list_directory(&self, path: &Uri) -> Result<Vec<FileInfo>> {
        let dir = Path::new(&path.name);
        let names = self
            .backend
            .entry_names(dir)
            .map_err(|source| FsError::ListDirectory {
                path: path.str(),
                source,
            })?;

        Ok(names
            .iter()
            .map(|raw| {
                let lossy = raw.to_string_lossy();
                if matches!(lossy, Cow::Owned(_)) {
                    warn!("Non UTF-8 entry name in {}: {}", path, lossy);
                }
                path_info(path.join(&lossy), &dir.join(raw))
            })
            .collect())
    }

    fn descends_into(&self, entry: &FileInfo) -> bool {
        // symlinked directories are listed but never walked
        std::fs::symlink_metadata(&entry.path.name)
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false)
    }

    fn open(&self, path: &Uri, mode: &str, allow_null: bool) -> Result<Option<Box<dyn SeekStream>>> {
        match self.open_stream(path, mode) {
            Ok(stream) => Ok(Some(stream)),
            Err(FsError::Open { source, .. }) if allow_null => {
                debug!("Could not open {}: {}", path, source);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
