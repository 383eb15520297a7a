use serde::{Deserialize, Serialize};

use super::uri::Uri;

/// Type of a filesystem path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    File,
    Directory,
    NonExistent,
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileType::File => write!(f, "file"),
            FileType::Directory => write!(f, "directory"),
            FileType::NonExistent => write!(f, "nonexistent"),
        }
    }
}

/// Metadata for one path, produced fresh on every query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub path: Uri,
    pub size: u64,
    pub file_type: FileType,
}

impl FileInfo {
    /// Sentinel for a path that could not be stat'ed
    pub fn non_existent(path: Uri) -> Self {
        Self {
            path,
            size: 0,
            file_type: FileType::NonExistent,
        }
    }

    pub fn exists(&self) -> bool {
        self.file_type != FileType::NonExistent
    }

    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }

    pub fn is_file(&self) -> bool {
        self.file_type == FileType::File
    }
}
