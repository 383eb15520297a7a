//! Local filesystem configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::filesys::{FsError, Result};

/// Behaviour knobs for [`LocalFileSystem`](crate::filesys::LocalFileSystem)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalFsConfig {
    /// Mode bits for newly created directories, before the process umask
    pub dir_mode: u32,
    /// Fail `create_directory` when the directory already exists
    pub strict_create: bool,
    /// Bind the names `stdin` and `stdout` to the process streams
    pub stdio_aliases: bool,
}

impl Default for LocalFsConfig {
    fn default() -> Self {
        Self {
            dir_mode: 0o777,
            strict_create: true,
            stdio_aliases: true,
        }
    }
}

impl LocalFsConfig {
    /// Parse a YAML (or JSON) document. Missing fields take their defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| FsError::Config(format!("Invalid config: {e}")))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FsError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&content)
    }
}
