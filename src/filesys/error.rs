use thiserror::Error;

/// Errors produced by filesystem backends and their streams
#[derive(Debug, Error)]
pub enum FsError {
    #[error("Directory already exists: {path}")]
    AlreadyExists { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Failed to create directory {path}: {source}")]
    CreateDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to delete {path}: {source}")]
    DeleteDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list directory {path}: {source}")]
    ListDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open {path} with mode {mode:?}: {source}")]
    Open {
        path: String,
        mode: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid open mode: {mode:?}")]
    InvalidMode { mode: String },

    #[error("Incomplete write: {written} of {expected} bytes")]
    IncompleteWrite { written: usize, expected: usize },

    #[error("Stream is closed")]
    StreamClosed,

    #[error("Unsupported URI scheme: {protocol}")]
    UnsupportedScheme { protocol: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FsError>;
