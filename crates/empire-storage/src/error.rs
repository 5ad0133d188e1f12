//! Storage error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the preference file failed
    #[error("IO error on {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The preference file exists but is not valid JSON
    #[error("Failed to parse {path} as json: {message}")]
    ParseError { path: PathBuf, message: String },

    /// No default storage location could be resolved
    #[error("Path resolution failed: {message}")]
    PathResolutionError { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}
