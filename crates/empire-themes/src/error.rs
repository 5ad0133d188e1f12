//! Error types for the themes module

use std::path::PathBuf;

use empire_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Theme not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse {path} as {format}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
