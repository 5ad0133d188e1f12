use thiserror::Error;

/// Errors that can occur in the component catalogue
#[derive(Error, Debug)]
pub enum ComponentError {
    #[error("Unsupported catalogue format: {0}")]
    UnsupportedFormat(String),

    #[error("CMS adapter error: {0}")]
    Adapter(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ComponentError>;
