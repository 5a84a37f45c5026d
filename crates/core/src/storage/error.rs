use thiserror::Error;

/// Errors that can occur when talking to the storage medium.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Read failed for {key}: {message}")]
    ReadFailed { key: String, message: String },
    #[error("Write failed for {key}: {message}")]
    WriteFailed { key: String, message: String },
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
