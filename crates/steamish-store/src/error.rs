//! Store error types.

use thiserror::Error;

/// Errors that can occur when writing to the store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the backing storage.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Failed to serialize a value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Failed to perform a backend operation.
    #[error("Store operation failed: {0}")]
    BackendError(String),
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::BackendError(e.to_string())
    }
}
