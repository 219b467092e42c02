//! Catalog error types.

use thiserror::Error;

/// Errors that can occur in catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A product failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backing store rejected a write.
    #[error("Store error: {0}")]
    Store(#[from] steamish_store::StoreError),
}
