//! Library error types.

use thiserror::Error;

/// Errors that can occur when talking to the library service or store.
#[derive(Error, Debug)]
pub enum LibraryError {
    /// The request never produced a response.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    /// The response body did not match the expected schema.
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The local store rejected a write.
    #[error("Store error: {0}")]
    Store(#[from] steamish_store::StoreError),
}
