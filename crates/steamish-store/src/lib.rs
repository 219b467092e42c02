//! Typed key-value storage layer for Steamish client data.
//!
//! Wraps a pluggable string-keyed backend with automatic JSON serialization
//! for collections. Reads degrade to an empty collection on missing or
//! corrupt data; the tagged [`Loaded`] form preserves the reason so callers
//! and tests can tell the two apart.
//!
//! # Example
//!
//! ```rust,ignore
//! use steamish_store::{keys, Store};
//!
//! let store = Store::in_memory();
//! store.set_collection(keys::CUSTOM_PRODUCTS, &products)?;
//! let products: Vec<Product> = store.get_collection(keys::CUSTOM_PRODUCTS);
//! ```

mod backend;
mod error;
pub mod keys;
mod store;

pub use backend::{FileBackend, MemoryBackend, StoreBackend};
pub use error::StoreError;
pub use store::{EmptyReason, Loaded, Store};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{keys, EmptyReason, Loaded, Store, StoreError};
}
