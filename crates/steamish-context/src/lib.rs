//! Session-lived cached view over the product catalog.
//!
//! One [`ProductContext`] is constructed per session and shared by every
//! page. It loads the full product list once, serves synchronous lookups
//! from the in-memory copy, and refreshes only on explicit request — reads
//! between refreshes can be stale by design.

mod context;
mod source;

pub use context::ProductContext;
pub use source::ProductSource;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{ProductContext, ProductSource};
}
