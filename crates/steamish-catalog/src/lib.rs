//! Product catalog model and repository for Steamish.
//!
//! The effective catalog is computed on every read: built-in games minus
//! tombstoned ids, followed by user-added custom games. The built-in list is
//! immutable at process start; deletion of a built-in entry records a
//! tombstone instead of mutating the list. Custom entries live in the
//! injected [`Store`](steamish_store::Store) under their own key.
//!
//! # Example
//!
//! ```rust,ignore
//! use steamish_catalog::{CatalogRepository, NewProduct};
//! use steamish_store::Store;
//!
//! let repo = CatalogRepository::new(Store::in_memory());
//! let added = repo.add_product(NewProduct::named("Starforge", 29.99))?;
//! assert!(repo.product_by_id(&added.id).is_some());
//! ```

pub mod builtin;
mod error;
mod ids;
pub mod pricing;
mod product;
mod repository;

pub use error::CatalogError;
pub use ids::ProductId;
pub use product::{NewProduct, Product};
pub use repository::CatalogRepository;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CatalogError, CatalogRepository, NewProduct, Product, ProductId};
}
