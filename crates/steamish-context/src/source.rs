//! Seam between the context and the catalog repository.

use steamish_catalog::{CatalogError, CatalogRepository, Product};

/// Anything the context can load its product list from.
///
/// The repository is the production source; tests substitute fakes to drive
/// the failure path.
pub trait ProductSource: Send + Sync {
    fn load_products(&self) -> Result<Vec<Product>, CatalogError>;
}

impl ProductSource for CatalogRepository {
    fn load_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.all_products())
    }
}
