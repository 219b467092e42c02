//! Product repository over the injected store.

use crate::{builtin, CatalogError, NewProduct, Product, ProductId};
use steamish_store::{keys, Store};
use tracing::debug;

/// Repository computing the effective catalog on every read.
///
/// Effective catalog = (built-in minus tombstoned) followed by custom
/// products, in that fixed order. The union is never persisted; only the
/// tombstone set and the custom list live in the store. Operations are
/// single synchronous read-modify-writes with no cross-instance
/// coordination, which matches the single-session runtime this models.
pub struct CatalogRepository {
    store: Store,
    builtin: Vec<Product>,
}

impl CatalogRepository {
    /// Create a repository over the standard built-in catalog.
    pub fn new(store: Store) -> Self {
        Self::with_builtin(store, builtin::catalog())
    }

    /// Create a repository over an explicit built-in list (tests).
    pub fn with_builtin(store: Store, builtin: Vec<Product>) -> Self {
        Self { store, builtin }
    }

    fn custom_products(&self) -> Vec<Product> {
        self.store.get_collection(keys::CUSTOM_PRODUCTS)
    }

    fn deleted_ids(&self) -> Vec<String> {
        self.store.get_collection(keys::DELETED_GAMES)
    }

    /// The effective catalog, recomputed from the store on every call.
    ///
    /// Built-in entries keep their defined order; custom entries follow in
    /// insertion order.
    pub fn all_products(&self) -> Vec<Product> {
        let deleted = self.deleted_ids();
        let mut products: Vec<Product> = self
            .builtin
            .iter()
            .filter(|p| !deleted.iter().any(|d| d == p.id.as_str()))
            .cloned()
            .collect();
        products.extend(self.custom_products());
        products
    }

    /// Validate, assign a `custom_<millis>` id, persist, and return the
    /// stored product.
    pub fn add_product(&self, new: NewProduct) -> Result<Product, CatalogError> {
        new.validate()?;
        let product = new.into_product(ProductId::generate_custom());
        let mut custom = self.custom_products();
        custom.push(product.clone());
        self.store.set_collection(keys::CUSTOM_PRODUCTS, &custom)?;
        debug!(id = %product.id, name = %product.name, "added custom product");
        Ok(product)
    }

    /// Delete a product from the effective catalog.
    ///
    /// Custom ids are removed from the custom list (`Ok(true)` iff found).
    /// Built-in ids are tombstoned (`Ok(true)` iff newly tombstoned,
    /// `Ok(false)` if already deleted); the built-in list itself is never
    /// mutated.
    pub fn delete_product(&self, id: &ProductId) -> Result<bool, CatalogError> {
        if id.is_custom() {
            let mut custom = self.custom_products();
            let before = custom.len();
            custom.retain(|p| p.id != *id);
            if custom.len() == before {
                return Ok(false);
            }
            self.store.set_collection(keys::CUSTOM_PRODUCTS, &custom)?;
            debug!(%id, "removed custom product");
            return Ok(true);
        }

        let mut deleted = self.deleted_ids();
        if deleted.iter().any(|d| d == id.as_str()) {
            return Ok(false);
        }
        deleted.push(id.as_str().to_string());
        self.store.set_collection(keys::DELETED_GAMES, &deleted)?;
        debug!(%id, "tombstoned built-in product");
        Ok(true)
    }

    /// Linear lookup over the effective catalog.
    pub fn product_by_id(&self, id: &ProductId) -> Option<Product> {
        self.all_products().into_iter().find(|p| p.id == *id)
    }
}
