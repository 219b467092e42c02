//! The shared product cache.

use crate::ProductSource;
use std::sync::{Arc, RwLock};
use steamish_catalog::{Product, ProductId};
use tracing::{debug, warn};

#[derive(Debug, Default)]
struct ContextState {
    products: Vec<Product>,
    loading: bool,
    error: Option<String>,
}

/// Shared in-memory cache of the full product list.
///
/// Loads once at construction; helper reads are synchronous against the
/// cached copy and can be stale until the next
/// [`refresh_products`](Self::refresh_products). Overlapping refreshes are
/// not coalesced; the last write wins.
pub struct ProductContext {
    source: Arc<dyn ProductSource>,
    state: RwLock<ContextState>,
}

impl ProductContext {
    /// Create the context and perform the initial load.
    ///
    /// A failed load leaves the cache empty with the failure recorded in
    /// [`error`](Self::error); construction itself never fails.
    pub fn new(source: Arc<dyn ProductSource>) -> Self {
        let context = Self {
            source,
            state: RwLock::new(ContextState {
                products: Vec::new(),
                loading: true,
                error: None,
            }),
        };
        context.refresh_products();
        context
    }

    /// Re-run the load and replace the cached list.
    pub fn refresh_products(&self) {
        {
            let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
            state.loading = true;
        }
        let loaded = self.source.load_products();
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        match loaded {
            Ok(products) => {
                debug!(count = products.len(), "product cache refreshed");
                state.products = products;
                state.error = None;
            }
            Err(e) => {
                warn!(error = %e, "product load failed");
                state.products = Vec::new();
                state.error = Some(e.to_string());
            }
        }
        state.loading = false;
    }

    /// Synchronous lookup against the cache only; stale until a refresh.
    pub fn product_by_id(&self, id: &ProductId) -> Option<Product> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.products.iter().find(|p| p.id == *id).cloned()
    }

    /// Case-sensitive exact-match filter over the cache.
    pub fn products_by_category(&self, category: &str) -> Vec<Product> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state
            .products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    /// Snapshot of the cached product list.
    pub fn products(&self) -> Vec<Product> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.products.clone()
    }

    /// Whether a load is currently in flight.
    pub fn is_loading(&self) -> bool {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.loading
    }

    /// The last load failure, if the cache is in a failed state.
    pub fn error(&self) -> Option<String> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.error.clone()
    }
}
