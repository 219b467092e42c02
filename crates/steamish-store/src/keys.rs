//! Namespaced store keys.
//!
//! All Steamish collections live under `steamish_*` keys so they can share
//! a backend with other per-origin data without colliding.

/// User-added products, stored separately from the built-in catalog.
pub const CUSTOM_PRODUCTS: &str = "steamish_custom_products";

/// Tombstoned built-in product ids.
pub const DELETED_GAMES: &str = "steamish_deleted_games";

/// Per-user local library cache.
pub fn library(user_id: i64) -> String {
    format!("steamish_library_{user_id}")
}
