//! Product types.

use crate::ids::ProductId;
use crate::CatalogError;
use serde::{Deserialize, Serialize};

/// A game in the storefront catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Price in dollars.
    pub price: f64,
    /// URL or path to the cover image.
    pub image: String,
    /// Average rating, 0 to 5.
    pub rating: f64,
    /// Discount percentage currently applied.
    pub discount: f64,
    /// Storefront category (exact-match filter key).
    pub category: String,
    /// Full description for the detail page.
    pub description: String,
    /// Tags for filtering/search.
    pub tags: Vec<String>,
    /// Whether the game is featured on the landing page.
    pub featured: bool,
}

/// A product as submitted by the user, before an id is assigned.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

impl NewProduct {
    /// Minimal constructor for the common name-and-price case.
    pub fn named(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            ..Self::default()
        }
    }

    /// Check the catalog invariants: non-negative price, rating in [0, 5].
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.price < 0.0 {
            return Err(CatalogError::Validation(format!(
                "price must be >= 0, got {}",
                self.price
            )));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(CatalogError::Validation(format!(
                "rating must be in [0, 5], got {}",
                self.rating
            )));
        }
        Ok(())
    }

    /// Attach an id, producing the stored form.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            image: self.image,
            rating: self.rating,
            discount: self.discount,
            category: self.category,
            description: self.description,
            tags: self.tags,
            featured: self.featured,
        }
    }
}
