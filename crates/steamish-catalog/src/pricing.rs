//! Display and cart pricing helpers.
//!
//! Prices in this layer are plain dollar amounts; formatting rounds to two
//! decimals the way the storefront renders them.

use serde::{Deserialize, Serialize};

/// A priced line in a cart total calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub price: f64,
    pub quantity: u32,
}

impl CartEntry {
    pub fn new(price: f64, quantity: u32) -> Self {
        Self { price, quantity }
    }
}

/// Format a dollar amount for display, rounded to two decimals.
pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Sum `price * quantity` over the entries; an empty cart totals zero.
pub fn calculate_total(entries: &[CartEntry]) -> f64 {
    entries
        .iter()
        .map(|e| e.price * f64::from(e.quantity))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_formats_with_two_decimals() {
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn formatting_rounds_to_two_decimals() {
        assert_eq!(format_currency(99.999), "$100.00");
        assert_eq!(format_currency(19.994), "$19.99");
    }

    #[test]
    fn empty_cart_totals_zero() {
        assert_eq!(calculate_total(&[]), 0.0);
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let entries = [CartEntry::new(10.0, 2), CartEntry::new(5.0, 3)];
        assert_eq!(calculate_total(&entries), 35.0);
    }
}
