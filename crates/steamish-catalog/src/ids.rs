//! Product identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix marking a user-created product id.
const CUSTOM_PREFIX: &str = "custom_";

/// A unique product identifier.
///
/// Built-in catalog entries carry plain numeric-string ids (`"1"`..`"19"`);
/// user-created entries carry `custom_<millis>` ids assigned at add time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    /// Create an ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Assign a fresh id for a user-created product.
    ///
    /// Two calls within the same millisecond tick can collide; this matches
    /// the documented risk of the storefront's id scheme and is not guarded.
    pub fn generate_custom() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        Self(format!("{CUSTOM_PREFIX}{millis}"))
    }

    /// Whether this id denotes a user-created product.
    pub fn is_custom(&self) -> bool {
        self.0.starts_with(CUSTOM_PREFIX)
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ids_are_not_custom() {
        assert!(!ProductId::new("7").is_custom());
    }

    #[test]
    fn generated_ids_are_custom() {
        let id = ProductId::generate_custom();
        assert!(id.is_custom());
        assert!(id.as_str().starts_with("custom_"));
    }

    #[test]
    fn id_display_matches_inner() {
        let id = ProductId::new("custom_1700000000000");
        assert_eq!(format!("{id}"), "custom_1700000000000");
    }

    #[test]
    fn id_serializes_as_bare_string() {
        let id = ProductId::new("3");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""3""#);
    }
}
