//! Typed collection store with automatic JSON serialization.

use crate::{MemoryBackend, StoreBackend, StoreError};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

/// Why a collection read came back empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyReason {
    /// The key has never been written (or was deleted).
    Missing,
    /// The stored value failed to parse as the expected shape.
    Corrupt,
}

/// Result of a tagged collection read.
///
/// The plain [`Store::get_collection`] flattens this to a `Vec`; the tagged
/// form lets callers distinguish a genuinely empty collection from one that
/// degraded because the stored payload was corrupt.
#[derive(Debug)]
pub enum Loaded<T> {
    /// The key held a well-formed collection.
    Values(Vec<T>),
    /// Nothing usable was stored under the key.
    Empty(EmptyReason),
}

impl<T> Loaded<T> {
    /// Flatten to the stored values, empty on either miss reason.
    pub fn into_values(self) -> Vec<T> {
        match self {
            Loaded::Values(values) => values,
            Loaded::Empty(_) => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Loaded::Empty(_))
    }
}

/// Typed key-value store over a pluggable backend.
///
/// Collections are stored as JSON arrays. Reads never fail: missing or
/// unparseable data degrades to an empty collection, logged at debug level.
/// Writes surface backend and serialization errors to the caller.
pub struct Store {
    backend: Box<dyn StoreBackend>,
}

impl Store {
    /// Create a store over an explicit backend.
    pub fn new(backend: impl StoreBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Create a store over a fresh in-memory backend.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Read a collection, tagged with the reason when it comes back empty.
    pub fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Loaded<T> {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Loaded::Empty(EmptyReason::Missing),
            Err(e) => {
                debug!(key, error = %e, "store read failed, treating as missing");
                return Loaded::Empty(EmptyReason::Missing);
            }
        };
        match serde_json::from_str(&raw) {
            Ok(values) => Loaded::Values(values),
            Err(e) => {
                debug!(key, error = %e, "stored value is corrupt, degrading to empty");
                Loaded::Empty(EmptyReason::Corrupt)
            }
        }
    }

    /// Read a collection, empty if absent or corrupt.
    pub fn get_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.load_collection(key).into_values()
    }

    /// Serialize and persist a collection, overwriting any prior value.
    pub fn set_collection<T: Serialize>(&self, key: &str, values: &[T]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(values)?;
        self.backend.set(key, &raw)
    }

    /// Remove a key entirely.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.backend.delete(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: String,
        value: i64,
    }

    fn entries() -> Vec<Entry> {
        vec![
            Entry {
                id: "a".into(),
                value: 1,
            },
            Entry {
                id: "b".into(),
                value: 2,
            },
        ]
    }

    #[test]
    fn set_then_get_roundtrips() {
        let store = Store::in_memory();
        store.set_collection("steamish_test", &entries()).unwrap();
        let read: Vec<Entry> = store.get_collection("steamish_test");
        assert_eq!(read, entries());
    }

    #[test]
    fn absent_key_loads_as_missing() {
        let store = Store::in_memory();
        let loaded: Loaded<Entry> = store.load_collection("steamish_test");
        assert!(matches!(loaded, Loaded::Empty(EmptyReason::Missing)));
    }

    #[test]
    fn corrupt_value_loads_as_corrupt() {
        let backend = MemoryBackend::new();
        backend.set("steamish_test", "not json at all").unwrap();
        let store = Store::new(backend);
        let loaded: Loaded<Entry> = store.load_collection("steamish_test");
        assert!(matches!(loaded, Loaded::Empty(EmptyReason::Corrupt)));
    }

    #[test]
    fn wrong_shape_loads_as_corrupt() {
        let backend = MemoryBackend::new();
        // Valid JSON, wrong shape for the collection.
        backend.set("steamish_test", r#"{"id": "a"}"#).unwrap();
        let store = Store::new(backend);
        let loaded: Loaded<Entry> = store.load_collection("steamish_test");
        assert!(matches!(loaded, Loaded::Empty(EmptyReason::Corrupt)));
    }

    #[test]
    fn get_collection_degrades_to_empty() {
        let backend = MemoryBackend::new();
        backend.set("steamish_test", "{broken").unwrap();
        let store = Store::new(backend);
        let read: Vec<Entry> = store.get_collection("steamish_test");
        assert!(read.is_empty());
    }

    #[test]
    fn set_overwrites_prior_value() {
        let store = Store::in_memory();
        store.set_collection("steamish_test", &entries()).unwrap();
        let shorter = vec![entries().remove(0)];
        store.set_collection("steamish_test", &shorter).unwrap();
        let read: Vec<Entry> = store.get_collection("steamish_test");
        assert_eq!(read, shorter);
    }

    #[test]
    fn delete_makes_key_missing() {
        let store = Store::in_memory();
        store.set_collection("steamish_test", &entries()).unwrap();
        store.delete("steamish_test").unwrap();
        let loaded: Loaded<Entry> = store.load_collection("steamish_test");
        assert!(matches!(loaded, Loaded::Empty(EmptyReason::Missing)));
    }
}
