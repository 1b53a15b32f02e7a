//! Specification extension entries (`x-` prefixed keys)
//!
//! Any document-section node may carry vendor extensions: an ordered set of
//! additional key/value pairs merged into the node's output after its
//! declared fields. Keys are checked for the reserved prefix at attachment
//! time, so an invalid key never reaches serialization.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Reserved prefix every extension key must carry
pub const EXTENSION_PREFIX: &str = "x-";

/// Ordered set of extension entries attached to a node
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Extensions {
    entries: IndexMap<String, Value>,
}

impl Extensions {
    /// Empty extension set
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Attach an entry under an `x-` prefixed key
    ///
    /// The value is converted through `serde_json::to_value` and replayed
    /// verbatim in the node's output, in attachment order. Re-inserting an
    /// existing key replaces its value but keeps its original position.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidExtensionKey` if the key lacks the `x-`
    /// prefix, and `Error::Json` if the value cannot be converted.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Serialize) -> Result<()> {
        let key = key.into();
        if !key.starts_with(EXTENSION_PREFIX) {
            return Err(Error::InvalidExtensionKey { key });
        }
        let value = serde_json::to_value(value)?;
        self.entries.insert(key, value);
        Ok(())
    }

    /// The value attached under a key, if any
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Entries in attachment order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of attached entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are attached
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_valid_key() {
        let mut extensions = Extensions::new();
        extensions.insert("x-internal-id", 42).unwrap();
        assert_eq!(extensions.get("x-internal-id"), Some(&json!(42)));
    }

    #[test]
    fn test_insert_rejects_unprefixed_key() {
        let mut extensions = Extensions::new();
        let err = extensions.insert("internal-id", 42).unwrap_err();
        match err {
            Error::InvalidExtensionKey { key } => assert_eq!(key, "internal-id"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(extensions.is_empty());
    }

    #[test]
    fn test_iteration_preserves_attachment_order() {
        let mut extensions = Extensions::new();
        extensions.insert("x-b", 2).unwrap();
        extensions.insert("x-a", 1).unwrap();
        extensions.insert("x-c", 3).unwrap();

        let keys: Vec<&str> = extensions.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["x-b", "x-a", "x-c"]);
    }

    #[test]
    fn test_reinsert_replaces_value_in_place() {
        let mut extensions = Extensions::new();
        extensions.insert("x-a", 1).unwrap();
        extensions.insert("x-b", 2).unwrap();
        extensions.insert("x-a", 10).unwrap();

        let entries: Vec<(&str, &Value)> = extensions.iter().collect();
        assert_eq!(entries[0], ("x-a", &json!(10)));
        assert_eq!(entries[1], ("x-b", &json!(2)));
        assert_eq!(extensions.len(), 2);
    }

    #[test]
    fn test_structured_values() {
        let mut extensions = Extensions::new();
        extensions
            .insert("x-rate-limit", json!({"limit": 100, "window": "1m"}))
            .unwrap();
        extensions.insert("x-tags", vec!["a", "b"]).unwrap();

        assert_eq!(
            extensions.get("x-rate-limit"),
            Some(&json!({"limit": 100, "window": "1m"}))
        );
        assert_eq!(extensions.get("x-tags"), Some(&json!(["a", "b"])));
    }
}
