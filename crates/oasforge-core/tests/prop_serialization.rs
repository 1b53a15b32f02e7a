//! Property-based tests for serialization behavior
//!
//! These tests verify that extension-key validation, attachment ordering,
//! and whole-document serialization hold for generated inputs, not just the
//! hand-picked cases in the integration tests.

use oasforge_core::{Extensions, Info, OpenApi, PathItem};
use proptest::prelude::*;

/// Strategy for keys that do not carry the reserved `x-` prefix
fn unprefixed_key() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_-]{0,24}"
        .prop_filter("key must not start with x-", |key| !key.starts_with("x-"))
}

/// Strategy for a batch of unique extension-key suffixes
fn extension_suffixes() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::hash_set("[a-z0-9]{1,12}", 1..8)
        .prop_map(|set| set.into_iter().collect())
}

/// Strategy for a batch of unique route templates
fn route_set() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::hash_set("/[a-z]{1,8}", 1..6)
        .prop_map(|set| set.into_iter().collect())
}

proptest! {
    /// Property: a key without the reserved prefix is rejected and the
    /// extension set stays unchanged
    #[test]
    fn prop_unprefixed_extension_keys_rejected(
        key in unprefixed_key(),
        value in any::<i64>(),
    ) {
        let mut extensions = Extensions::new();
        prop_assert!(extensions.insert(key.clone(), value).is_err());
        prop_assert!(extensions.is_empty());
        prop_assert_eq!(extensions.get(&key), None);
    }

    /// Property: attached x- entries replay in attachment order
    #[test]
    fn prop_extension_entries_replay_in_attachment_order(
        suffixes in extension_suffixes(),
    ) {
        let mut extensions = Extensions::new();
        let keys: Vec<String> = suffixes.iter().map(|s| format!("x-{s}")).collect();
        for (index, key) in keys.iter().enumerate() {
            extensions.insert(key.clone(), index as u64).unwrap();
        }

        let replayed: Vec<&str> = extensions.iter().map(|(key, _)| key).collect();
        let expected: Vec<&str> = keys.iter().map(String::as_str).collect();
        prop_assert_eq!(replayed, expected);
    }

    /// Property: sibling path entries serialize in attachment order
    #[test]
    fn prop_sibling_paths_keep_attachment_order(routes in route_set()) {
        let mut api = OpenApi::new(Info::new("Demo", "1.0.0"));
        for route in &routes {
            api.add_path(route.clone(), PathItem::new());
        }

        let document = api.serialize().unwrap();
        let keys: Vec<&str> = document["paths"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        let expected: Vec<&str> = routes.iter().map(String::as_str).collect();
        prop_assert_eq!(keys, expected);
    }

    /// Property: serializing an unmodified document twice is byte-for-byte
    /// identical
    #[test]
    fn prop_serialization_is_deterministic(
        routes in route_set(),
        title in "[A-Za-z][A-Za-z ]{0,20}",
    ) {
        let mut api = OpenApi::new(Info::new(title, "1.0.0"));
        for route in &routes {
            api.add_path(route.clone(), PathItem::new());
        }

        let first = api.serialize().unwrap();
        let second = api.serialize().unwrap();
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
