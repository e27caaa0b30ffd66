//! Property-Based Tests for the Cache Module
//!
//! Uses proptest to verify the store's capacity, round-trip, overwrite,
//! and deletion behavior, plus registry identifier uniqueness.

use std::collections::HashSet;
use std::time::Duration;

use proptest::prelude::*;
use serde_json::{json, Value};

use crate::cache::CacheStore;
use crate::registry::CacheRegistry;

// == Test Configuration ==
const TEST_CAPACITY: usize = 100;
const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates valid cache keys (non-empty, bounded length)
fn valid_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,64}"
}

/// Generates opaque JSON payloads: strings, integers, booleans
fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-zA-Z0-9 ]{1,256}".prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of writes, the entry count never exceeds capacity.
    #[test]
    fn prop_capacity_enforcement(
        entries in prop::collection::vec(
            (valid_key_strategy(), value_strategy()),
            1..200
        )
    ) {
        let capacity = 50;
        let mut store = CacheStore::new(capacity, TEST_TTL);

        for (key, value) in entries {
            store.set(key, value);
            prop_assert!(
                store.len() <= capacity,
                "Cache size {} exceeds capacity {}",
                store.len(),
                capacity
            );
        }
    }

    // Storing a pair and retrieving it before expiry returns the exact
    // value that was stored.
    #[test]
    fn prop_roundtrip_storage(key in valid_key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new(TEST_CAPACITY, TEST_TTL);

        store.set(key.clone(), value.clone());

        prop_assert_eq!(store.get(&key), Some(value), "Round-trip value mismatch");
    }

    // After a delete, a subsequent get misses; deleting again is a no-op.
    #[test]
    fn prop_delete_removes_entry(key in valid_key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new(TEST_CAPACITY, TEST_TTL);

        store.set(key.clone(), value);
        prop_assert!(store.get(&key).is_some(), "Key should exist before delete");

        store.delete(&key);
        prop_assert!(store.get(&key).is_none(), "Key should not exist after delete");

        store.delete(&key);
        prop_assert!(store.get(&key).is_none(), "Repeated delete stays absent");
    }

    // Storing V1 then V2 under one key leaves exactly one entry holding V2.
    #[test]
    fn prop_overwrite_semantics(
        key in valid_key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut store = CacheStore::new(TEST_CAPACITY, TEST_TTL);

        store.set(key.clone(), value1);
        store.set(key.clone(), value2.clone());

        prop_assert_eq!(store.get(&key), Some(value2), "Overwrite should return new value");
        prop_assert_eq!(store.len(), 1, "Should have exactly one entry after overwrite");
    }

    // Filling a store to capacity and inserting one more distinct key
    // displaces exactly one of the originals and keeps the newcomer.
    #[test]
    fn prop_eviction_displaces_exactly_one(
        initial_keys in prop::collection::hash_set(valid_key_strategy(), 2..10),
        new_key in valid_key_strategy()
    ) {
        let initial_keys: Vec<String> = initial_keys.into_iter().collect();
        prop_assume!(!initial_keys.contains(&new_key));

        let capacity = initial_keys.len();
        let mut store = CacheStore::new(capacity, TEST_TTL);

        for key in &initial_keys {
            store.set(key.clone(), json!(format!("value_{key}")));
        }
        prop_assert_eq!(store.len(), capacity, "Cache should be at capacity");

        store.set(new_key.clone(), json!("newcomer"));

        prop_assert_eq!(store.len(), capacity, "Cache should remain at capacity");
        prop_assert!(store.get(&new_key).is_some(), "New key should exist after insertion");

        let survivors = initial_keys
            .iter()
            .filter(|key| store.get(key).is_some())
            .count();
        prop_assert_eq!(survivors, capacity - 1, "Exactly one original entry is displaced");
        prop_assert_eq!(store.stats().evictions, 1, "One eviction recorded");
    }
}

// == Registry Properties ==
// Async registry operations run on a dedicated runtime per case, the same
// pattern the handler tests use.

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    // Every create mints a distinct identifier, and each identifier
    // resolves to its own store.
    #[test]
    fn prop_registry_ids_are_unique(count in 2usize..16) {
        let rt = tokio::runtime::Runtime::new().unwrap();

        rt.block_on(async {
            let registry = CacheRegistry::new();
            let mut ids = Vec::new();

            for i in 0..count {
                let id = registry.create(10, TEST_TTL).await.unwrap();
                let store = registry.lookup(&id).await.unwrap();
                store.write().await.set("marker".to_string(), json!(i));
                ids.push(id);
            }

            let distinct: HashSet<&String> = ids.iter().collect();
            prop_assert_eq!(distinct.len(), count, "Identifiers must be unique");

            // Each id still resolves to the store holding its own marker
            for (i, id) in ids.iter().enumerate() {
                let store = registry.lookup(id).await.unwrap();
                prop_assert_eq!(store.read().await.get("marker"), Some(json!(i)));
            }

            Ok(())
        })?;
    }

    // An invalid configuration registers nothing, and no identifier can
    // be guessed into a hit afterwards.
    #[test]
    fn prop_invalid_configuration_registers_nothing(
        capacity in 0usize..2,
        ttl_secs in 0u64..2,
        guess in valid_key_strategy()
    ) {
        prop_assume!(capacity == 0 || ttl_secs == 0);

        let rt = tokio::runtime::Runtime::new().unwrap();

        rt.block_on(async {
            let registry = CacheRegistry::new();

            let result = registry.create(capacity, Duration::from_secs(ttl_secs)).await;

            prop_assert!(result.is_err(), "Invalid configuration must be rejected");
            prop_assert!(registry.is_empty().await, "No store may be registered");
            prop_assert!(registry.lookup(&guess).await.is_none());

            Ok(())
        })?;
    }
}
