//! Property-Based Tests for the Cache Module
//!
//! Uses proptest to verify the cache's externally observable guarantees
//! over arbitrary operation sequences.

use proptest::prelude::*;
use std::collections::HashSet;
use std::time::Duration;

use crate::cache::SettingCache;

// == Test Configuration ==
const TEST_MAX_ENTRIES: usize = 100;
const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates cache keys (non-empty, bounded length)
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.]{1,64}"
}

/// Generates cache values
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,256}"
}

/// Generates a sequence of cache operations for testing
#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String },
    Get { key: String },
    Delete { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Set { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Delete { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any key-value pair, storing then retrieving it (well inside the
    // TTL) returns exactly the value that was stored.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let cache = SettingCache::new(TEST_MAX_ENTRIES, TEST_TTL);

        cache.set(&key, &value);

        prop_assert_eq!(cache.get(&key), Some(value));
    }

    // For any existing key, a delete makes a subsequent get report a miss.
    #[test]
    fn prop_delete_removes_entry(key in key_strategy(), value in value_strategy()) {
        let cache = SettingCache::new(TEST_MAX_ENTRIES, TEST_TTL);

        cache.set(&key, &value);
        prop_assert!(cache.get(&key).is_some(), "key should exist before delete");

        cache.delete(&key);

        prop_assert_eq!(cache.get(&key), None);
    }

    // For any key, storing V1 then V2 makes get return V2, with exactly one
    // resident entry for that key.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let cache = SettingCache::new(TEST_MAX_ENTRIES, TEST_TTL);

        cache.set(&key, &value1);
        cache.set(&key, &value2);

        prop_assert_eq!(cache.get(&key), Some(value2));
        prop_assert_eq!(cache.len(), 1);
    }

    // For any sequence of operations, the number of resident entries never
    // exceeds the configured maximum.
    #[test]
    fn prop_capacity_enforcement(ops in prop::collection::vec(cache_op_strategy(), 1..200)) {
        let max_entries = 20;
        let cache = SettingCache::new(max_entries, TEST_TTL);

        for op in ops {
            match op {
                CacheOp::Set { key, value } => cache.set(&key, &value),
                CacheOp::Get { key } => {
                    let _ = cache.get(&key);
                }
                CacheOp::Delete { key } => cache.delete(&key),
            }
            prop_assert!(
                cache.len() <= max_entries,
                "cache size {} exceeds max {}",
                cache.len(),
                max_entries
            );
        }
    }

    // For any set of distinct keys filling the cache to capacity, inserting
    // one more evicts the entry with the least recent access and no other.
    #[test]
    fn prop_eviction_victim_is_oldest_access(
        keys in prop::collection::vec(key_strategy(), 3..10),
        new_key in key_strategy(),
        new_value in value_strategy()
    ) {
        let unique_keys: Vec<String> = keys
            .into_iter()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        prop_assume!(unique_keys.len() >= 2);
        prop_assume!(!unique_keys.contains(&new_key));

        let capacity = unique_keys.len();
        let cache = SettingCache::new(capacity, TEST_TTL);

        // Insertion order fixes the access order; the first key inserted is
        // the eviction candidate.
        for key in &unique_keys {
            cache.set(key, "value");
            std::thread::sleep(Duration::from_millis(2));
        }
        prop_assert_eq!(cache.len(), capacity);

        cache.set(&new_key, &new_value);

        prop_assert_eq!(cache.len(), capacity);
        prop_assert!(
            cache.get(&unique_keys[0]).is_none(),
            "oldest key '{}' should have been evicted",
            unique_keys[0]
        );
        for key in unique_keys.iter().skip(1) {
            prop_assert!(cache.get(key).is_some(), "key '{}' should survive", key);
        }
        prop_assert!(cache.get(&new_key).is_some());
    }

    // For any fill at capacity, touching the eviction candidate via get
    // shifts the victim to the next oldest access.
    #[test]
    fn prop_get_refreshes_eviction_order(
        keys in prop::collection::vec(key_strategy(), 3..8),
        new_key in key_strategy(),
        new_value in value_strategy()
    ) {
        let unique_keys: Vec<String> = keys
            .into_iter()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        prop_assume!(unique_keys.len() >= 3);
        prop_assume!(!unique_keys.contains(&new_key));

        let capacity = unique_keys.len();
        let cache = SettingCache::new(capacity, TEST_TTL);

        for key in &unique_keys {
            cache.set(key, "value");
            std::thread::sleep(Duration::from_millis(2));
        }

        // The first key would be evicted next; reading it makes the second
        // key the oldest access instead.
        let _ = cache.get(&unique_keys[0]);
        std::thread::sleep(Duration::from_millis(2));

        cache.set(&new_key, &new_value);

        prop_assert!(
            cache.get(&unique_keys[0]).is_some(),
            "recently read key should not be evicted"
        );
        prop_assert!(
            cache.get(&unique_keys[1]).is_none(),
            "key '{}' should have been evicted as the oldest access",
            unique_keys[1]
        );
        prop_assert!(cache.get(&new_key).is_some());
    }
}
