//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the MRU invariants over random operation sequences.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

use crate::cache::{DiscardLog, MruCache};

type TestCache = MruCache<String, u32, DiscardLog>;

// == Strategies ==
/// Small key space so that updates and re-reads happen often.
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-f]".prop_map(|s| s)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put {
        key: Option<String>,
        value: Option<u32>,
    },
    Get {
        key: Option<String>,
    },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        3 => (proptest::option::weighted(0.9, key_strategy()), proptest::option::weighted(0.9, any::<u32>()))
            .prop_map(|(key, value)| CacheOp::Put { key, value }),
        2 => proptest::option::weighted(0.9, key_strategy()).prop_map(|key| CacheOp::Get { key }),
    ]
}

fn apply(cache: &mut TestCache, op: &CacheOp) -> Option<u32> {
    match op {
        CacheOp::Put { key, value } => {
            cache.put(key.clone(), *value);
            None
        }
        CacheOp::Get { key } => cache.get(key.as_deref()).copied(),
    }
}

// == Reference Model ==
/// Straight list-based rendition of the MRU rules.
#[derive(Default)]
struct Model {
    data: HashMap<String, u32>,
    order: Vec<String>,
    discarded: Vec<String>,
}

impl Model {
    fn apply(&mut self, capacity: usize, op: &CacheOp) -> Option<u32> {
        match op {
            CacheOp::Put {
                key: Some(key),
                value: Some(value),
            } => {
                if self.data.contains_key(key) {
                    self.order.retain(|k| k != key);
                }
                self.data.insert(key.clone(), *value);
                self.order.push(key.clone());
                if self.data.len() > capacity {
                    let victim = self.order.pop().unwrap();
                    self.data.remove(&victim);
                    self.discarded.push(format!("DISCARD: {}", victim));
                }
                None
            }
            CacheOp::Put { .. } => None,
            CacheOp::Get { key: Some(key) } => {
                let value = *self.data.get(key)?;
                self.order.retain(|k| k != key);
                self.order.push(key.clone());
                Some(value)
            }
            CacheOp::Get { key: None } => None,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Size never exceeds capacity after any put.
    #[test]
    fn prop_capacity_enforcement(
        capacity in 0usize..6,
        ops in prop::collection::vec(cache_op_strategy(), 1..80)
    ) {
        let mut cache = TestCache::with_listener(capacity, DiscardLog::new());

        for op in &ops {
            apply(&mut cache, op);
            prop_assert!(
                cache.len() <= capacity,
                "Cache size {} exceeds capacity {}",
                cache.len(),
                capacity
            );
        }
    }

    // The recency order holds exactly the stored keys, once each.
    #[test]
    fn prop_order_matches_entries(
        capacity in 0usize..6,
        ops in prop::collection::vec(cache_op_strategy(), 1..80)
    ) {
        let mut cache = TestCache::with_listener(capacity, DiscardLog::new());

        for op in &ops {
            apply(&mut cache, op);

            let ordered: Vec<&String> = cache.keys_by_recency().collect();
            let unique: HashSet<&String> = ordered.iter().copied().collect();
            prop_assert_eq!(ordered.len(), unique.len(), "Duplicate key in order");
            prop_assert_eq!(ordered.len(), cache.len());
            for key in &ordered {
                prop_assert!(cache.contains_key(key.as_str()), "Order key '{}' not stored", key);
            }
        }
    }

    // Every operation agrees with the list-based model, including the
    // exact discard notices.
    #[test]
    fn prop_matches_reference_model(
        capacity in 0usize..6,
        ops in prop::collection::vec(cache_op_strategy(), 1..80)
    ) {
        let mut cache = TestCache::with_listener(capacity, DiscardLog::new());
        let mut model = Model::default();

        for op in &ops {
            let got = apply(&mut cache, op);
            let expected = model.apply(capacity, op);
            prop_assert_eq!(got, expected, "Return value mismatch for {:?}", op);

            let ordered: Vec<String> = cache.keys_by_recency().cloned().collect();
            prop_assert_eq!(&ordered, &model.order);
        }

        prop_assert_eq!(cache.listener().notices(), model.discarded.as_slice());
        prop_assert_eq!(cache.stats().evictions as usize, model.discarded.len());
    }

    // A put that overflows always discards the key it just wrote.
    #[test]
    fn prop_overflow_discards_written_key(
        keys in prop::collection::hash_set(key_strategy(), 2..6),
        extra in "[g-z]"
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let capacity = keys.len();
        let mut cache = TestCache::with_listener(capacity, DiscardLog::new());

        for (i, key) in keys.iter().enumerate() {
            cache.put(Some(key.clone()), Some(i as u32));
        }
        let before: Vec<String> = cache.keys_by_recency().cloned().collect();

        cache.put(Some(extra.clone()), Some(99));

        let after: Vec<String> = cache.keys_by_recency().cloned().collect();
        prop_assert_eq!(before, after);
        prop_assert!(!cache.contains_key(extra.as_str()));
        prop_assert_eq!(cache.listener().notices(), &[format!("DISCARD: {}", extra)][..]);
    }

    // A put on a stored key replaces its value and moves it to the back.
    #[test]
    fn prop_overwrite_semantics(
        capacity in 1usize..6,
        key in key_strategy(),
        value1 in any::<u32>(),
        value2 in any::<u32>()
    ) {
        let mut cache = TestCache::with_listener(capacity, DiscardLog::new());

        cache.put(Some(key.clone()), Some(value1));
        cache.put(Some(key.clone()), Some(value2));

        prop_assert_eq!(cache.len(), 1);
        prop_assert_eq!(cache.peek(key.as_str()), Some(&value2));
        prop_assert_eq!(cache.keys_by_recency().last(), Some(&key));
        prop_assert!(cache.listener().notices().is_empty());
    }

    // Hits and misses count only real lookups.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut cache = TestCache::with_listener(3, DiscardLog::new());
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in &ops {
            let found = apply(&mut cache, op).is_some();
            if let CacheOp::Get { key: Some(_) } = op {
                if found {
                    expected_hits += 1;
                } else {
                    expected_misses += 1;
                }
            }
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, cache.len(), "Total entries mismatch");
    }
}
