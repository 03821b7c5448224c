//! Property-Based Tests for the LRU Cache
//!
//! Drives `LruCache` and a naive recency model with the same random operation
//! sequences and checks they never disagree.

use proptest::prelude::*;
use std::collections::VecDeque;

use crate::cache::LruCache;

// == Model ==
/// Reference LRU: front = most recently used. O(n) everywhere, obviously correct.
#[derive(Debug, Default)]
struct ModelLru {
    capacity: usize,
    entries: VecDeque<(u8, u32)>,
}

impl ModelLru {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::new(),
        }
    }

    fn position(&self, key: u8) -> Option<usize> {
        self.entries.iter().position(|(k, _)| *k == key)
    }

    fn get(&mut self, key: u8) -> Option<u32> {
        let pos = self.position(key)?;
        let entry = self.entries.remove(pos)?;
        self.entries.push_front(entry);
        Some(entry.1)
    }

    fn peek(&self, key: u8) -> Option<u32> {
        self.position(key).map(|pos| self.entries[pos].1)
    }

    fn insert(&mut self, key: u8, value: u32) -> Option<u32> {
        if let Some(pos) = self.position(key) {
            let (_, old) = self.entries.remove(pos)?;
            self.entries.push_front((key, value));
            return Some(old);
        }
        if self.capacity == 0 {
            return None;
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front((key, value));
        None
    }

    fn remove(&mut self, key: u8) -> Option<u32> {
        let pos = self.position(key)?;
        self.entries.remove(pos).map(|(_, v)| v)
    }
}

// == Strategies ==
#[derive(Debug, Clone)]
enum CacheOp {
    Insert { key: u8, value: u32 },
    Get { key: u8 },
    Peek { key: u8 },
    Contains { key: u8 },
    Remove { key: u8 },
    PopLru,
}

/// Keys come from a small domain so hits, overwrites and evictions all happen.
fn key_strategy() -> impl Strategy<Value = u8> {
    0u8..12
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        3 => (key_strategy(), any::<u32>()).prop_map(|(key, value)| CacheOp::Insert { key, value }),
        2 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => key_strategy().prop_map(|key| CacheOp::Peek { key }),
        1 => key_strategy().prop_map(|key| CacheOp::Contains { key }),
        1 => key_strategy().prop_map(|key| CacheOp::Remove { key }),
        1 => Just(CacheOp::PopLru),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // For any operation sequence, the cache agrees with the model on every
    // returned value and on the full recency order.
    #[test]
    fn prop_matches_model(
        capacity in 0usize..6,
        ops in prop::collection::vec(cache_op_strategy(), 1..120)
    ) {
        let mut cache = LruCache::with_capacity(capacity);
        let mut model = ModelLru::new(capacity);

        for op in ops {
            match op {
                CacheOp::Insert { key, value } => {
                    prop_assert_eq!(cache.insert(key, value), model.insert(key, value));
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(cache.get(&key).copied(), model.get(key));
                }
                CacheOp::Peek { key } => {
                    prop_assert_eq!(cache.peek(&key).copied(), model.peek(key));
                }
                CacheOp::Contains { key } => {
                    prop_assert_eq!(cache.contains(&key), model.position(key).is_some());
                }
                CacheOp::Remove { key } => {
                    prop_assert_eq!(cache.remove(&key), model.remove(key));
                }
                CacheOp::PopLru => {
                    prop_assert_eq!(cache.pop_lru(), model.entries.pop_back());
                }
            }

            let order: Vec<(u8, u32)> = cache.iter().map(|(k, v)| (*k, *v)).collect();
            let expected: Vec<(u8, u32)> = model.entries.iter().copied().collect();
            prop_assert_eq!(order, expected);
        }
    }

    // For any operation sequence, len() never exceeds the capacity.
    #[test]
    fn prop_capacity_enforcement(
        capacity in 0usize..8,
        ops in prop::collection::vec(cache_op_strategy(), 1..200)
    ) {
        let mut cache = LruCache::with_capacity(capacity);

        for op in ops {
            match op {
                CacheOp::Insert { key, value } => { cache.insert(key, value); }
                CacheOp::Get { key } => { cache.get(&key); }
                CacheOp::Remove { key } => { cache.remove(&key); }
                CacheOp::PopLru => { cache.pop_lru(); }
                CacheOp::Peek { .. } | CacheOp::Contains { .. } => {}
            }
            prop_assert!(
                cache.len() <= capacity,
                "Cache size {} exceeds capacity {}",
                cache.len(),
                capacity
            );
        }
    }

    // Re-inserting a resident key returns the prior value, keeps len() and evicts nothing.
    #[test]
    fn prop_overwrite_never_evicts(
        keys in prop::collection::hash_set(key_strategy(), 1..6),
        value in any::<u32>()
    ) {
        let keys: Vec<u8> = keys.into_iter().collect();
        let mut cache = LruCache::with_capacity(keys.len());
        for &key in &keys {
            cache.insert(key, u32::from(key));
        }

        for &key in &keys {
            prop_assert_eq!(cache.insert(key, value), Some(u32::from(key)));
            prop_assert_eq!(cache.len(), keys.len());
        }
        prop_assert_eq!(cache.stats().evictions, 0);
    }

    // Any number of peek/contains calls leaves the eviction order untouched.
    #[test]
    fn prop_peek_and_contains_are_idempotent(
        keys in prop::collection::hash_set(key_strategy(), 2..6),
        probes in prop::collection::vec(key_strategy(), 0..40)
    ) {
        let keys: Vec<u8> = keys.into_iter().collect();
        let mut cache = LruCache::with_capacity(keys.len());
        for &key in &keys {
            cache.insert(key, 0u32);
        }
        let before: Vec<u8> = cache.keys().copied().collect();

        for probe in probes {
            cache.peek(&probe);
            cache.contains(&probe);
        }

        let after: Vec<u8> = cache.keys().copied().collect();
        prop_assert_eq!(&before, &after);
        prop_assert_eq!(cache.pop_lru().map(|(k, _)| k), before.last().copied());
    }
}
