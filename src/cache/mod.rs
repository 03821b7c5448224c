//! Cache Module
//!
//! Provides a fixed-capacity cache with least-recently-used eviction.
//!
//! # Examples
//!
//! ```
//! use structures::cache::{Cache, LruCache};
//!
//! fn warm<C: Cache<u32, &'static str>>(cache: &mut C) {
//!     cache.insert(1, "one");
//!     cache.insert(2, "two");
//! }
//!
//! let mut cache = LruCache::with_capacity(10);
//! warm(&mut cache);
//!
//! assert_eq!(Cache::get(&mut cache, &1), Some(&"one"));
//! ```

mod entry;
mod lru;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use lru::Iter;
pub use stats::CacheStats;
pub use store::LruCache;

use std::hash::Hash;

// == Cache Trait ==
/// Common interface for bounded key-value caches.
pub trait Cache<K, V> {
    /// Reads a value, updating whatever bookkeeping the eviction policy needs.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Stores a value, returning the one it replaced.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Removes a value.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Checks residency without affecting eviction order.
    fn contains(&self, key: &K) -> bool;

    /// Number of resident entries.
    fn len(&self) -> usize;

    /// Maximum number of resident entries.
    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> Cache<K, V> for LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    fn get(&mut self, key: &K) -> Option<&V> {
        LruCache::get(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        LruCache::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        LruCache::remove(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        LruCache::contains(self, key)
    }

    fn len(&self) -> usize {
        LruCache::len(self)
    }

    fn capacity(&self) -> usize {
        LruCache::capacity(self)
    }
}
