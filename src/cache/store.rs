//! LRU Cache Store Module
//!
//! Main cache engine combining a key index with the arena recency list.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::mem;

use tracing::trace;

use crate::cache::lru::{Iter, RecencyList};
use crate::cache::CacheStats;
use crate::config::Config;

// == LRU Cache ==
/// Fixed-capacity map that evicts the least recently used entry when full.
///
/// Every operation is O(1) amortized: the index maps keys to arena slots and
/// promotion is an unlink plus push-front in the recency list.
///
/// A capacity of zero is valid: such a cache never stores anything and every
/// insert is a no-op.
///
/// # Examples
///
/// ```
/// use structures::cache::LruCache;
///
/// let mut cache = LruCache::with_capacity(2);
/// cache.insert("a", 1);
/// cache.insert("b", 2);
/// cache.get("a");
/// cache.insert("c", 3);
///
/// assert!(!cache.contains("b"));
/// assert!(cache.contains("a"));
/// assert!(cache.contains("c"));
/// ```
///
/// Iterators borrow the cache, so it cannot change underneath them:
///
/// ```compile_fail
/// use structures::cache::LruCache;
///
/// let mut cache = LruCache::with_capacity(2);
/// cache.insert(1, "one");
/// for (key, _) in cache.iter() {
///     cache.remove(key);
/// }
/// ```
pub struct LruCache<K, V> {
    /// Key to arena slot
    index: HashMap<K, usize>,
    /// Entries in recency order
    order: RecencyList<K, V>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            order: RecencyList::with_capacity(capacity),
            stats: CacheStats::new(),
            capacity,
        }
    }

    /// Creates an empty cache sized by `config.cache_capacity`.
    pub fn from_config(config: &Config) -> Self {
        Self::with_capacity(config.cache_capacity)
    }

    // == Contains ==
    /// Checks whether `key` is resident without touching its recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    // == Peek ==
    /// Reads a value without promoting it.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let &idx = self.index.get(key)?;
        self.order.entry(idx).map(|entry| &entry.value)
    }

    // == Get ==
    /// Reads a value and marks it most recently used.
    ///
    /// A miss changes nothing except the miss counter.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_mut(key).map(|value| &*value)
    }

    /// Mutable variant of [`LruCache::get`]; also promotes the entry.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.get(key) {
            Some(&idx) => {
                self.stats.record_hit();
                self.order.touch(idx);
                self.order.value_mut(idx)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Insert ==
    /// Stores `value` under `key` as the most recently used entry.
    ///
    /// Replacing an existing key returns the previous value and never evicts.
    /// Storing a new key into a full cache evicts the least recently used
    /// entry first.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&idx) = self.index.get(&key) {
            self.order.touch(idx);
            return self
                .order
                .value_mut(idx)
                .map(|slot| mem::replace(slot, value));
        }

        if self.capacity == 0 {
            trace!("insert rejected by zero-capacity cache");
            return None;
        }

        if self.index.len() >= self.capacity {
            self.evict_lru();
        }

        let idx = self.order.push_front(key.clone(), value);
        self.index.insert(key, idx);
        self.stats.record_insert();
        None
    }

    // == Remove ==
    /// Removes `key` wherever it sits in the recency order.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.index.remove(key)?;
        self.order.remove(idx).map(|(_, value)| value)
    }

    // == Least Recently Used ==
    /// Returns the next entry to be evicted without promoting it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.order.peek_oldest()
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let (key, value) = self.order.evict_oldest()?;
        self.index.remove(&key);
        Some((key, value))
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.index.len(), self.order.len());
        self.index.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Capacity ==
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true when the next new key would trigger an eviction.
    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    // == Clear ==
    /// Drops every entry. Statistics are kept.
    pub fn clear(&mut self) {
        self.index.clear();
        self.order.clear();
    }

    // == Iteration ==
    /// Iterates entries from most to least recently used without promoting them.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.order.iter()
    }

    /// Iterates keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Zeroes the statistics counters.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    fn evict_lru(&mut self) {
        if self.pop_lru().is_some() {
            self.stats.record_eviction();
            trace!(capacity = self.capacity, "evicted least recently used entry");
        }
    }
}

impl<K, V> Extend<(K, V)> for LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> fmt::Debug for LruCache<K, V>
where
    K: Hash + Eq + Clone + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.capacity)
            .field("entries", &DebugEntries(self))
            .finish()
    }
}

struct DebugEntries<'a, K, V>(&'a LruCache<K, V>);

impl<K, V> fmt::Debug for DebugEntries<'_, K, V>
where
    K: Hash + Eq + Clone + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}
