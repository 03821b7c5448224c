//! Cache Entry Module
//!
//! Defines the arena node holding one resident key-value pair.

// == Cache Entry ==
/// A resident entry plus its links in the recency list.
///
/// `prev` points towards the most recently used end, `next` towards the
/// least recently used end. Links are slot indices into the owning arena.
#[derive(Debug, Clone)]
pub(crate) struct Entry<K, V> {
    /// The key, duplicated from the index so eviction can find it
    pub key: K,
    /// The stored value
    pub value: V,
    /// More recently used neighbour
    pub prev: Option<usize>,
    /// Less recently used neighbour
    pub next: Option<usize>,
}

impl<K, V> Entry<K, V> {
    // == Constructor ==
    /// Creates an unlinked entry.
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            prev: None,
            next: None,
        }
    }

    // == Into Pair ==
    /// Drops the links and returns the key-value pair.
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}
