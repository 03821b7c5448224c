//! LRU Recency List Module
//!
//! An arena-backed doubly linked list ordering resident entries by recency.
//! Nodes live in a `Vec` and link to each other through slot indices, so the
//! index map can hold plain `usize` handles instead of references.

use crate::cache::entry::Entry;

// == Recency List ==
/// Owns every resident entry and keeps them in access order.
///
/// - Head = Most recently used
/// - Tail = Least recently used
///
/// Slot indices returned by [`RecencyList::push_front`] stay valid until the
/// entry is removed or evicted; freed slots are recycled.
#[derive(Debug, Clone)]
pub(crate) struct RecencyList<K, V> {
    slots: Vec<Option<Entry<K, V>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<K, V> RecencyList<K, V> {
    // == Constructor ==
    /// Creates an empty list with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Length ==
    /// Returns the number of resident entries.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Push Front ==
    /// Stores a new entry as the most recently used and returns its slot.
    pub fn push_front(&mut self, key: K, value: V) -> usize {
        let entry = Entry::new(key, value);
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(entry);
                idx
            }
            None => {
                self.slots.push(Some(entry));
                self.slots.len() - 1
            }
        };
        self.link_front(idx);
        self.len += 1;
        idx
    }

    // == Touch ==
    /// Marks the entry in `idx` as most recently used.
    pub fn touch(&mut self, idx: usize) {
        if self.head == Some(idx) || self.entry(idx).is_none() {
            return;
        }
        self.unlink(idx);
        self.link_front(idx);
    }

    // == Remove ==
    /// Removes the entry in `idx` and frees its slot.
    pub fn remove(&mut self, idx: usize) -> Option<(K, V)> {
        self.entry(idx)?;
        self.unlink(idx);
        let entry = self.slots[idx].take()?;
        self.free.push(idx);
        self.len -= 1;
        Some(entry.into_pair())
    }

    // == Evict Oldest ==
    /// Removes and returns the least recently used entry.
    ///
    /// Returns None if the list is empty.
    pub fn evict_oldest(&mut self) -> Option<(K, V)> {
        let tail = self.tail?;
        self.remove(tail)
    }

    // == Peek Oldest ==
    /// Returns the least recently used entry without removing it.
    pub fn peek_oldest(&self) -> Option<(&K, &V)> {
        let entry = self.entry(self.tail?)?;
        Some((&entry.key, &entry.value))
    }

    // == Entry Access ==
    pub fn entry(&self, idx: usize) -> Option<&Entry<K, V>> {
        self.slots.get(idx)?.as_ref()
    }

    pub fn value_mut(&mut self, idx: usize) -> Option<&mut V> {
        self.slots
            .get_mut(idx)?
            .as_mut()
            .map(|entry| &mut entry.value)
    }

    // == Clear ==
    /// Drops every entry and releases all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Iter ==
    /// Iterates from most to least recently used.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: &self.slots,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    fn link_front(&mut self, idx: usize) {
        let old_head = self.head;
        if let Some(entry) = self.slots[idx].as_mut() {
            entry.prev = None;
            entry.next = old_head;
        }
        match old_head.and_then(|head| self.slots[head].as_mut()) {
            Some(head) => head.prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }

    fn unlink(&mut self, idx: usize) {
        let Some((prev, next)) = self.entry(idx).map(|entry| (entry.prev, entry.next)) else {
            return;
        };

        match prev.and_then(|prev| self.slots[prev].as_mut()) {
            Some(prev_entry) => prev_entry.next = next,
            None => self.head = next,
        }
        match next.and_then(|next| self.slots[next].as_mut()) {
            Some(next_entry) => next_entry.prev = prev,
            None => self.tail = prev,
        }

        if let Some(entry) = self.slots[idx].as_mut() {
            entry.prev = None;
            entry.next = None;
        }
    }
}

// == Iterator ==
/// Iterator over resident entries, most recently used first.
///
/// Created by [`LruCache::iter`](crate::cache::LruCache::iter). Reversing it
/// walks from the least recently used entry instead.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    slots: &'a [Option<Entry<K, V>>],
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = self.slots.get(self.front?)?.as_ref()?;
        self.front = entry.next;
        self.remaining -= 1;
        Some((&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = self.slots.get(self.back?)?.as_ref()?;
        self.back = entry.prev;
        self.remaining -= 1;
        Some((&entry.key, &entry.value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
