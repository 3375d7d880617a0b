//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with MRU tracking.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::debug;

use crate::cache::{CacheStats, DiscardListener, MruTracker, StdoutNotice, MAX_ITEMS};

// == MRU Cache ==
/// Bounded key-value cache that discards the most recently touched entry
/// when it grows past capacity.
///
/// Not synchronized: share it behind an external lock if needed.
#[derive(Debug)]
pub struct MruCache<K, V, L = StdoutNotice> {
    /// Key-value storage
    entries: HashMap<K, V>,
    /// Recency order, newest at the back
    order: MruTracker<K>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Receives discard notices
    listener: L,
}

impl<K, V> MruCache<K, V, StdoutNotice>
where
    K: Hash + Eq + Clone + fmt::Display,
{
    // == Constructor ==
    /// Creates a cache holding up to [`MAX_ITEMS`] entries that prints
    /// discard notices on stdout.
    pub fn new() -> Self {
        Self::with_capacity(MAX_ITEMS)
    }

    /// Creates a stdout-notifying cache with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_listener(capacity, StdoutNotice)
    }
}

impl<K, V> Default for MruCache<K, V, StdoutNotice>
where
    K: Hash + Eq + Clone + fmt::Display,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, L> MruCache<K, V, L>
where
    K: Hash + Eq + Clone,
    L: DiscardListener<K>,
{
    /// Creates a cache that reports discards to `listener`.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries kept after each operation
    /// * `listener` - Receives the key of every discarded entry
    pub fn with_listener(capacity: usize, listener: L) -> Self {
        Self {
            entries: HashMap::new(),
            order: MruTracker::new(),
            stats: CacheStats::new(),
            capacity,
            listener,
        }
    }

    // == Put ==
    /// Stores a value and marks its key as most recently touched.
    ///
    /// A `None` key or value makes the call a silent no-op. If the write
    /// pushes the cache past capacity, the most recently touched key is
    /// discarded, which is the key just written.
    pub fn put(&mut self, key: Option<K>, value: Option<V>) {
        let (Some(key), Some(value)) = (key, value) else {
            return;
        };

        // touch drops the key's old position before appending it
        self.entries.insert(key.clone(), value);
        self.order.touch(key);

        if self.entries.len() > self.capacity {
            self.evict_newest();
        }

        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a value and marks its key as most recently touched.
    ///
    /// Returns `None` for a `None` key or a key that is not cached.
    pub fn get<Q>(&mut self, key: Option<&Q>) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let key = key?;

        if !self.entries.contains_key(key) {
            self.stats.record_miss();
            return None;
        }

        self.order.promote(key);
        self.stats.record_hit();
        self.entries.get(key)
    }

    // == Evict ==
    fn evict_newest(&mut self) {
        let Some(victim) = self.order.evict_newest() else {
            return;
        };

        self.entries.remove(&victim);
        self.stats.record_eviction();
        debug!(
            len = self.entries.len(),
            capacity = self.capacity,
            "discarded most recently used entry"
        );
        self.listener.on_discard(&victim);
    }
}

impl<K, V, L> MruCache<K, V, L>
where
    K: Hash + Eq,
{
    /// Returns a value without refreshing its recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Keys from least to most recently touched.
    pub fn keys_by_recency(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats;
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }
}

// == Display ==
/// Dumps the cache as `Current cache:` followed by `key: value` lines in
/// ascending key order.
impl<K, V, L> fmt::Display for MruCache<K, V, L>
where
    K: Hash + Eq + Ord + fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current cache:")?;

        let mut entries: Vec<(&K, &V)> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        for (key, value) in entries {
            writeln!(f, "{}: {}", key, value)?;
        }
        Ok(())
    }
}
