//! MRU Tracker Module
//!
//! Keeps the recency order used to pick MRU eviction victims.

use std::borrow::Borrow;
use std::collections::VecDeque;

// == MRU Tracker ==
/// Tracks access order for MRU eviction.
///
/// Keys are stored in a VecDeque where:
/// - Front = Least recently touched
/// - Back = Most recently touched (next eviction victim)
#[derive(Debug, Clone)]
pub struct MruTracker<K> {
    /// Order of keys by touch time
    order: VecDeque<K>,
}

impl<K> Default for MruTracker<K> {
    fn default() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }
}

impl<K: Eq> MruTracker<K> {
    // == Constructor ==
    /// Creates a new empty MRU tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Touch ==
    /// Marks a key as just touched (moves to back).
    ///
    /// Any existing occurrence is dropped first, so the key appears once.
    pub fn touch(&mut self, key: K) {
        self.remove(&key);
        self.order.push_back(key);
    }

    // == Promote ==
    /// Moves an already tracked key to the back without taking ownership
    /// of a new copy.
    ///
    /// Returns false if the key is not tracked.
    pub fn promote<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        match self.position(key) {
            Some(index) => {
                if let Some(k) = self.order.remove(index) {
                    self.order.push_back(k);
                }
                true
            }
            None => false,
        }
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.order.retain(|k| k.borrow() != key);
    }

    // == Evict Newest ==
    /// Returns and removes the most recently touched key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_newest(&mut self) -> Option<K> {
        self.order.pop_back()
    }

    /// Returns the most recently touched key without removing it.
    pub fn peek_newest(&self) -> Option<&K> {
        self.order.back()
    }

    /// Returns the least recently touched key.
    pub fn peek_oldest(&self) -> Option<&K> {
        self.order.front()
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position(key).is_some()
    }

    /// Iterates keys from least to most recently touched.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.order.iter().position(|k| k.borrow() == key)
    }
}
