//! Cache Module
//!
//! Provides a bounded in-memory cache with MRU eviction.

mod mru;
mod notify;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use mru::MruTracker;
pub use notify::{discard_notice, DiscardListener, DiscardLog, StdoutNotice, DISCARD_TAG};
pub use stats::CacheStats;
pub use store::MruCache;

// == Public Constants ==
/// Capacity used when none is configured
pub const MAX_ITEMS: usize = 4;
