//! MRU Cache - A bounded in-memory key-value cache
//!
//! When the cache grows past capacity it discards the most recently used
//! entry, the opposite of LRU.

pub mod cache;
pub mod config;
pub mod error;
pub mod shell;

pub use cache::{MruCache, MAX_ITEMS};
pub use config::Config;
pub use shell::Session;
