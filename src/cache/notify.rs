//! Discard Notification Module
//!
//! Hooks invoked when the MRU policy discards an entry.

use std::fmt::Display;

/// Literal tag that prefixes every discard notice.
pub const DISCARD_TAG: &str = "DISCARD:";

/// Renders the human-readable notice for a discarded key.
pub fn discard_notice<K: Display + ?Sized>(key: &K) -> String {
    format!("{} {}", DISCARD_TAG, key)
}

// == Discard Listener ==
/// Receives the key of every entry the cache discards.
///
/// Called exactly once per eviction and never otherwise.
pub trait DiscardListener<K> {
    fn on_discard(&mut self, key: &K);
}

/// Ignores all notices.
impl<K> DiscardListener<K> for () {
    fn on_discard(&mut self, _key: &K) {}
}

// == Stdout Notice ==
/// Default listener: prints `DISCARD: <key>` on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutNotice;

impl<K: Display> DiscardListener<K> for StdoutNotice {
    fn on_discard(&mut self, key: &K) {
        println!("{}", discard_notice(key));
    }
}

// == Discard Log ==
/// Keeps rendered notices in memory until they are drained.
#[derive(Debug, Clone, Default)]
pub struct DiscardLog {
    notices: Vec<String>,
}

impl DiscardLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices recorded so far, oldest first.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Takes every pending notice, leaving the log empty.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }
}

impl<K: Display> DiscardListener<K> for DiscardLog {
    fn on_discard(&mut self, key: &K) {
        self.notices.push(discard_notice(key));
    }
}
