//! Stats Report
//!
//! JSON body printed by the `stats` command.

use serde::Serialize;

use crate::cache::CacheStats;

/// Cache statistics together with capacity and hit rate.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    #[serde(flatten)]
    pub stats: CacheStats,
    /// Configured maximum number of entries
    pub capacity: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
}

impl StatsReport {
    pub fn new(stats: CacheStats, capacity: usize) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            stats,
            capacity,
        }
    }
}
