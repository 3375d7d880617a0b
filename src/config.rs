//! Configuration Module
//!
//! Loads cache configuration from environment variables.

use std::env;

use tracing::warn;

use crate::cache::MAX_ITEMS;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "mru_cache=info";

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache keeps
    pub max_items: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ITEMS` - Cache capacity (default: 4)
    ///
    /// The log filter is read separately from `RUST_LOG` before this runs,
    /// so parse warnings are not lost.
    pub fn from_env() -> Self {
        Self {
            max_items: parse_var("MAX_ITEMS", env::var("MAX_ITEMS").ok(), MAX_ITEMS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_items: MAX_ITEMS,
        }
    }
}

/// Parses an optional raw value, falling back to `default` when it is
/// missing or malformed.
fn parse_var<T: std::str::FromStr>(name: &str, raw: Option<String>, default: T) -> T {
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(variable = name, value = %raw, "ignoring unparsable value, using default");
            default
        }
    }
}
