//! Shell Module
//!
//! Line-oriented command interface over a single MRU cache.
//!
//! # Commands
//! - `put <key> <value>` - Store a value
//! - `get <key>` - Print a value, or `None`
//! - `show` - Print the cache contents
//! - `stats` - Print statistics as JSON
//! - `help` / `quit`

mod command;
mod report;
mod session;

pub use command::Command;
pub use report::StatsReport;
pub use session::{Flow, Session, MISSING};
