//! Error types for the command shell
//!
//! Cache operations never fail; only the shell around them does.

use thiserror::Error;

// == Command Error Enum ==
/// Unified error type for the command shell.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Verb not recognised by the shell
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering the stats report failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the shell.
pub type Result<T> = std::result::Result<T, CommandError>;
