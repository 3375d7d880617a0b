//! MRU Cache - command shell
//!
//! Reads cache commands from stdin and prints results on stdout.

use std::io;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mru_cache::config::DEFAULT_LOG_FILTER;
use mru_cache::{Config, Session};

/// Main entry point for the MRU cache shell.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber (logs go to stderr)
/// 2. Load configuration from environment variables
/// 3. Create the cache session with the configured capacity
/// 4. Execute stdin commands until EOF or `quit`
fn main() -> Result<()> {
    // Defaults to "mru_cache=info", can be overridden with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();

    info!(max_items = config.max_items, "Starting MRU cache shell");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::from_config(&config, stdout.lock());

    session
        .run(stdin.lock())
        .context("command session failed")?;

    info!("Session finished");
    Ok(())
}
