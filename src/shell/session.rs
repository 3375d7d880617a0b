//! Shell Session
//!
//! Executes commands against one cache and writes results to an output sink.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::cache::{DiscardLog, MruCache};
use crate::config::Config;
use crate::error::{CommandError, Result};
use crate::shell::{Command, StatsReport};

/// Printed by `get` on a miss.
pub const MISSING: &str = "None";

const HELP: &str = "\
commands:
  put <key> <value>  store a value
  get <key>          print a value, or None
  show               print every entry
  stats              print statistics as JSON
  help               print this text
  quit               end the session";

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A cache of string keys and values driven by text commands.
///
/// Discard notices raised by a command are written right after its output.
pub struct Session<W> {
    cache: MruCache<String, String, DiscardLog>,
    out: W,
}

impl<W: Write> Session<W> {
    /// Creates a session with an empty cache of the given capacity.
    pub fn new(capacity: usize, out: W) -> Self {
        Self {
            cache: MruCache::with_listener(capacity, DiscardLog::new()),
            out,
        }
    }

    /// Creates a session sized from the configuration.
    pub fn from_config(config: &Config, out: W) -> Self {
        Self::new(config.max_items, out)
    }

    pub fn cache(&self) -> &MruCache<String, String, DiscardLog> {
        &self.cache
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    // == Execute ==
    /// Runs one parsed command.
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        debug!(?command, "executing command");

        match command {
            Command::Put { key, value } => {
                self.cache.put(key, value);
            }
            Command::Get { key } => {
                let value = self.cache.get(key.as_deref());
                writeln!(self.out, "{}", value.map_or(MISSING, String::as_str))?;
            }
            Command::Show => {
                write!(self.out, "{}", self.cache)?;
            }
            Command::Stats => {
                let report = StatsReport::new(self.cache.stats(), self.cache.capacity());
                writeln!(self.out, "{}", serde_json::to_string(&report)?)?;
            }
            Command::Help => {
                writeln!(self.out, "{}", HELP)?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }

        self.flush_notices()?;
        Ok(Flow::Continue)
    }

    /// Parses and runs one line of input.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        match Command::parse(line)? {
            Some(command) => self.execute(command),
            None => Ok(Flow::Continue),
        }
    }

    // == Run ==
    /// Reads commands until end of input or `quit`.
    ///
    /// Unknown commands are reported on the output and skipped; I/O
    /// failures end the session.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            match self.execute_line(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => {
                    info!("Quit requested");
                    break;
                }
                Err(err @ CommandError::UnknownCommand(_)) => {
                    warn!(%err, "skipping input line");
                    writeln!(self.out, "error: {}", err)?;
                }
                Err(err) => return Err(err),
            }
        }

        self.out.flush()?;
        Ok(())
    }

    fn flush_notices(&mut self) -> Result<()> {
        for notice in self.cache.listener_mut().drain() {
            info!(%notice, "entry discarded");
            writeln!(self.out, "{}", notice)?;
        }
        Ok(())
    }
}
