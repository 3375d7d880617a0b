//! Shell Commands
//!
//! Parses one input line into a [`Command`].

use crate::error::{CommandError, Result};

/// A single shell instruction.
///
/// Missing `put`/`get` arguments are kept as `None` so they reach the cache
/// as absent markers instead of being rejected here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `put <key> <value...>`
    Put {
        key: Option<String>,
        value: Option<String>,
    },
    /// `get <key>`
    Get { key: Option<String> },
    /// `show`
    Show,
    /// `stats`
    Stats,
    /// `help`
    Help,
    /// `quit` or `exit`
    Quit,
}

impl Command {
    /// Parses a line of input.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments. The value of a
    /// `put` is the rest of the line after the key, inner spaces included.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (verb, rest) = next_word(line);
        let verb = verb.unwrap_or_default().to_ascii_lowercase();

        let command = match verb.as_str() {
            "put" | "set" => {
                let (key, rest) = next_word(rest);
                let value = Some(rest.trim()).filter(|v| !v.is_empty());
                Command::Put {
                    key: key.map(str::to_string),
                    value: value.map(str::to_string),
                }
            }
            "get" => {
                let (key, _) = next_word(rest);
                Command::Get {
                    key: key.map(str::to_string),
                }
            }
            "show" | "print" => Command::Show,
            "stats" => Command::Stats,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::UnknownCommand(verb)),
        };

        Ok(Some(command))
    }
}

/// Splits off the first whitespace-delimited word.
fn next_word(input: &str) -> (Option<&str>, &str) {
    let input = input.trim_start();
    if input.is_empty() {
        return (None, input);
    }

    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (Some(word), rest),
        None => (Some(input), ""),
    }
}
