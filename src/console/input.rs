use std::str::FromStr;

use thiserror::Error;

/// A line typed at the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Fetch the remote history now
    Refresh,
    /// Copy the item at this 1-based position onto the clipboard
    Copy(usize),
    /// Print the last fetched history again
    List,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("copy needs an item number")]
    MissingPosition,

    #[error("not an item number: {0}")]
    InvalidPosition(String),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

pub const HELP: &str = "\
Commands:
  r, refresh     fetch the shared history now
  c, copy <n>    copy item <n> onto the clipboard
  l, list        show the history again
  h, help        show this help
  q, quit        exit";

impl FromStr for ConsoleCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(ParseCommandError::Empty);
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "r" | "refresh" => Self::Refresh,
            "l" | "list" => Self::List,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            "c" | "copy" => {
                let arg = words.next().ok_or(ParseCommandError::MissingPosition)?;
                let position = arg
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| ParseCommandError::InvalidPosition(arg.to_string()))?;
                Self::Copy(position)
            }
            other => return Err(ParseCommandError::Unknown(other.to_string())),
        };

        match words.next() {
            Some(extra) => Err(ParseCommandError::UnexpectedArgument(extra.to_string())),
            None => Ok(command),
        }
    }
}
