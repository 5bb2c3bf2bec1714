//! Console front end: prints the shared history and reads commands from stdin.

mod display;
mod input;

pub use display::ConsoleDisplay;
pub use input::{ConsoleCommand, ParseCommandError, HELP};
