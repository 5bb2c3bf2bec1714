//! View synchronization state machine.

pub mod state;

pub use state::{ConnectionStatus, ViewState, ViewTransition};
