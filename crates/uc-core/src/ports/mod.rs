//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! external dependencies.
//!
//! | Port | Implemented by |
//! |------|----------------|
//! | [`ClipboardHostPort`] | `uc-platform` (clipboard-rs) |
//! | [`RemoteStorePort`] | `uc-infra` (reqwest) |
//! | [`DisplayPort`] | the binary's display layer |
//! | [`ClipboardWriteBackPort`] | `uc-platform` clipboard runtime handle |

mod clipboard_host;
mod clipboard_write_back;
mod display;
pub mod errors;
mod remote_store;

pub use clipboard_host::ClipboardHostPort;
pub use clipboard_write_back::ClipboardWriteBackPort;
pub use display::DisplayPort;
pub use errors::{ClipboardError, RemoteStoreError};
pub use remote_store::{RemoteStorePort, TouchOutcome};
