//! # uc-platform
//!
//! Platform-specific implementations for UniClip.
//!
//! This crate contains the system clipboard adapter and the long-running
//! runtimes that drive the clipboard sync use cases.

pub mod clipboard;
pub mod ipc;
pub mod runtime;

pub use clipboard::LocalClipboard;
pub use runtime::{ClipboardRuntime, ClipboardRuntimeHandle, ViewSyncRuntime};
