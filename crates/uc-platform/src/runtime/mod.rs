//! Long-running tasks driving the clipboard sync use cases.

pub mod clipboard_runtime;
pub mod event_bus;
pub mod view_sync_runtime;

pub use clipboard_runtime::{ClipboardRuntime, ClipboardRuntimeHandle};
pub use view_sync_runtime::ViewSyncRuntime;
