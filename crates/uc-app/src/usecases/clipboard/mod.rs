mod copy_item_to_clipboard;
mod detect_clipboard_change;
mod reconcile_observation;
mod sync_view;

pub use copy_item_to_clipboard::{CopyItemError, CopyItemToClipboard};
pub use detect_clipboard_change::ChangeDetector;
pub use reconcile_observation::{ReconcileError, ReconcileObservation, ReconcileOutcome};
pub use sync_view::{SyncTrigger, ViewSynchronizer};
