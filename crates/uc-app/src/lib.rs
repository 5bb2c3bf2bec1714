//! UniClip Application Orchestration Layer
//!
//! This crate contains the clipboard sync use cases:
//!
//! ```text
//! [clipboard runtime tick]
//!         ↓
//! ChangeDetector          → ClipboardObservation
//!         ↓
//! ReconcileObservation    → touch, else create
//!         ↓ (list changed)
//! ViewSynchronizer        → PresentationModel → DisplayPort
//!         ↑
//! [view runtime tick / manual refresh]
//! ```

pub mod signal;
pub mod usecases;

pub use signal::WakeSignal;
pub use usecases::clipboard::{
    ChangeDetector, CopyItemError, CopyItemToClipboard, ReconcileError, ReconcileObservation,
    ReconcileOutcome, SyncTrigger, ViewSynchronizer,
};
