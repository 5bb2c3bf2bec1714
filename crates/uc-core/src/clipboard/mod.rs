//! Clipboard domain models.
mod content;
mod detection;
mod entry;
mod hash;
mod view;

pub use content::{ClipboardContent, ClipboardObservation, ContentKind, UnknownContentKind};
pub use detection::LocalDetectionState;
pub use entry::{NewClipboardEntry, RemoteClipboardEntry};
pub use hash::{fingerprint, ContentFingerprint};
pub use view::{format_timestamp, PresentationContent, PresentationItem, PresentationModel};
