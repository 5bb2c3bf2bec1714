//! # uc-core
//!
//! Core domain models and business logic for UniClip.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod clipboard;
pub mod config;
pub mod ids;
pub mod ports;
pub mod sync;

// Re-export commonly used types at the crate root
pub use clipboard::{
    fingerprint, ClipboardContent, ClipboardObservation, ContentFingerprint, ContentKind,
    LocalDetectionState, NewClipboardEntry, PresentationContent, PresentationItem,
    PresentationModel, RemoteClipboardEntry,
};
pub use config::AppConfig;
pub use ids::DeviceId;
pub use sync::{ConnectionStatus, ViewState};
