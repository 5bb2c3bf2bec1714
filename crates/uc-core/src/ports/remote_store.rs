//! Remote store port - the shared clipboard history server

use async_trait::async_trait;

use super::errors::RemoteStoreError;
use crate::clipboard::{ContentFingerprint, NewClipboardEntry, RemoteClipboardEntry};

/// Result of a touch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchOutcome {
    /// `updatedAt` was refreshed.
    Touched,
    /// No entry with that hash; the caller decides whether to create one.
    NotFound,
}

#[async_trait]
pub trait RemoteStorePort: Send + Sync {
    /// Full entry list in server order.
    async fn list_entries(&self) -> Result<Vec<RemoteClipboardEntry>, RemoteStoreError>;

    /// Refresh the recency of the entry addressed by `hash`.
    async fn touch_entry(&self, hash: &ContentFingerprint)
        -> Result<TouchOutcome, RemoteStoreError>;

    async fn create_entry(&self, entry: &NewClipboardEntry) -> Result<(), RemoteStoreError>;
}
