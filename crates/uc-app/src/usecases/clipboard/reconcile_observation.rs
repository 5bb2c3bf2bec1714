use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, info_span, Instrument};

use uc_core::ports::{RemoteStoreError, RemoteStorePort, TouchOutcome};
use uc_core::{ClipboardObservation, DeviceId, NewClipboardEntry};

use crate::signal::WakeSignal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// An entry with the same fingerprint already existed and was refreshed.
    Touched,
    /// No entry existed; a new one was created.
    Created,
}

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("touch failed: {0}")]
    Touch(#[source] RemoteStoreError),

    #[error("create failed: {0}")]
    Create(#[source] RemoteStoreError),
}

impl ReconcileError {
    pub fn store_error(&self) -> &RemoteStoreError {
        match self {
            Self::Touch(err) | Self::Create(err) => err,
        }
    }

    pub fn is_connectivity(&self) -> bool {
        self.store_error().is_connectivity()
    }
}

/// Push one local observation to the remote store.
///
/// 将一次本地观测同步到远端：先 touch，仅在 404 时 create。
///
/// Touch always comes first; create is attempted only when the store reports
/// the fingerprint as unknown. Any other touch failure aborts without
/// creating. On success the list-changed signal is raised so the view
/// refreshes ahead of its timer.
pub struct ReconcileObservation {
    store: Arc<dyn RemoteStorePort>,
    list_changed: WakeSignal,
    device_id: Option<DeviceId>,
}

impl ReconcileObservation {
    pub fn new(
        store: Arc<dyn RemoteStorePort>,
        list_changed: WakeSignal,
        device_id: Option<DeviceId>,
    ) -> Self {
        Self {
            store,
            list_changed,
            device_id,
        }
    }

    pub async fn execute(
        &self,
        observation: &ClipboardObservation,
    ) -> Result<ReconcileOutcome, ReconcileError> {
        let fingerprint = observation.fingerprint();
        let span = info_span!(
            "usecase.clipboard.reconcile_observation.execute",
            kind = %observation.kind(),
            hash = %fingerprint.short(),
        );

        async move {
            let outcome = match self
                .store
                .touch_entry(&fingerprint)
                .await
                .map_err(ReconcileError::Touch)?
            {
                TouchOutcome::Touched => {
                    debug!("Existing entry touched");
                    ReconcileOutcome::Touched
                }
                TouchOutcome::NotFound => {
                    let entry = NewClipboardEntry::from_observation(
                        observation,
                        self.device_id.as_ref().map(|id| id.as_str().to_string()),
                    );
                    self.store
                        .create_entry(&entry)
                        .await
                        .map_err(ReconcileError::Create)?;
                    info!(
                        size_bytes = observation.content().size_bytes(),
                        "New entry created"
                    );
                    ReconcileOutcome::Created
                }
            };

            self.list_changed.raise();
            Ok(outcome)
        }
        .instrument(span)
        .await
    }
}
