use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};

use uc_core::ports::{DisplayPort, RemoteStorePort};
use uc_core::sync::ViewTransition;
use uc_core::{PresentationModel, ViewState};

/// What caused a view refresh. Only used for logging; every trigger runs the
/// same fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncTrigger {
    Timer,
    ListChanged,
    Manual,
}

impl fmt::Display for SyncTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Timer => "timer",
            Self::ListChanged => "list_changed",
            Self::Manual => "manual",
        };
        f.write_str(name)
    }
}

/// Keep the display in step with the authoritative remote list.
///
/// 拉取远端完整列表，去重后整体替换展示模型。
///
/// Every successful fetch replaces the presentation model wholesale and
/// reports `connected`; every failed fetch reports `disconnected` and leaves
/// the last rendered model in place.
pub struct ViewSynchronizer {
    store: Arc<dyn RemoteStorePort>,
    display: Arc<dyn DisplayPort>,
    state: ViewState,
}

impl ViewSynchronizer {
    pub fn new(store: Arc<dyn RemoteStorePort>, display: Arc<dyn DisplayPort>) -> Self {
        Self {
            store,
            display,
            state: ViewState::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub async fn sync(&mut self, trigger: SyncTrigger) -> ViewTransition {
        let span = info_span!("usecase.clipboard.sync_view.sync", trigger = %trigger);

        async {
            match self.store.list_entries().await {
                Ok(entries) => {
                    let fetched = entries.len();
                    let model = PresentationModel::from_entries(entries);
                    debug!(fetched, items = model.len(), "Fetched remote list");

                    let transition = self.state.apply_success(model);
                    if transition.status_changed {
                        info!("Remote store reachable");
                    }
                    if let Some(model) = self.state.model() {
                        self.display.render(model);
                    }
                    self.display.set_connection_status(true);
                    transition
                }
                Err(err) => {
                    let transition = self.state.apply_failure();
                    if transition.status_changed {
                        warn!(error = %err, "Remote store unreachable, keeping last list");
                    } else {
                        debug!(error = %err, "Remote fetch still failing");
                    }
                    self.display.set_connection_status(false);
                    transition
                }
            }
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use uc_core::ports::{RemoteStoreError, TouchOutcome};
    use uc_core::sync::ConnectionStatus;
    use uc_core::{ContentFingerprint, NewClipboardEntry, RemoteClipboardEntry};

    type Listing = Result<Vec<RemoteClipboardEntry>, RemoteStoreError>;

    /// Store that answers `list_entries` from a script.
    struct ScriptedStore {
        listings: Mutex<VecDeque<Listing>>,
    }

    impl ScriptedStore {
        fn new(listings: Vec<Listing>) -> Self {
            Self {
                listings: Mutex::new(listings.into()),
            }
        }
    }

    #[async_trait]
    impl RemoteStorePort for ScriptedStore {
        async fn list_entries(&self) -> Listing {
            self.listings
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(RemoteStoreError::Timeout))
        }

        async fn touch_entry(
            &self,
            _hash: &ContentFingerprint,
        ) -> Result<TouchOutcome, RemoteStoreError> {
            Ok(TouchOutcome::Touched)
        }

        async fn create_entry(&self, _entry: &NewClipboardEntry) -> Result<(), RemoteStoreError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingDisplay {
        renders: Mutex<Vec<PresentationModel>>,
        statuses: Mutex<Vec<bool>>,
    }

    impl DisplayPort for RecordingDisplay {
        fn render(&self, model: &PresentationModel) {
            self.renders.lock().unwrap().push(model.clone());
        }

        fn set_connection_status(&self, connected: bool) {
            self.statuses.lock().unwrap().push(connected);
        }
    }

    fn text_entry(hash: &str, text: &str) -> RemoteClipboardEntry {
        RemoteClipboardEntry {
            entry_type: "TEXT".into(),
            text_content: Some(text.into()),
            base64_binary_content: None,
            content_hash: Some(ContentFingerprint::from(hash)),
            created_at: None,
            updated_at: None,
        }
    }

    fn synchronizer(listings: Vec<Listing>) -> (Arc<RecordingDisplay>, ViewSynchronizer) {
        let display = Arc::new(RecordingDisplay::default());
        let sync = ViewSynchronizer::new(Arc::new(ScriptedStore::new(listings)), display.clone());
        (display, sync)
    }

    #[tokio::test]
    async fn success_renders_deduplicated_model_and_reports_connected() {
        let (display, mut sync) = synchronizer(vec![Ok(vec![
            text_entry("h1", "first"),
            text_entry("h1", "duplicate"),
            text_entry("h2", "second"),
        ])]);

        let transition = sync.sync(SyncTrigger::Timer).await;

        assert!(transition.status_changed);
        assert!(transition.model_changed);
        assert_eq!(sync.state().status(), ConnectionStatus::Connected);
        let renders = display.renders.lock().unwrap();
        assert_eq!(renders.len(), 1);
        assert_eq!(renders[0].len(), 2);
        assert_eq!(*display.statuses.lock().unwrap(), vec![true]);
    }

    #[tokio::test]
    async fn failure_before_any_data_stays_empty() {
        let (display, mut sync) =
            synchronizer(vec![Err(RemoteStoreError::Network("refused".into()))]);

        sync.sync(SyncTrigger::Manual).await;

        assert_eq!(sync.state().status(), ConnectionStatus::Disconnected);
        assert!(!sync.state().has_data());
        assert!(display.renders.lock().unwrap().is_empty());
        assert_eq!(*display.statuses.lock().unwrap(), vec![false]);
    }

    #[tokio::test]
    async fn failure_keeps_stale_model() {
        let (display, mut sync) = synchronizer(vec![
            Ok(vec![text_entry("h1", "kept")]),
            Err(RemoteStoreError::Server { status: 502 }),
        ]);

        sync.sync(SyncTrigger::Timer).await;
        let transition = sync.sync(SyncTrigger::Timer).await;

        assert!(transition.status_changed);
        assert!(!transition.model_changed);
        assert!(sync.state().has_data());
        assert_eq!(sync.state().model().unwrap().len(), 1);
        assert_eq!(display.renders.lock().unwrap().len(), 1);
        assert_eq!(*display.statuses.lock().unwrap(), vec![true, false]);
    }

    #[tokio::test]
    async fn identical_listing_does_not_change_model() {
        let listing = vec![text_entry("h1", "same")];
        let (_display, mut sync) = synchronizer(vec![Ok(listing.clone()), Ok(listing)]);

        sync.sync(SyncTrigger::Timer).await;
        let transition = sync.sync(SyncTrigger::ListChanged).await;

        assert!(!transition.status_changed);
        assert!(!transition.model_changed);
    }

    #[test]
    fn trigger_names() {
        assert_eq!(SyncTrigger::ListChanged.to_string(), "list_changed");
        assert_eq!(SyncTrigger::Manual.to_string(), "manual");
    }
}
