//! Dependency wiring
//!
//! ```text
//! LocalClipboard ──► ChangeDetector ─┐
//!                                    ├─► ClipboardRuntime ──(write back)◄── CopyItemToClipboard
//! HttpRemoteStore ─► Reconcile ──────┘         │
//!        │                               list_changed
//!        └─────────► ViewSynchronizer ◄────────┘ ◄── refresh (console)
//!                          │
//!                    ConsoleDisplay
//! ```

use std::io::Stdout;
use std::sync::Arc;

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing::info;

use uc_app::{
    ChangeDetector, CopyItemToClipboard, ReconcileObservation, ViewSynchronizer, WakeSignal,
};
use uc_core::ports::{ClipboardHostPort, DisplayPort, RemoteStorePort};
use uc_core::AppConfig;
use uc_infra::{resolve_device_id, HttpRemoteStore};
use uc_platform::{ClipboardRuntime, LocalClipboard, ViewSyncRuntime};

use crate::console::ConsoleDisplay;

/// Everything `run_app` needs, not yet started.
pub struct App {
    pub clipboard_runtime: ClipboardRuntime,
    pub view_runtime: ViewSyncRuntime,
    pub display: Arc<ConsoleDisplay<Stdout>>,
    pub copy_item: CopyItemToClipboard,
    pub refresh: WakeSignal,
    pub cancel: CancellationToken,
}

pub fn build_app(config: &AppConfig) -> anyhow::Result<App> {
    let clipboard: Arc<dyn ClipboardHostPort> =
        Arc::new(LocalClipboard::new().context("System clipboard is not available")?);
    let store: Arc<dyn RemoteStorePort> = Arc::new(HttpRemoteStore::new(
        &config.server.url,
        config.request_timeout(),
    )?);
    let display = Arc::new(ConsoleDisplay::stdout());
    let display_port: Arc<dyn DisplayPort> = display.clone();

    let device_id = resolve_device_id(config);
    info!(device_id = %device_id, "Device identity resolved");

    let list_changed = WakeSignal::new();
    let refresh = WakeSignal::new();
    let cancel = CancellationToken::new();

    let (clipboard_runtime, clipboard_handle) = ClipboardRuntime::new(
        ChangeDetector::new(clipboard),
        ReconcileObservation::new(store.clone(), list_changed.clone(), Some(device_id)),
        display_port.clone(),
        config.clipboard_poll_interval(),
        cancel.child_token(),
    );
    let view_runtime = ViewSyncRuntime::new(
        ViewSynchronizer::new(store, display_port),
        list_changed,
        refresh.clone(),
        config.view_poll_interval(),
        cancel.child_token(),
    );
    let copy_item = CopyItemToClipboard::new(Arc::new(clipboard_handle));

    Ok(App {
        clipboard_runtime,
        view_runtime,
        display,
        copy_item,
        refresh,
        cancel,
    })
}
