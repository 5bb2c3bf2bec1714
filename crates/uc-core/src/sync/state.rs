use serde::{Deserialize, Serialize};

use crate::clipboard::PresentationModel;

/// Connection status shown by the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
}

impl ConnectionStatus {
    pub fn is_connected(self) -> bool {
        self == Self::Connected
    }
}

/// View synchronization state machine
///
/// Design principle: This is a pure state machine. Fetching, timers and
/// notifying the display are handled by the application layer (uc-app).
///
/// State space is `{Connected, Disconnected} × {has-data, no-data}`:
///
/// ```text
/// Disconnected/no-data ──success──→ Connected/has-data
///          │                            │      ↑
///       failure                      failure  success
///          ↓                            ↓      │
/// Disconnected/no-data         Disconnected/has-data
/// ```
///
/// Transitions are driven solely by fetch success or failure. A failure never
/// discards the last successful model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    status: ConnectionStatus,
    model: Option<PresentationModel>,
}

/// What a transition changed, for the caller to decide what to notify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewTransition {
    pub status_changed: bool,
    pub model_changed: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            status: ConnectionStatus::Disconnected,
            model: None,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn model(&self) -> Option<&PresentationModel> {
        self.model.as_ref()
    }

    pub fn has_data(&self) -> bool {
        self.model.is_some()
    }

    /// Replace the whole model and mark connected.
    pub fn apply_success(&mut self, model: PresentationModel) -> ViewTransition {
        let status_changed = self.status != ConnectionStatus::Connected;
        let model_changed = self.model.as_ref() != Some(&model);
        self.status = ConnectionStatus::Connected;
        self.model = Some(model);
        ViewTransition {
            status_changed,
            model_changed,
        }
    }

    /// Mark disconnected, keeping whatever model was last rendered.
    pub fn apply_failure(&mut self) -> ViewTransition {
        let status_changed = self.status != ConnectionStatus::Disconnected;
        self.status = ConnectionStatus::Disconnected;
        ViewTransition {
            status_changed,
            model_changed: false,
        }
    }
}
