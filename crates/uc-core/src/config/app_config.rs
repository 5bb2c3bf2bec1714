//! Application configuration domain model

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_CLIPBOARD_POLL_INTERVAL_MS: u64 = 1_000;
pub const DEFAULT_VIEW_POLL_INTERVAL_MS: u64 = 2_000;

/// Application configuration
///
/// Maps one-to-one onto the TOML file:
///
/// ```toml
/// [server]
/// url = "http://localhost:8080"
/// request_timeout_ms = 5000
///
/// [sync]
/// clipboard_poll_interval_ms = 1000
/// view_poll_interval_ms = 2000
///
/// [device]
/// id = "desktop-workstation"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub sync: SyncConfig,
    pub device: DeviceConfig,
}

/// Remote store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the remote store, without the `/api/...` suffix
    pub url: String,
    /// Upper bound for every request to the remote store
    pub request_timeout_ms: u64,
}

/// Polling cadence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub clipboard_poll_interval_ms: u64,
    pub view_poll_interval_ms: u64,
}

/// Device identity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Sent as `deviceId` on create; derived from the hostname when absent
    pub id: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SERVER_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            clipboard_poll_interval_ms: DEFAULT_CLIPBOARD_POLL_INTERVAL_MS,
            view_poll_interval_ms: DEFAULT_VIEW_POLL_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("server url must not be empty")]
    EmptyServerUrl,

    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.url.trim().is_empty() {
            return Err(ConfigError::EmptyServerUrl);
        }
        let durations = [
            ("server.request_timeout_ms", self.server.request_timeout_ms),
            (
                "sync.clipboard_poll_interval_ms",
                self.sync.clipboard_poll_interval_ms,
            ),
            ("sync.view_poll_interval_ms", self.sync.view_poll_interval_ms),
        ];
        for (name, value) in durations {
            if value == 0 {
                return Err(ConfigError::ZeroDuration(name));
            }
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.server.request_timeout_ms)
    }

    pub fn clipboard_poll_interval(&self) -> Duration {
        Duration::from_millis(self.sync.clipboard_poll_interval_ms)
    }

    pub fn view_poll_interval(&self) -> Duration {
        Duration::from_millis(self.sync.view_poll_interval_ms)
    }
}
