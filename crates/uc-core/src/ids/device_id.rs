use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier this client reports as `deviceId` when creating entries.
///
/// Desktop ids look like `desktop-<hostname>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl_id!(DeviceId);

impl DeviceId {
    pub const DESKTOP_PREFIX: &'static str = "desktop-";

    /// `desktop-<hostname>`; a blank hostname yields a random id instead.
    pub fn for_desktop(hostname: &str) -> Self {
        let hostname = hostname.trim();
        if hostname.is_empty() {
            return Self::random();
        }
        Self(format!("{}{}", Self::DESKTOP_PREFIX, hostname))
    }

    pub fn random() -> Self {
        Self(format!("{}{}", Self::DESKTOP_PREFIX, uuid::Uuid::new_v4()))
    }
}
