use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use super::content::ContentKind;

/// Hex-encoded SHA-256 content fingerprint.
///
/// The sole de-duplication and addressing key for remote entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentFingerprint(String);

impl ContentFingerprint {
    pub const HEX_LEN: usize = 64;

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Short prefix for log lines.
    pub fn short(&self) -> &str {
        let end = self.0.len().min(12);
        self.0.get(..end).unwrap_or(&self.0)
    }
}

impl fmt::Display for ContentFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ContentFingerprint {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ContentFingerprint {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ContentFingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Compute the fingerprint of `bytes` as content of the given `kind`.
///
/// Digest input is `KIND || 0x00 || bytes`, where `KIND` is the wire name
/// (`TEXT` / `IMAGE`). Text is hashed as its UTF-8 bytes, images as their raw
/// bytes (never the base64 form).
pub fn fingerprint(kind: ContentKind, bytes: &[u8]) -> ContentFingerprint {
    let mut hasher = Sha256::new();
    hasher.update(kind.as_wire_str().as_bytes());
    hasher.update([0u8]);
    hasher.update(bytes);
    ContentFingerprint(hex::encode(hasher.finalize()))
}
