//! Clipboard content model
//!
//! The local clipboard is a single slot: at any moment it carries either text
//! or an image. [`ClipboardContent`] mirrors that, and [`ClipboardObservation`]
//! is one detected change of that slot.
//!
//! Image content is always held as raw bytes (PNG as produced by the platform
//! layer). The base64 form only exists at the transport boundary.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::hash::{fingerprint, ContentFingerprint};

/// Kind of clipboard content.
///
/// Serialized as the wire names used by the remote store (`"TEXT"`, `"IMAGE"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContentKind {
    Text,
    Image,
}

impl ContentKind {
    pub fn as_wire_str(self) -> &'static str {
        match self {
            ContentKind::Text => "TEXT",
            ContentKind::Image => "IMAGE",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content kind: {0:?}")]
pub struct UnknownContentKind(pub String);

impl FromStr for ContentKind {
    type Err = UnknownContentKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TEXT" => Ok(ContentKind::Text),
            "IMAGE" => Ok(ContentKind::Image),
            other => Err(UnknownContentKind(other.to_string())),
        }
    }
}

/// Content of the clipboard slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardContent {
    Text(String),
    /// Raw image bytes, not transport-encoded.
    Image(Vec<u8>),
}

impl ClipboardContent {
    pub fn kind(&self) -> ContentKind {
        match self {
            ClipboardContent::Text(_) => ContentKind::Text,
            ClipboardContent::Image(_) => ContentKind::Image,
        }
    }

    /// Raw bytes the fingerprint is computed over.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            ClipboardContent::Text(text) => text.as_bytes(),
            ClipboardContent::Image(bytes) => bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    pub fn size_bytes(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn fingerprint(&self) -> ContentFingerprint {
        fingerprint(self.kind(), self.as_bytes())
    }
}

/// One detected clipboard change.
///
/// Only produced with non-empty content; see [`ClipboardObservation::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardObservation {
    content: ClipboardContent,
    observed_at: DateTime<Utc>,
}

impl ClipboardObservation {
    /// Returns `None` for empty content.
    pub fn new(content: ClipboardContent, observed_at: DateTime<Utc>) -> Option<Self> {
        if content.is_empty() {
            return None;
        }
        Some(Self {
            content,
            observed_at,
        })
    }

    pub fn kind(&self) -> ContentKind {
        self.content.kind()
    }

    pub fn content(&self) -> &ClipboardContent {
        &self.content
    }

    pub fn into_content(self) -> ClipboardContent {
        self.content
    }

    pub fn observed_at(&self) -> DateTime<Utc> {
        self.observed_at
    }

    pub fn text(&self) -> Option<&str> {
        match &self.content {
            ClipboardContent::Text(text) => Some(text),
            ClipboardContent::Image(_) => None,
        }
    }

    pub fn image_bytes(&self) -> Option<&[u8]> {
        match &self.content {
            ClipboardContent::Text(_) => None,
            ClipboardContent::Image(bytes) => Some(bytes),
        }
    }

    pub fn fingerprint(&self) -> ContentFingerprint {
        self.content.fingerprint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_kind_round_trips_wire_names() {
        assert_eq!("TEXT".parse::<ContentKind>().unwrap(), ContentKind::Text);
        assert_eq!("IMAGE".parse::<ContentKind>().unwrap(), ContentKind::Image);
        assert_eq!(ContentKind::Image.to_string(), "IMAGE");
    }

    #[test]
    fn content_kind_rejects_unspecified_kind() {
        let err = "FILE".parse::<ContentKind>().unwrap_err();
        assert_eq!(err, UnknownContentKind("FILE".to_string()));
        assert!("text".parse::<ContentKind>().is_err());
    }

    #[test]
    fn observation_rejects_empty_content() {
        let now = Utc::now();
        assert!(ClipboardObservation::new(ClipboardContent::Text(String::new()), now).is_none());
        assert!(ClipboardObservation::new(ClipboardContent::Image(Vec::new()), now).is_none());
    }

    #[test]
    fn observation_exposes_exactly_one_payload() {
        let now = Utc::now();
        let text = ClipboardObservation::new(ClipboardContent::Text("hi".into()), now).unwrap();
        assert_eq!(text.kind(), ContentKind::Text);
        assert_eq!(text.text(), Some("hi"));
        assert_eq!(text.image_bytes(), None);

        let image = ClipboardObservation::new(ClipboardContent::Image(vec![1, 2, 3]), now).unwrap();
        assert_eq!(image.kind(), ContentKind::Image);
        assert_eq!(image.text(), None);
        assert_eq!(image.image_bytes(), Some(&[1u8, 2, 3][..]));
    }
}
