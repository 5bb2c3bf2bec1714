//! Presentation model
//!
//! The render-ready list handed to the display layer. It is rebuilt wholesale
//! from every successful remote listing and never patched in place.

use std::collections::HashSet;

use chrono::{DateTime, Local, NaiveDateTime};
use serde::Serialize;

use super::content::ContentKind;
use super::entry::RemoteClipboardEntry;
use super::hash::ContentFingerprint;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PresentationContent {
    Text { text: String },
    Image { base64: String },
    /// Unknown type, or an image entry without content.
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationItem {
    /// `None` when the server listed the entry without a hash.
    pub content_hash: Option<ContentFingerprint>,
    pub content: PresentationContent,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<RemoteClipboardEntry> for PresentationItem {
    fn from(entry: RemoteClipboardEntry) -> Self {
        let content = match entry.kind() {
            Some(ContentKind::Text) => PresentationContent::Text {
                text: entry.text_content.unwrap_or_default(),
            },
            Some(ContentKind::Image) => match entry.base64_binary_content {
                Some(base64) if !base64.is_empty() => PresentationContent::Image { base64 },
                _ => PresentationContent::Invalid,
            },
            None => PresentationContent::Invalid,
        };

        Self {
            content_hash: entry.content_hash,
            content,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

/// Deduplicated list in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PresentationModel {
    items: Vec<PresentationItem>,
}

impl PresentationModel {
    /// Build from a server listing, keeping the first entry per content hash.
    /// Entries without a hash are kept and never count as duplicates.
    /// Server order is authoritative and never re-sorted.
    pub fn from_entries(entries: impl IntoIterator<Item = RemoteClipboardEntry>) -> Self {
        let mut seen = HashSet::new();
        let items = entries
            .into_iter()
            .filter(|entry| match &entry.content_hash {
                Some(hash) => seen.insert(hash.clone()),
                None => true,
            })
            .map(PresentationItem::from)
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[PresentationItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&PresentationItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Format a server timestamp for display in local time.
///
/// RFC 3339 values are converted to local time; offset-less ISO-8601 values
/// are taken as already local. Anything else is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M:%S";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format(DISPLAY).to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format(DISPLAY).to_string();
    }
    raw.to_string()
}
