//! Remote store entry shapes (JSON, camelCase).

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use super::content::{ClipboardContent, ClipboardObservation, ContentKind};
use super::hash::ContentFingerprint;

/// An entry as listed by `GET /api/clipboard`.
///
/// `entry_type` is kept as the raw wire string and `content_hash` may be
/// absent, so one malformed entry does not fail the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteClipboardEntry {
    #[serde(rename = "type")]
    pub entry_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base64_binary_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<ContentFingerprint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl RemoteClipboardEntry {
    pub fn kind(&self) -> Option<ContentKind> {
        self.entry_type.parse().ok()
    }
}

/// Body of `POST /api/clipboard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClipboardEntry {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    /// Base64 (standard alphabet, padded) of the raw image bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary_content: Option<String>,
    pub content_hash: ContentFingerprint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

impl NewClipboardEntry {
    pub fn from_content(content: &ClipboardContent, device_id: Option<String>) -> Self {
        let content_hash = content.fingerprint();
        match content {
            ClipboardContent::Text(text) => Self {
                kind: ContentKind::Text,
                text_content: Some(text.clone()),
                binary_content: None,
                content_hash,
                device_id,
            },
            ClipboardContent::Image(bytes) => Self {
                kind: ContentKind::Image,
                text_content: None,
                binary_content: Some(BASE64.encode(bytes)),
                content_hash,
                device_id,
            },
        }
    }

    pub fn from_observation(observation: &ClipboardObservation, device_id: Option<String>) -> Self {
        Self::from_content(observation.content(), device_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn remote_entry_parses_server_listing() {
        let body = json!([
            {
                "id": 7,
                "type": "TEXT",
                "textContent": "hello",
                "contentHash": "abc",
                "createdAt": "2024-05-01T10:00:00",
                "updatedAt": "2024-05-01T10:05:00"
            },
            {
                "type": "IMAGE",
                "base64BinaryContent": "AQID",
                "contentHash": "def"
            }
        ]);

        let entries: Vec<RemoteClipboardEntry> = serde_json::from_value(body).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind(), Some(ContentKind::Text));
        assert_eq!(entries[0].text_content.as_deref(), Some("hello"));
        assert_eq!(entries[0].updated_at.as_deref(), Some("2024-05-01T10:05:00"));
        assert_eq!(entries[1].kind(), Some(ContentKind::Image));
        assert_eq!(entries[1].base64_binary_content.as_deref(), Some("AQID"));
        assert_eq!(entries[1].created_at, None);
    }

    #[test]
    fn remote_entry_keeps_unknown_type() {
        let entry: RemoteClipboardEntry =
            serde_json::from_value(json!({"type": "FILE", "contentHash": "x"})).unwrap();
        assert_eq!(entry.entry_type, "FILE");
        assert_eq!(entry.kind(), None);
    }

    #[test]
    fn remote_entry_tolerates_missing_or_null_hash() {
        let entries: Vec<RemoteClipboardEntry> = serde_json::from_value(json!([
            {"type": "TEXT", "textContent": "no hash"},
            {"type": "TEXT", "textContent": "null hash", "contentHash": null},
            {"type": "TEXT", "textContent": "ok", "contentHash": "abc"}
        ]))
        .unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].content_hash, None);
        assert_eq!(entries[1].content_hash, None);
        assert_eq!(entries[2].content_hash, Some(ContentFingerprint::from("abc")));
    }

    #[test]
    fn text_create_body_has_wire_shape() {
        let entry = NewClipboardEntry::from_content(
            &ClipboardContent::Text("hello".into()),
            Some("desktop-host".into()),
        );

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "TEXT",
                "textContent": "hello",
                "contentHash": "e456f2a424a815ad59fc18f6d5b9fe50a74833610f12c4ea51ded60eed969e3e",
                "deviceId": "desktop-host"
            })
        );
    }

    #[test]
    fn image_create_body_is_base64_and_hash_covers_raw_bytes() {
        let content = ClipboardContent::Image(vec![1, 2, 3]);
        let entry = NewClipboardEntry::from_content(&content, None);

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "IMAGE");
        assert_eq!(value["binaryContent"], "AQID");
        assert!(value.get("textContent").is_none());
        assert!(value.get("deviceId").is_none());
        assert_eq!(entry.content_hash, content.fingerprint());
    }
}
