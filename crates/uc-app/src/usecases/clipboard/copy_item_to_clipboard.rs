use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use thiserror::Error;
use tracing::{info, info_span, Instrument};

use uc_core::ports::ClipboardWriteBackPort;
use uc_core::{ClipboardContent, ContentFingerprint, PresentationContent, PresentationItem};

#[derive(Debug, Error)]
pub enum CopyItemError {
    #[error("item has no usable content")]
    Invalid,

    #[error("image content is not valid base64: {0}")]
    Decode(String),

    #[error("failed to write clipboard: {0}")]
    WriteBack(#[source] anyhow::Error),
}

/// Copy a listed item back onto the local clipboard.
///
/// 将历史条目写回系统剪贴板（不会被再次检测为新变化）。
pub struct CopyItemToClipboard {
    write_back: Arc<dyn ClipboardWriteBackPort>,
}

impl CopyItemToClipboard {
    pub fn new(write_back: Arc<dyn ClipboardWriteBackPort>) -> Self {
        Self { write_back }
    }

    pub async fn execute(&self, item: &PresentationItem) -> Result<(), CopyItemError> {
        let span = info_span!(
            "usecase.clipboard.copy_item_to_clipboard.execute",
            hash = item.content_hash.as_ref().map_or("-", ContentFingerprint::short),
        );

        async {
            let content = match &item.content {
                PresentationContent::Text { text } => ClipboardContent::Text(text.clone()),
                PresentationContent::Image { base64 } => ClipboardContent::Image(
                    BASE64
                        .decode(base64)
                        .map_err(|e| CopyItemError::Decode(e.to_string()))?,
                ),
                PresentationContent::Invalid => return Err(CopyItemError::Invalid),
            };
            if content.is_empty() {
                return Err(CopyItemError::Invalid);
            }

            let kind = content.kind();
            self.write_back
                .write_back(content)
                .await
                .map_err(CopyItemError::WriteBack)?;
            info!(kind = %kind, "Copied item to clipboard");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
