use anyhow::Result;
use async_trait::async_trait;

use crate::clipboard::ClipboardContent;

/// Write content back to the local clipboard without it being detected as a
/// new local change.
#[async_trait]
pub trait ClipboardWriteBackPort: Send + Sync {
    async fn write_back(&self, content: ClipboardContent) -> Result<()>;
}
