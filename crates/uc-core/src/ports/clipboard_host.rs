//! Clipboard host port - abstracts local clipboard access

use super::errors::ClipboardError;

/// Local clipboard as seen by the change detector.
///
/// Implementations must return promptly; they are called from the polling
/// task on every tick.
pub trait ClipboardHostPort: Send + Sync {
    /// Current text, `None` when the clipboard holds no text.
    fn read_text(&self) -> Result<Option<String>, ClipboardError>;

    /// Current image as raw PNG bytes, `None` when the clipboard holds no image.
    fn read_image(&self) -> Result<Option<Vec<u8>>, ClipboardError>;

    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Write an image given as encoded bytes (PNG, JPEG, ...).
    fn write_image(&self, bytes: &[u8]) -> Result<(), ClipboardError>;
}
