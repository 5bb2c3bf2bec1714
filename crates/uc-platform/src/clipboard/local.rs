use std::sync::{Arc, Mutex, MutexGuard};

use clipboard_rs::common::RustImage;
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat, RustImageData};
use tracing::{debug, debug_span};

use uc_core::ports::{ClipboardError, ClipboardHostPort};

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// The OS clipboard.
///
/// Images are exchanged as PNG bytes in both directions.
pub struct LocalClipboard {
    inner: Arc<Mutex<ClipboardContext>>,
}

impl LocalClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let context = new_context().map_err(|e| {
            ClipboardError::Unavailable(format!("failed to create clipboard context: {e}"))
        })?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
        })
    }

    fn context(&self) -> Result<MutexGuard<'_, ClipboardContext>, ClipboardError> {
        self.inner
            .lock()
            .map_err(|_| ClipboardError::Unavailable("clipboard context lock poisoned".into()))
    }
}

#[cfg(target_os = "linux")]
fn new_context() -> Result<ClipboardContext, BoxedError> {
    use clipboard_rs::ClipboardContextX11Options;
    ClipboardContext::new_with_options(ClipboardContextX11Options { read_timeout: None })
}

#[cfg(not(target_os = "linux"))]
fn new_context() -> Result<ClipboardContext, BoxedError> {
    ClipboardContext::new()
}

fn read_err(e: BoxedError) -> ClipboardError {
    ClipboardError::Read(e.to_string())
}

fn write_err(e: BoxedError) -> ClipboardError {
    ClipboardError::Write(e.to_string())
}

impl ClipboardHostPort for LocalClipboard {
    fn read_text(&self) -> Result<Option<String>, ClipboardError> {
        let ctx = self.context()?;
        if !ctx.has(ContentFormat::Text) {
            return Ok(None);
        }
        ctx.get_text().map(Some).map_err(read_err)
    }

    fn read_image(&self) -> Result<Option<Vec<u8>>, ClipboardError> {
        let ctx = self.context()?;
        if !ctx.has(ContentFormat::Image) {
            return Ok(None);
        }
        let image = ctx.get_image().map_err(read_err)?;
        let png = image.to_png().map_err(read_err)?;
        Ok(Some(png.get_bytes().to_vec()))
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let span = debug_span!("platform.clipboard.write_text", size_bytes = text.len());
        span.in_scope(|| {
            let ctx = self.context()?;
            ctx.set_text(text.to_string()).map_err(write_err)?;
            debug!("Wrote text to system clipboard");
            Ok(())
        })
    }

    fn write_image(&self, bytes: &[u8]) -> Result<(), ClipboardError> {
        let span = debug_span!("platform.clipboard.write_image", size_bytes = bytes.len());
        span.in_scope(|| {
            let image = RustImageData::from_bytes(bytes).map_err(write_err)?;
            let ctx = self.context()?;
            ctx.set_image(image).map_err(write_err)?;
            debug!("Wrote image to system clipboard");
            Ok(())
        })
    }
}
