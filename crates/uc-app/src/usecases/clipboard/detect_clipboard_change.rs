//! Local clipboard change detection
//! 本地剪贴板变化检测

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use uc_core::ports::{ClipboardError, ClipboardHostPort};
use uc_core::{ClipboardContent, ClipboardObservation, ContentKind, LocalDetectionState};

/// Polls the clipboard host and decides whether its content is a new
/// observation.
///
/// Owns its [`LocalDetectionState`] outright; only the clipboard runtime task
/// drives it.
pub struct ChangeDetector {
    host: Arc<dyn ClipboardHostPort>,
    state: LocalDetectionState,
}

impl ChangeDetector {
    pub fn new(host: Arc<dyn ClipboardHostPort>) -> Self {
        Self {
            host,
            state: LocalDetectionState::new(),
        }
    }

    pub fn state(&self) -> &LocalDetectionState {
        &self.state
    }

    /// Run one polling tick.
    ///
    /// Text takes priority: the image is only read when the text step produced
    /// nothing. A read failure is logged and treated as "no observation"; the
    /// next tick retries naturally.
    pub fn tick(&mut self) -> Option<ClipboardObservation> {
        let now = Utc::now();

        let text = match self.host.read_text() {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "Failed to read clipboard text, skipping tick");
                return None;
            }
        };
        if let Some(observation) = self.state.observe_text(text.as_deref(), now) {
            debug!(
                kind = %observation.kind(),
                size_bytes = observation.content().size_bytes(),
                "Clipboard text changed"
            );
            return Some(observation);
        }

        let image = match self.host.read_image() {
            Ok(image) => image,
            Err(err) => {
                warn!(error = %err, "Failed to read clipboard image, skipping tick");
                return None;
            }
        };
        let observation = self.state.observe_image(image.as_deref(), now);
        if let Some(observation) = &observation {
            debug!(
                kind = %observation.kind(),
                size_bytes = observation.content().size_bytes(),
                "Clipboard image changed"
            );
        }
        observation
    }

    /// Write `content` to the clipboard without it being re-detected.
    ///
    /// Records what the host reads back after the write (images may come back
    /// re-encoded), or the written value when the read-back is empty or fails.
    pub fn write_back(&mut self, content: ClipboardContent) -> Result<(), ClipboardError> {
        match &content {
            ClipboardContent::Text(text) => self.host.write_text(text)?,
            ClipboardContent::Image(bytes) => self.host.write_image(bytes)?,
        }

        let read_back = match content.kind() {
            ContentKind::Text => self
                .host
                .read_text()
                .ok()
                .flatten()
                .map(ClipboardContent::Text),
            ContentKind::Image => self
                .host
                .read_image()
                .ok()
                .flatten()
                .map(ClipboardContent::Image),
        }
        .filter(|read| !read.is_empty());

        self.state.remember(read_back.as_ref().unwrap_or(&content));
        debug!(
            kind = %content.kind(),
            size_bytes = content.size_bytes(),
            "Wrote content back to clipboard"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// In-memory clipboard; images gain a trailing byte on write to mimic a
    /// host that re-encodes.
    #[derive(Default)]
    struct FakeHost {
        text: Mutex<Option<String>>,
        image: Mutex<Option<Vec<u8>>>,
        fail_text_reads: Mutex<bool>,
        image_reads: Mutex<usize>,
    }

    impl FakeHost {
        fn set_text(&self, text: &str) {
            *self.text.lock().unwrap() = Some(text.to_string());
            *self.image.lock().unwrap() = None;
        }

        fn set_image(&self, bytes: &[u8]) {
            *self.image.lock().unwrap() = Some(bytes.to_vec());
            *self.text.lock().unwrap() = None;
        }
    }

    impl ClipboardHostPort for FakeHost {
        fn read_text(&self) -> Result<Option<String>, ClipboardError> {
            if *self.fail_text_reads.lock().unwrap() {
                return Err(ClipboardError::Read("busy".into()));
            }
            Ok(self.text.lock().unwrap().clone())
        }

        fn read_image(&self) -> Result<Option<Vec<u8>>, ClipboardError> {
            *self.image_reads.lock().unwrap() += 1;
            Ok(self.image.lock().unwrap().clone())
        }

        fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            self.set_text(text);
            Ok(())
        }

        fn write_image(&self, bytes: &[u8]) -> Result<(), ClipboardError> {
            let mut reencoded = bytes.to_vec();
            reencoded.push(0xFF);
            self.set_image(&reencoded);
            Ok(())
        }
    }

    fn detector() -> (Arc<FakeHost>, ChangeDetector) {
        let host = Arc::new(FakeHost::default());
        let detector = ChangeDetector::new(host.clone());
        (host, detector)
    }

    #[test]
    fn same_text_twice_emits_once() {
        let (host, mut detector) = detector();
        host.set_text("hello");

        assert_eq!(detector.tick().unwrap().text(), Some("hello"));
        assert!(detector.tick().is_none());
    }

    #[test]
    fn new_text_skips_image_read() {
        let (host, mut detector) = detector();
        host.set_text("hello");

        detector.tick().unwrap();

        assert_eq!(*host.image_reads.lock().unwrap(), 0);
    }

    #[test]
    fn image_is_detected_when_text_is_absent() {
        let (host, mut detector) = detector();
        host.set_image(&[1, 2, 3]);

        let observation = detector.tick().unwrap();

        assert_eq!(observation.image_bytes(), Some(&[1u8, 2, 3][..]));
        assert_eq!(detector.state().last_text(), None);
        assert!(detector.tick().is_none());
    }

    #[test]
    fn read_failure_yields_no_observation_and_keeps_state() {
        let (host, mut detector) = detector();
        host.set_text("before");
        detector.tick().unwrap();

        *host.fail_text_reads.lock().unwrap() = true;
        host.set_text("after");
        assert!(detector.tick().is_none());
        assert_eq!(detector.state().last_text(), Some("before"));

        *host.fail_text_reads.lock().unwrap() = false;
        assert_eq!(detector.tick().unwrap().text(), Some("after"));
    }

    #[test]
    fn written_back_text_is_not_redetected() {
        let (host, mut detector) = detector();
        host.set_text("local");
        detector.tick().unwrap();

        detector
            .write_back(ClipboardContent::Text("from history".into()))
            .unwrap();

        assert!(detector.tick().is_none());
        assert_eq!(detector.state().last_text(), Some("from history"));
    }

    #[test]
    fn written_back_image_is_not_redetected_after_reencoding() {
        let (host, mut detector) = detector();

        detector
            .write_back(ClipboardContent::Image(vec![5, 6]))
            .unwrap();

        assert_eq!(host.image.lock().unwrap().as_deref(), Some(&[5u8, 6, 0xFF][..]));
        assert!(detector.tick().is_none());
    }
}
