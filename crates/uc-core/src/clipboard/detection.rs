//! Local clipboard detection state
//!
//! Tracks the last text and the last image observed on the local clipboard so
//! the change detector only emits an observation when the slot actually
//! changes. Comparison is done on raw values, never on fingerprints, so idle
//! ticks do not hash anything.
//!
//! Text and image tracking are mutually exclusive: recording one clears the
//! other, matching the single-slot nature of the clipboard.

use chrono::{DateTime, Utc};

use super::content::{ClipboardContent, ClipboardObservation};

/// Last locally observed clipboard value.
///
/// Empty string / empty buffer is the "none" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalDetectionState {
    last_text: String,
    last_image: Vec<u8>,
}

impl LocalDetectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_text(&self) -> Option<&str> {
        (!self.last_text.is_empty()).then_some(self.last_text.as_str())
    }

    pub fn last_image(&self) -> Option<&[u8]> {
        (!self.last_image.is_empty()).then_some(self.last_image.as_slice())
    }

    /// Text step of a tick: emits when `text` is non-empty and differs from
    /// the last observed text.
    pub fn observe_text(
        &mut self,
        text: Option<&str>,
        now: DateTime<Utc>,
    ) -> Option<ClipboardObservation> {
        let text = text.filter(|t| !t.is_empty())?;
        if text == self.last_text {
            return None;
        }
        self.remember_text(text.to_string());
        ClipboardObservation::new(ClipboardContent::Text(text.to_string()), now)
    }

    /// Image step of a tick: emits when `image` is non-empty and differs from
    /// the last observed image.
    pub fn observe_image(
        &mut self,
        image: Option<&[u8]>,
        now: DateTime<Utc>,
    ) -> Option<ClipboardObservation> {
        let image = image.filter(|bytes| !bytes.is_empty())?;
        if image == self.last_image.as_slice() {
            return None;
        }
        self.remember_image(image.to_vec());
        ClipboardObservation::new(ClipboardContent::Image(image.to_vec()), now)
    }

    /// Full tick: text takes priority, the image is only considered when the
    /// text step produced nothing.
    pub fn observe(
        &mut self,
        text: Option<&str>,
        image: Option<&[u8]>,
        now: DateTime<Utc>,
    ) -> Option<ClipboardObservation> {
        self.observe_text(text, now)
            .or_else(|| self.observe_image(image, now))
    }

    /// Record content as already seen without emitting anything.
    ///
    /// Used when the process itself writes to the clipboard. Empty content is
    /// ignored.
    pub fn remember(&mut self, content: &ClipboardContent) {
        match content {
            ClipboardContent::Text(text) if !text.is_empty() => self.remember_text(text.clone()),
            ClipboardContent::Image(bytes) if !bytes.is_empty() => {
                self.remember_image(bytes.clone())
            }
            _ => {}
        }
    }

    fn remember_text(&mut self, text: String) {
        self.last_text = text;
        self.last_image.clear();
    }

    fn remember_image(&mut self, bytes: Vec<u8>) {
        self.last_image = bytes;
        self.last_text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ContentKind;

    fn tracked_fields(state: &LocalDetectionState) -> usize {
        usize::from(state.last_text().is_some()) + usize::from(state.last_image().is_some())
    }

    #[test]
    fn initial_state_tracks_nothing() {
        let state = LocalDetectionState::new();
        assert_eq!(state.last_text(), None);
        assert_eq!(state.last_image(), None);
    }

    #[test]
    fn repeated_text_is_observed_once() {
        let mut state = LocalDetectionState::new();
        let now = Utc::now();

        let first = state.observe(Some("hello"), None, now).unwrap();
        assert_eq!(first.text(), Some("hello"));
        assert!(state.observe(Some("hello"), None, now).is_none());
    }

    #[test]
    fn alternating_text_is_observed_every_time() {
        let mut state = LocalDetectionState::new();
        let now = Utc::now();

        let texts: Vec<_> = ["a", "b", "a"]
            .into_iter()
            .filter_map(|t| state.observe(Some(t), None, now))
            .map(|obs| obs.text().unwrap().to_string())
            .collect();

        assert_eq!(texts, vec!["a", "b", "a"]);
    }

    #[test]
    fn empty_text_falls_through_to_image() {
        let mut state = LocalDetectionState::new();
        let obs = state
            .observe(Some(""), Some(&[1, 2, 3]), Utc::now())
            .unwrap();
        assert_eq!(obs.kind(), ContentKind::Image);
    }

    #[test]
    fn text_wins_when_both_changed() {
        let mut state = LocalDetectionState::new();
        let obs = state
            .observe(Some("text"), Some(&[9, 9]), Utc::now())
            .unwrap();

        assert_eq!(obs.kind(), ContentKind::Text);
        assert_eq!(state.last_image(), None);
    }

    #[test]
    fn unchanged_text_still_lets_new_image_through() {
        let mut state = LocalDetectionState::new();
        let now = Utc::now();
        state.observe(Some("same"), None, now).unwrap();

        let obs = state.observe(Some("same"), Some(&[7]), now).unwrap();
        assert_eq!(obs.image_bytes(), Some(&[7u8][..]));
        assert_eq!(state.last_text(), None);
    }

    #[test]
    fn empty_image_is_never_observed() {
        let mut state = LocalDetectionState::new();
        assert!(state.observe(None, Some(&[]), Utc::now()).is_none());
        assert!(state.observe(None, None, Utc::now()).is_none());
    }

    #[test]
    fn emitting_tick_leaves_exactly_one_tracked_field() {
        let mut state = LocalDetectionState::new();
        let now = Utc::now();
        let ticks: [(Option<&str>, Option<&[u8]>); 5] = [
            (Some("a"), None),
            (None, Some(&[1])),
            (Some("b"), Some(&[2])),
            (Some("b"), Some(&[3])),
            (Some("a"), None),
        ];

        for (text, image) in ticks {
            if state.observe(text, image, now).is_some() {
                assert_eq!(tracked_fields(&state), 1);
            }
        }
    }

    #[test]
    fn remember_suppresses_next_observation() {
        let mut state = LocalDetectionState::new();
        let now = Utc::now();
        state.observe(Some("old"), None, now).unwrap();

        state.remember(&ClipboardContent::Image(vec![4, 2]));
        assert_eq!(state.last_text(), None);
        assert!(state.observe(None, Some(&[4, 2]), now).is_none());

        state.remember(&ClipboardContent::Text("pasted".into()));
        assert!(state.observe(Some("pasted"), None, now).is_none());
        assert_eq!(state.last_image(), None);
    }

    #[test]
    fn remember_ignores_empty_content() {
        let mut state = LocalDetectionState::new();
        state.observe(Some("keep"), None, Utc::now()).unwrap();
        state.remember(&ClipboardContent::Text(String::new()));
        assert_eq!(state.last_text(), Some("keep"));
    }
}
