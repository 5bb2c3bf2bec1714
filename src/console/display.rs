//! Terminal stand-in for the history window.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use uc_core::clipboard::format_timestamp;
use uc_core::ports::DisplayPort;
use uc_core::{PresentationContent, PresentationItem, PresentationModel};

const PREVIEW_CHARS: usize = 60;

struct ConsoleState<W> {
    out: W,
    model: Option<PresentationModel>,
    connected: Option<bool>,
}

/// Prints the shared history and connection status.
///
/// A model identical to the last printed one is not printed again, and the
/// status line is only printed when it flips.
pub struct ConsoleDisplay<W: Write + Send> {
    state: Mutex<ConsoleState<W>>,
}

impl ConsoleDisplay<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            state: Mutex::new(ConsoleState {
                out,
                model: None,
                connected: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ConsoleState<W>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Item at 1-based `position` in the last rendered list.
    pub fn item(&self, position: usize) -> Option<PresentationItem> {
        let index = position.checked_sub(1)?;
        self.lock().model.as_ref()?.get(index).cloned()
    }

    /// Print a one-line message for the user.
    pub fn notice(&self, message: &str) {
        let mut state = self.lock();
        // Terminal write failures have nowhere better to go.
        let _ = writeln!(state.out, "{message}");
        let _ = state.out.flush();
    }

    /// Print the last rendered list again.
    pub fn reprint(&self) {
        let mut state = self.lock();
        let ConsoleState { out, model, .. } = &mut *state;
        match model {
            Some(model) => {
                let _ = write_model(out, model);
            }
            None => {
                let _ = writeln!(out, "No history loaded yet.");
            }
        }
        let _ = out.flush();
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .out
    }
}

impl<W: Write + Send> DisplayPort for ConsoleDisplay<W> {
    fn render(&self, model: &PresentationModel) {
        let mut state = self.lock();
        if state.model.as_ref() == Some(model) {
            return;
        }
        let _ = write_model(&mut state.out, model);
        let _ = state.out.flush();
        state.model = Some(model.clone());
    }

    fn set_connection_status(&self, connected: bool) {
        let mut state = self.lock();
        if state.connected == Some(connected) {
            return;
        }
        let has_data = state.model.is_some();
        let line = match (connected, has_data) {
            (true, _) => "● Connected",
            (false, true) => "○ Disconnected (showing last known history)",
            (false, false) => "○ Disconnected",
        };
        let _ = writeln!(state.out, "{line}");
        let _ = state.out.flush();
        state.connected = Some(connected);
    }
}

fn write_model(out: &mut impl Write, model: &PresentationModel) -> io::Result<()> {
    writeln!(out, "── Clipboard history ({} items) ──", model.len())?;
    if model.is_empty() {
        writeln!(out, "  (empty)")?;
    }
    for (index, item) in model.items().iter().enumerate() {
        writeln!(out, "{}", format_item(index + 1, item))?;
    }
    Ok(())
}

fn format_item(position: usize, item: &PresentationItem) -> String {
    let body = match &item.content {
        PresentationContent::Text { text } => format!("[TEXT ] {}", preview(text)),
        PresentationContent::Image { base64 } => {
            format!("[IMAGE] {}", human_size(decoded_len(base64)))
        }
        PresentationContent::Invalid => "[?    ] invalid or missing content".to_string(),
    };
    match item.updated_at.as_deref().or(item.created_at.as_deref()) {
        Some(ts) => format!("{position:>3}. {body}  ({})", format_timestamp(ts)),
        None => format!("{position:>3}. {body}"),
    }
}

fn preview(text: &str) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let flat = flat.trim();
    if flat.chars().count() > PREVIEW_CHARS {
        let cut: String = flat.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}…")
    } else {
        flat.to_string()
    }
}

fn decoded_len(base64: &str) -> usize {
    let padding = base64.bytes().rev().take_while(|b| *b == b'=').count();
    (base64.len() / 4 * 3).saturating_sub(padding)
}

fn human_size(bytes: usize) -> String {
    match bytes {
        b if b >= 1024 * 1024 => format!("{:.1} MB image", b as f64 / (1024.0 * 1024.0)),
        b if b >= 1024 => format!("{:.1} KB image", b as f64 / 1024.0),
        b => format!("{b} B image"),
    }
}
