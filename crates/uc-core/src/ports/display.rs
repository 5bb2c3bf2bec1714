use crate::clipboard::PresentationModel;

/// Display layer fed by the view synchronizer.
pub trait DisplayPort: Send + Sync {
    /// Replace whatever is shown with `model`.
    fn render(&self, model: &PresentationModel);

    fn set_connection_status(&self, connected: bool);
}
