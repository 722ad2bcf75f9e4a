//! Presentation collaborators: transient toasts and named detail surfaces.

use crate::deeplink::DetailBlock;

/// Presentation context of the running app: short transient notifications
/// plus optional named render surfaces.
pub trait Presenter: Send + Sync {
    /// Show a short transient notification.
    fn toast(&self, text: &str);

    /// Look up a named display surface. `None` means the surface is absent
    /// from the current presentation context, which is never an error.
    fn surface(&self, id: &str) -> Option<&dyn DetailSurface>;
}

/// A named display surface that can render a structured detail block.
pub trait DetailSurface: Send + Sync {
    fn render(&self, block: &DetailBlock);
}

/// Fallback presenter: toasts go to the log, no surfaces exist.
#[derive(Debug, Default)]
pub struct LogPresenter;

impl Presenter for LogPresenter {
    fn toast(&self, text: &str) {
        tracing::info!(%text, "toast");
    }

    fn surface(&self, _id: &str) -> Option<&dyn DetailSurface> {
        None
    }
}
