//! External-link opening capability.

use super::CapabilityError;

pub trait ExternalLinkOpener: Send + Sync {
    /// Open `url` outside the app, e.g. in the system browser.
    fn open(&self, url: &str) -> Result<(), CapabilityError>;
}

/// Fallback: record the request in the log without opening anything.
#[derive(Debug, Default)]
pub struct LogOpener;

impl ExternalLinkOpener for LogOpener {
    fn open(&self, url: &str) -> Result<(), CapabilityError> {
        tracing::info!(%url, "external link requested; no opener on this host");
        Ok(())
    }
}
