//! Host capability providers.
//!
//! Each platform collaborator of the original shell (preferences, toasts and
//! surfaces, camera, geolocation, network status, external links, link
//! events) is an explicit provider trait. One concrete implementation per
//! collaborator is chosen at startup and injected; nothing probes the
//! platform again on every call.

mod camera;
mod events;
mod external;
mod geolocation;
mod network;
mod prefs;
mod presenter;

pub use camera::{CameraProvider, CapturedImage, ImageSource, NoCamera};
pub use events::{ChannelLinkEvents, LinkEvents, LinkSubscription};
pub use external::{ExternalLinkOpener, LogOpener};
pub use geolocation::{GeolocationProvider, NoGeolocation, Position};
pub use network::{AssumeOnline, ConnectionType, NetworkMonitor, NetworkStatus};
pub use prefs::{FilePrefs, MemoryPrefs, PreferenceStore};
pub use presenter::{DetailSurface, LogPresenter, Presenter};

use std::sync::Arc;

use thiserror::Error;

/// Failure of a host capability. Degrades to a fallback provider or an
/// informational notice for user-invoked requests; never a crash.
#[derive(Debug, Error)]
pub enum CapabilityError {
    /// The underlying host feature is absent on this platform.
    #[error("{0} not available")]
    Unavailable(&'static str),

    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("xdg base directories: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
}

/// Capability providers selected at startup.
pub struct Host {
    pub presenter: Arc<dyn Presenter>,
    pub prefs: Arc<dyn PreferenceStore>,
    pub network: Arc<dyn NetworkMonitor>,
    pub geolocation: Arc<dyn GeolocationProvider>,
    pub camera: Arc<dyn CameraProvider>,
    pub opener: Arc<dyn ExternalLinkOpener>,
}

impl Host {
    /// Fully degraded provider set for platforms that offer nothing:
    /// log-only presenter, in-memory preferences, optimistic network
    /// report, and unavailable camera/geolocation, log-only link opening.
    pub fn with_fallbacks() -> Self {
        Self {
            presenter: Arc::new(LogPresenter),
            prefs: Arc::new(MemoryPrefs::default()),
            network: Arc::new(AssumeOnline),
            geolocation: Arc::new(NoGeolocation),
            camera: Arc::new(NoCamera),
            opener: Arc::new(LogOpener),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_host_degrades_without_failing() {
        let host = Host::with_fallbacks();

        host.presenter.toast("hola");
        assert!(host.presenter.surface("deep-link-log").is_none());
        assert!(host.network.status().connected);
        assert!(matches!(
            host.geolocation.current_position(),
            Err(CapabilityError::Unavailable("geolocation"))
        ));
        assert!(matches!(
            host.camera.get_photo(ImageSource::Camera),
            Err(CapabilityError::Unavailable("camera"))
        ));
        assert!(host.opener.open("https://example.com").is_ok());
    }
}
