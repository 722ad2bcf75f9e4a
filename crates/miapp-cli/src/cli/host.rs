//! Terminal implementations of the host capability providers.

use std::fs;
use std::process::Command;
use std::sync::Arc;

use miapp_core::deeplink::{Accent, DetailBlock, DETAIL_SURFACE_ID};
use miapp_core::host::{
    CapabilityError, ChannelLinkEvents, ConnectionType, DetailSurface, ExternalLinkOpener,
    FilePrefs, Host, MemoryPrefs, NetworkMonitor, NetworkStatus, NoCamera, NoGeolocation,
    PreferenceStore, Presenter,
};
use tokio::io::AsyncBufReadExt;

/// Presenter that prints toasts and renders detail blocks to stdout.
#[derive(Default)]
pub struct TerminalPresenter {
    surface: TerminalSurface,
}

#[derive(Default)]
pub struct TerminalSurface;

impl Presenter for TerminalPresenter {
    fn toast(&self, text: &str) {
        println!("[toast] {text}");
    }

    fn surface(&self, id: &str) -> Option<&dyn DetailSurface> {
        (id == DETAIL_SURFACE_ID).then_some(&self.surface as &dyn DetailSurface)
    }
}

impl DetailSurface for TerminalSurface {
    fn render(&self, block: &DetailBlock) {
        let marker = match block.accent {
            Accent::Plain => "-",
            Accent::Promo => "*",
            Accent::Security => "#",
            Accent::Email => "@",
        };
        println!("{marker} {}", block.title);
        for (label, value) in &block.rows {
            println!("    {label}: {value}");
        }
    }
}

/// Network probe over `/sys/class/net`: connected when any non-loopback
/// interface reports `up`.
pub struct SysfsNetwork;

impl NetworkMonitor for SysfsNetwork {
    fn status(&self) -> NetworkStatus {
        let connected = fs::read_dir("/sys/class/net")
            .map(|entries| {
                entries.filter_map(|e| e.ok()).any(|e| {
                    if e.file_name() == "lo" {
                        return false;
                    }
                    fs::read_to_string(e.path().join("operstate"))
                        .map(|s| s.trim() == "up")
                        .unwrap_or(false)
                })
            })
            .unwrap_or(false);
        NetworkStatus {
            connected,
            connection_type: if connected {
                ConnectionType::Unknown
            } else {
                ConnectionType::None
            },
        }
    }
}

/// Opens links with `xdg-open`.
pub struct XdgOpener;

impl ExternalLinkOpener for XdgOpener {
    fn open(&self, url: &str) -> Result<(), CapabilityError> {
        let status = Command::new("xdg-open").arg(url).status()?;
        if status.success() {
            Ok(())
        } else {
            Err(CapabilityError::Unavailable("external link opener"))
        }
    }
}

/// Capability bundle for a terminal session. Camera and geolocation have no
/// terminal backing and stay on their unavailable fallbacks.
pub fn terminal_host() -> Host {
    let prefs: Arc<dyn PreferenceStore> = match FilePrefs::open_default() {
        Ok(prefs) => Arc::new(prefs),
        Err(err) => {
            tracing::warn!(%err, "preference file unavailable; using in-memory store");
            Arc::new(MemoryPrefs::default())
        }
    };

    Host {
        presenter: Arc::new(TerminalPresenter::default()),
        prefs,
        network: Arc::new(SysfsNetwork),
        geolocation: Arc::new(NoGeolocation),
        camera: Arc::new(NoCamera),
        opener: Arc::new(XdgOpener),
    }
}

/// Link events backed by stdin: one URL per line until EOF.
pub fn stdin_link_events(launch_url: Option<String>) -> ChannelLinkEvents {
    let events = ChannelLinkEvents::new(launch_url);
    let tx = events.sender();
    tokio::spawn(async move {
        let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if tx.send(line.to_string()).is_err() {
                break;
            }
        }
    });
    events
}
