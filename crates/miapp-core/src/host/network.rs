//! Network status capability.

use serde::{Deserialize, Serialize};

/// Kind of connection reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    Wifi,
    Cellular,
    Ethernet,
    Unknown,
    None,
}

/// Connectivity snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStatus {
    pub connected: bool,
    #[serde(rename = "connectionType")]
    pub connection_type: ConnectionType,
}

pub trait NetworkMonitor: Send + Sync {
    fn status(&self) -> NetworkStatus;
}

/// Fallback when the host exposes no network capability: report online with
/// an unknown connection type.
#[derive(Debug, Default)]
pub struct AssumeOnline;

impl NetworkMonitor for AssumeOnline {
    fn status(&self) -> NetworkStatus {
        NetworkStatus {
            connected: true,
            connection_type: ConnectionType::Unknown,
        }
    }
}
