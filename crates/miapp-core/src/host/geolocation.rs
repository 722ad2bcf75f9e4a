//! Geolocation capability.

use serde::Serialize;

use super::CapabilityError;

/// A geographic fix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
    /// Accuracy radius in meters.
    pub accuracy: f64,
}

pub trait GeolocationProvider: Send + Sync {
    fn current_position(&self) -> Result<Position, CapabilityError>;
}

/// Fallback when the host has no positioning hardware or service.
#[derive(Debug, Default)]
pub struct NoGeolocation;

impl GeolocationProvider for NoGeolocation {
    fn current_position(&self) -> Result<Position, CapabilityError> {
        Err(CapabilityError::Unavailable("geolocation"))
    }
}
