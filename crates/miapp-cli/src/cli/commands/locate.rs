//! `miapp locate` – show the current position via the geolocation capability.

use anyhow::Result;
use miapp_core::host::{CapabilityError, Host};

pub fn run_locate(host: &Host) -> Result<()> {
    match host.geolocation.current_position() {
        Ok(position) => println!(
            "lat {:.6}  lng {:.6}  (±{:.0} m)",
            position.lat, position.lng, position.accuracy
        ),
        Err(CapabilityError::Unavailable(_)) => host.presenter.toast("Geolocation no disponible"),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
