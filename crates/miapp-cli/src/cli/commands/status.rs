//! `miapp status` – show the network status reported by the host.

use anyhow::Result;
use miapp_core::host::Host;

pub fn run_status(host: &Host) -> Result<()> {
    let status = host.network.status();
    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(())
}
