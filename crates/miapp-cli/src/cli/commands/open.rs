//! `miapp open <url>` – open an external link with the system browser.

use anyhow::Result;
use miapp_core::host::Host;

pub fn run_open(host: &Host, url: &str) -> Result<()> {
    host.opener.open(url)?;
    println!("Opened {url}");
    Ok(())
}
