//! `miapp prefs` – inspect and edit the preference store.

use anyhow::Result;
use clap::Subcommand;
use miapp_core::host::Host;
use serde_json::Value;

#[derive(Debug, Subcommand)]
pub enum PrefsAction {
    /// Print a stored value.
    Get { key: String },
    /// Store a value (parsed as JSON when possible, kept as a string otherwise).
    Set { key: String, value: String },
    /// Delete a stored value.
    Remove { key: String },
}

pub fn run_prefs(host: &Host, action: PrefsAction) -> Result<()> {
    match action {
        PrefsAction::Get { key } => match host.prefs.get(&key)? {
            Some(value) => println!("{value}"),
            None => println!("(unset)"),
        },
        PrefsAction::Set { key, value } => {
            let value = serde_json::from_str(&value).unwrap_or(Value::String(value));
            host.prefs.set(&key, value)?;
        }
        PrefsAction::Remove { key } => host.prefs.remove(&key)?,
    }
    Ok(())
}
