//! CLI for the MiApp shell: a terminal host adapter around the deep-link
//! pipeline and the host capabilities.

mod commands;
mod host;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use miapp_core::config;
use std::path::PathBuf;

use commands::{
    run_completions, run_config, run_locate, run_open, run_photo, run_prefs, run_route, run_shell,
    run_status, PhotoSource, PrefsAction,
};

/// Top-level CLI for the MiApp shell.
#[derive(Debug, Parser)]
#[command(name = "miapp")]
#[command(about = "MiApp shell: deep-link routing over host capabilities", long_about = None)]
pub struct Cli {
    /// Path to app.config.json.
    #[arg(long, global = true, default_value = "app.config.json", value_name = "PATH")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run the shell: cold-start link (if given), then one runtime link per
    /// stdin line until EOF.
    Run {
        /// Simulate the URL that launched the process.
        #[arg(long, value_name = "URL")]
        url: Option<String>,
    },

    /// Route a single link through the pipeline and dispatch it.
    Route {
        /// Deep link to route (e.g. miapp://producto/42).
        url: String,
    },

    /// Open an external link with the system browser.
    Open {
        url: String,
    },

    /// Show the network status reported by the host.
    Status,

    /// Show the loaded app configuration.
    Config,

    /// Capture or pick an image via the camera capability.
    Photo {
        /// Image source.
        #[arg(long, value_enum, default_value = "camera")]
        source: PhotoSource,
    },

    /// Show the current position via the geolocation capability.
    Locate,

    /// Inspect or edit the preference store.
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },

    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_default(&cli.config);
        tracing::debug!("loaded config: {:?}", cfg);
        let host = host::terminal_host();

        match cli.command {
            CliCommand::Run { url } => run_shell(&host, url).await?,
            CliCommand::Route { url } => run_route(&host, &url)?,
            CliCommand::Open { url } => run_open(&host, &url)?,
            CliCommand::Status => run_status(&host)?,
            CliCommand::Config => run_config(&cfg),
            CliCommand::Photo { source } => run_photo(&host, source)?,
            CliCommand::Locate => run_locate(&host)?,
            CliCommand::Prefs { action } => run_prefs(&host, action)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
