//! App configuration loaded from `app.config.json` (AppForge schema,
//! camelCase keys).

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Deep-link section of the app configuration. Informational only: the
/// routing contract itself is fixed at compile time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeeplinksConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub paths: Vec<String>,
}

/// App configuration (`app.config.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub version_code: u32,
    /// Android-style permission identifiers requested by the packaged app.
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub deeplinks: Option<DeeplinksConfig>,
}

fn default_app_name() -> String {
    "MiApp".to_string()
}

fn default_version() -> String {
    "0.0.0".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            version: default_version(),
            version_code: 0,
            permissions: Vec::new(),
            deeplinks: None,
        }
    }
}

impl AppConfig {
    /// Version label as shown in the UI, e.g. `v1.0.0 (3)`.
    pub fn version_label(&self) -> String {
        format!("v{} ({})", self.version, self.version_code)
    }
}

pub fn load(path: &Path) -> Result<AppConfig> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Load configuration, falling back to defaults when the file is missing or
/// invalid. The shell still starts; only config-driven labels degrade.
pub fn load_or_default(path: &Path) -> AppConfig {
    match load(path) {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "could not load app config; using defaults");
            AppConfig::default()
        }
    }
}
