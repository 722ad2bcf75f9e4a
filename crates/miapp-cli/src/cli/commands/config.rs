//! `miapp config` – show the loaded app configuration.

use miapp_core::config::AppConfig;

pub fn run_config(cfg: &AppConfig) {
    println!("{} {}", cfg.app_name, cfg.version_label());
    if !cfg.permissions.is_empty() {
        println!("permissions:");
        for permission in &cfg.permissions {
            println!("  {permission}");
        }
    }
    if let Some(deeplinks) = &cfg.deeplinks {
        println!(
            "deeplinks: {}",
            if deeplinks.enabled { "enabled" } else { "disabled" }
        );
        for path in &deeplinks.paths {
            println!("  {path}");
        }
    }
}
