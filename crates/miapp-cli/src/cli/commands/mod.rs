//! CLI command handlers, one file per command.

mod completions;
mod config;
mod locate;
mod open;
mod photo;
mod prefs;
mod route;
mod run;
mod status;

pub use completions::run_completions;
pub use config::run_config;
pub use locate::run_locate;
pub use open::run_open;
pub use photo::{run_photo, PhotoSource};
pub use prefs::{run_prefs, PrefsAction};
pub use route::run_route;
pub use run::run_shell;
pub use status::run_status;
