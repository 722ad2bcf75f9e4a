pub mod config;
pub mod logging;

pub mod deeplink;
pub mod host;
