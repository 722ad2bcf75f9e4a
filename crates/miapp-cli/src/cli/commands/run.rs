//! `miapp run` – start the shell and listen for deep links.

use std::sync::Arc;

use anyhow::Result;
use miapp_core::deeplink::{DeepLinkService, Dispatcher, LinkListener};
use miapp_core::host::Host;

use crate::cli::host::stdin_link_events;

pub async fn run_shell(host: &Host, launch_url: Option<String>) -> Result<()> {
    let service = DeepLinkService::new(Dispatcher::new(Arc::clone(&host.presenter)));
    let events = stdin_link_events(launch_url);
    let listener = LinkListener::new(service, Some(Box::new(events)));
    tracing::info!("miapp shell ready; reading links from stdin");
    listener.run().await
}
