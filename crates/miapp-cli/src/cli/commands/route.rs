//! `miapp route <url>` – one-shot pipeline run for a single link.

use std::sync::Arc;

use anyhow::Result;
use miapp_core::deeplink::{DeepLinkService, Dispatcher, RawLink};
use miapp_core::host::Host;

pub fn run_route(host: &Host, url: &str) -> Result<()> {
    let service = DeepLinkService::new(Dispatcher::new(Arc::clone(&host.presenter)));
    let route = service.route(&RawLink::runtime(url))?;

    println!("action: {:?}", route.action);
    let mut data: Vec<_> = route.data.iter().collect();
    data.sort();
    for (key, value) in data {
        println!("  {key} = {value}");
    }

    service.dispatch(&route);
    Ok(())
}
