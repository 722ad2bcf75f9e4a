//! Boundary adapter between the host's link events and the pipeline.

use std::time::Duration;

use anyhow::Result;

use crate::host::LinkEvents;

use super::{DeepLinkService, RawLink};

/// Delay before dispatching a cold-start route, so the presentation layer
/// can finish initializing. One-shot: runtime deliveries are dispatched
/// immediately.
pub const COLD_START_DISPATCH_DELAY: Duration = Duration::from_millis(500);

pub struct LinkListener {
    service: DeepLinkService,
    events: Option<Box<dyn LinkEvents>>,
}

impl LinkListener {
    /// `events = None` means the host has no link-event capability; the
    /// listener then initializes as a no-op and [`run`](Self::run) returns
    /// immediately. Startup is never aborted over a missing capability.
    pub fn new(service: DeepLinkService, events: Option<Box<dyn LinkEvents>>) -> Self {
        Self {
            service,
            events,
        }
    }

    /// Process the cold-start URL (if any), then consume runtime link events
    /// until the subscription closes. Each event runs parse → resolve →
    /// dispatch to completion before the next one is considered.
    ///
    /// There is no cancellation for the cold-start delay; if the process
    /// terminates first, that dispatch simply never runs.
    pub async fn run(mut self) -> Result<()> {
        let Some(mut events) = self.events.take() else {
            tracing::info!("link-event capability unavailable; deep links disabled");
            return Ok(());
        };
        let mut subscription = events.subscribe();
        let launch_url = events.launch_url();
        // Delivery continues through the subscription; the host handle (and
        // any sender it still holds) is not needed past this point.
        drop(events);

        if let Some(url) = launch_url {
            tracing::info!(%url, "process launched by deep link");
            match self.service.route(&RawLink::cold_start(url)) {
                Ok(route) => {
                    tokio::time::sleep(COLD_START_DISPATCH_DELAY).await;
                    self.service.dispatch(&route);
                }
                Err(err) => tracing::warn!(%err, "ignoring malformed launch link"),
            }
        }

        while let Some(url) = subscription.next().await {
            self.service.handle(&RawLink::runtime(url));
        }
        subscription.close();
        tracing::debug!("link subscription closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::time::Instant;

    use crate::host::ChannelLinkEvents;

    use super::super::dispatch::tests::RecordingPresenter;
    use super::super::{DeepLinkService, Dispatcher};
    use super::*;

    fn service(presenter: &Arc<RecordingPresenter>) -> DeepLinkService {
        DeepLinkService::new(Dispatcher::new(Arc::clone(presenter) as _))
    }

    #[tokio::test(start_paused = true)]
    async fn cold_start_dispatch_is_delayed() {
        let presenter = Arc::new(RecordingPresenter::with_surface());
        // No runtime deliveries; the stream closes as soon as the listener
        // releases the host handle.
        let events = ChannelLinkEvents::new(Some("miapp://producto/42".to_string()));
        let listener = LinkListener::new(service(&presenter), Some(Box::new(events)));

        let started = Instant::now();
        listener.run().await.unwrap();

        assert!(started.elapsed() >= COLD_START_DISPATCH_DELAY);
        assert_eq!(presenter.toasts(), vec!["Abriendo producto ID: 42"]);
    }

    #[tokio::test(start_paused = true)]
    async fn runtime_delivery_is_immediate() {
        let presenter = Arc::new(RecordingPresenter::with_surface());
        let events = ChannelLinkEvents::new(None);
        let tx = events.sender();
        tx.send("miapp://usuario/ana".to_string()).unwrap();
        drop(tx);
        let listener = LinkListener::new(service(&presenter), Some(Box::new(events)));

        let started = Instant::now();
        listener.run().await.unwrap();

        assert!(started.elapsed() < COLD_START_DISPATCH_DELAY);
        assert_eq!(presenter.toasts(), vec!["Abriendo perfil de: ana"]);
    }

    #[tokio::test(start_paused = true)]
    async fn cold_start_delay_applies_once_not_per_event() {
        let presenter = Arc::new(RecordingPresenter::with_surface());
        let events = ChannelLinkEvents::new(Some("miapp://promo/UNO".to_string()));
        let tx = events.sender();
        tx.send("miapp://promo/DOS".to_string()).unwrap();
        tx.send("miapp://promo/TRES".to_string()).unwrap();
        drop(tx);
        let listener = LinkListener::new(service(&presenter), Some(Box::new(events)));

        let started = Instant::now();
        listener.run().await.unwrap();

        // One delay total, and the cold-start route dispatches first.
        assert!(started.elapsed() >= COLD_START_DISPATCH_DELAY);
        assert!(started.elapsed() < COLD_START_DISPATCH_DELAY * 2);
        assert_eq!(
            presenter.toasts(),
            vec![
                "¡Promoción: UNO!",
                "¡Promoción: DOS!",
                "¡Promoción: TRES!"
            ]
        );
    }

    #[tokio::test]
    async fn missing_capability_is_a_quiet_noop() {
        let presenter = Arc::new(RecordingPresenter::with_surface());
        let listener = LinkListener::new(service(&presenter), None);
        listener.run().await.unwrap();
        assert!(presenter.toasts().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn malformed_links_are_absorbed_on_both_paths() {
        let presenter = Arc::new(RecordingPresenter::with_surface());
        let events = ChannelLinkEvents::new(Some("not a url".to_string()));
        let tx = events.sender();
        tx.send("also not a url".to_string()).unwrap();
        tx.send("miapp://usuario/ok".to_string()).unwrap();
        drop(tx);
        let listener = LinkListener::new(service(&presenter), Some(Box::new(events)));

        listener.run().await.unwrap();
        assert_eq!(presenter.toasts(), vec!["Abriendo perfil de: ok"]);
    }

    #[tokio::test(start_paused = true)]
    async fn foreign_links_produce_no_effects() {
        let presenter = Arc::new(RecordingPresenter::with_surface());
        let events = ChannelLinkEvents::new(None);
        let tx = events.sender();
        tx.send("https://example.com/producto/1".to_string()).unwrap();
        drop(tx);
        let listener = LinkListener::new(service(&presenter), Some(Box::new(events)));

        listener.run().await.unwrap();
        assert!(presenter.toasts().is_empty());
        assert!(presenter.blocks().is_empty());
    }
}
