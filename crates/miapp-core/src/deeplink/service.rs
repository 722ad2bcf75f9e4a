//! Deep-link service: the single pipeline entry point.
//!
//! Constructed once at startup and handed to whatever triggers routing (the
//! link listener, CLI commands, tests) instead of exposing the pipeline
//! through ambient globals.

use super::{parse, resolve, DeepLinkError, Dispatcher, RawLink, RouteDescriptor};

pub struct DeepLinkService {
    dispatcher: Dispatcher,
}

impl DeepLinkService {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Parse and resolve without dispatching.
    pub fn route(&self, link: &RawLink) -> Result<RouteDescriptor, DeepLinkError> {
        let components = parse(link.url())?;
        let route = resolve(components);
        tracing::debug!(
            url = link.url(),
            origin = ?link.origin(),
            action = ?route.action,
            "deep link resolved"
        );
        Ok(route)
    }

    /// Produce the presentation effects for an already-resolved route.
    pub fn dispatch(&self, route: &RouteDescriptor) {
        self.dispatcher.dispatch(route);
    }

    /// Full pipeline for one link. A malformed link is logged at warn level
    /// and absorbed; it never propagates to the caller.
    pub fn handle(&self, link: &RawLink) {
        match self.route(link) {
            Ok(route) => self.dispatch(&route),
            Err(err) => tracing::warn!(url = link.url(), %err, "ignoring malformed deep link"),
        }
    }
}
