//! Deep-link parsing, routing, and dispatch.
//!
//! Turns a raw URL string delivered by the host (at launch or while the
//! process runs) into a [`RouteDescriptor`] and dispatches it to presentation
//! effects. The flow per event is strictly linear:
//! listener → parser → resolver → dispatcher.

mod dispatch;
mod error;
mod listener;
mod parse;
mod resolve;
mod service;

pub use dispatch::{Accent, DetailBlock, Dispatcher, DETAIL_SURFACE_ID};
pub use error::DeepLinkError;
pub use listener::{LinkListener, COLD_START_DISPATCH_DELAY};
pub use parse::parse;
pub use resolve::{resolve, APP_HOST, APP_SCHEME};
pub use service::DeepLinkService;

use std::collections::HashMap;

/// Where a raw link came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOrigin {
    /// The URL launched the process.
    ColdStart,
    /// The URL arrived while the process was already running.
    Runtime,
}

/// An opaque URL string as delivered by the host, tagged with its origin.
#[derive(Debug, Clone)]
pub struct RawLink {
    url: String,
    origin: LinkOrigin,
}

impl RawLink {
    pub fn cold_start(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            origin: LinkOrigin::ColdStart,
        }
    }

    pub fn runtime(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            origin: LinkOrigin::Runtime,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn origin(&self) -> LinkOrigin {
        self.origin
    }
}

/// Structural decomposition of a link, before any routing decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedComponents {
    /// Protocol token without the trailing `:`.
    pub scheme: String,
    /// Hostname of the authority; empty when the URL has none.
    pub host: String,
    /// Path component as parsed.
    pub path: String,
    /// Non-empty `/`-delimited tokens of `path`, in order.
    pub segments: Vec<String>,
    /// Query parameters; for a repeated key the last occurrence wins.
    pub params: HashMap<String, String>,
}

/// What a recognized link asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    ViewProduct,
    ViewUser,
    OpenSettings,
    ViewPromo,
    ResetPassword,
    VerifyEmail,
    /// The link belongs to the app but matched no path rule.
    Home,
    /// The link is outside the app's identity; nothing to do.
    None,
}

/// Resolved route: built once per link, consumed once by the dispatcher,
/// never persisted.
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    pub components: ParsedComponents,
    pub action: ActionKind,
    pub data: HashMap<String, String>,
}
