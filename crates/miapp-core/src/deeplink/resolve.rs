//! Route resolution: app-identity gate plus the fixed, ordered rule table.

use std::collections::HashMap;

use super::{ActionKind, ParsedComponents, RouteDescriptor};

/// Custom URI scheme recognized as belonging to the app.
pub const APP_SCHEME: &str = "miapp";

/// Canonical web host recognized as belonging to the app.
pub const APP_HOST: &str = "miapp.com";

/// Resolves parsed components into a route.
///
/// Links outside the app identity (scheme and host both mismatched) resolve
/// to [`ActionKind::None`] with empty data. Links inside it are matched
/// against the rule table in order; a rule whose required segment or query
/// parameter is missing is skipped, and when nothing matches the route is
/// [`ActionKind::Home`].
///
/// For any matched rule, `data` holds the captured path fields with every
/// raw query parameter merged on top. A query parameter that shares a name
/// with a captured field overwrites it; that precedence is part of the
/// routing contract.
pub fn resolve(components: ParsedComponents) -> RouteDescriptor {
    let scheme_matches = components.scheme == APP_SCHEME;
    let host_matches = components.host == APP_HOST;

    if !scheme_matches && !host_matches {
        return RouteDescriptor {
            components,
            action: ActionKind::None,
            data: HashMap::new(),
        };
    }

    // A custom-scheme link like `miapp://producto/42` parses its first token
    // as the URL authority, not as a path segment. Fold it back in front so
    // the rules see the full `producto/42` shape.
    let mut segments: Vec<&str> = Vec::with_capacity(components.segments.len() + 1);
    if scheme_matches && !host_matches && !components.host.is_empty() {
        segments.push(components.host.as_str());
    }
    segments.extend(components.segments.iter().map(String::as_str));

    let params = &components.params;
    let (action, captured): (ActionKind, Vec<(&str, &str)>) = match segments.first().copied() {
        Some("producto") if segments.len() > 1 => {
            (ActionKind::ViewProduct, vec![("productId", segments[1])])
        }
        Some("usuario") if segments.len() > 1 => {
            (ActionKind::ViewUser, vec![("username", segments[1])])
        }
        Some("configuracion") => (ActionKind::OpenSettings, Vec::new()),
        Some("promo") if segments.len() > 1 => {
            (ActionKind::ViewPromo, vec![("codigo", segments[1])])
        }
        // The token reaches `data` through the query-parameter merge below.
        Some("reset-password") if params.contains_key("token") => {
            (ActionKind::ResetPassword, Vec::new())
        }
        Some("verify-email") if params.contains_key("token") => {
            (ActionKind::VerifyEmail, Vec::new())
        }
        _ => (ActionKind::Home, Vec::new()),
    };

    let mut data = HashMap::new();
    if action != ActionKind::Home {
        for (key, value) in captured {
            data.insert(key.to_string(), value.to_string());
        }
        for (key, value) in params {
            data.insert(key.clone(), value.clone());
        }
    }

    RouteDescriptor {
        components,
        action,
        data,
    }
}
