//! Dispatch of resolved routes to presentation effects.
//!
//! Each recognized action produces two independent effects: a toast whose
//! text is parameterized by the route data, and (when the well-known detail
//! surface exists) a rendered [`DetailBlock`]. Surface absence only skips
//! the render; the toast still fires.

use std::sync::Arc;

use crate::host::Presenter;

use super::{ActionKind, RouteDescriptor};

/// Well-known identifier of the deep-link detail surface in the
/// presentation context.
pub const DETAIL_SURFACE_ID: &str = "deep-link-log";

/// Visual accent of a rendered detail block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    #[default]
    Plain,
    Promo,
    Security,
    Email,
}

/// Small structured block rendered into the detail surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailBlock {
    pub title: String,
    pub rows: Vec<(String, String)>,
    pub accent: Accent,
}

impl DetailBlock {
    fn new(title: &str, accent: Accent) -> Self {
        Self {
            title: title.to_string(),
            rows: Vec::new(),
            accent,
        }
    }

    fn row(mut self, label: &str, value: impl Into<String>) -> Self {
        self.rows.push((label.to_string(), value.into()));
        self
    }
}

/// Truncation applied to tokens before they reach any rendered output.
/// The full token never appears in a detail block.
fn redact_token(token: &str) -> String {
    let head: String = token.chars().take(8).collect();
    format!("{head}...")
}

/// Produces the user-visible effects for a resolved route.
pub struct Dispatcher {
    presenter: Arc<dyn Presenter>,
}

impl Dispatcher {
    pub fn new(presenter: Arc<dyn Presenter>) -> Self {
        Self { presenter }
    }

    /// Emits the toast for `route` and renders its detail block when the
    /// surface exists. [`ActionKind::None`] produces no effect at all;
    /// [`ActionKind::Home`] only logs.
    pub fn dispatch(&self, route: &RouteDescriptor) {
        let field = |key: &str| route.data.get(key).map(String::as_str).unwrap_or_default();

        let (toast, block) = match route.action {
            ActionKind::None => return,
            ActionKind::Home => {
                tracing::debug!(path = %route.components.path, "deep link landed on home");
                return;
            }
            ActionKind::ViewProduct => {
                let id = field("productId");
                let mut block = DetailBlock::new("Producto", Accent::Plain).row("ID", id);
                if let Some(reference) = route.data.get("ref") {
                    block = block.row("Referencia", reference.clone());
                }
                (format!("Abriendo producto ID: {id}"), block)
            }
            ActionKind::ViewUser => {
                let username = field("username");
                let block = DetailBlock::new("Usuario", Accent::Plain)
                    .row("Username", format!("@{username}"));
                (format!("Abriendo perfil de: {username}"), block)
            }
            ActionKind::OpenSettings => {
                let tab = route.data.get("tab").map(String::as_str).unwrap_or("general");
                let block = DetailBlock::new("Configuración", Accent::Plain).row("Tab", tab);
                ("Abriendo configuración".to_string(), block)
            }
            ActionKind::ViewPromo => {
                let codigo = field("codigo");
                let mut block =
                    DetailBlock::new("🎉 Promoción Especial", Accent::Promo).row("Código", codigo);
                if let Some(descuento) = route.data.get("descuento") {
                    block = block.row("Descuento", format!("{descuento}%"));
                }
                (format!("¡Promoción: {codigo}!"), block)
            }
            ActionKind::ResetPassword => {
                let block = DetailBlock::new("🔐 Restablecer Contraseña", Accent::Security)
                    .row("Token", redact_token(field("token")));
                ("Restableciendo contraseña...".to_string(), block)
            }
            ActionKind::VerifyEmail => {
                let block = DetailBlock::new("✉️ Verificación de Email", Accent::Email)
                    .row("Estado", "Procesando...");
                ("Verificando email...".to_string(), block)
            }
        };

        self.presenter.toast(&toast);
        match self.presenter.surface(DETAIL_SURFACE_ID) {
            Some(surface) => surface.render(&block),
            None => {
                tracing::debug!(surface = DETAIL_SURFACE_ID, "detail surface absent; toast only")
            }
        }
    }
}
