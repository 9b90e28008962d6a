//! Theme contracts and built-in themes.
//!
//! # Responsibility
//! - Define the `Theme` strategy every visual skin implements.
//! - Provide the composable `BaseTheme` and the built-in skins.
//! - Own the name-to-theme registry used per request.
//!
//! # Invariants
//! - Themes are immutable after construction and safe to share across threads.
//! - Rendering through a theme never mutates the atom tree.

pub mod adminlte;
pub mod base;
pub mod bootstrap;
pub mod registry;
pub mod tabler;

use crate::model::atom::Atom;
use crate::model::dashboard::DashboardModel;
use crate::render::RenderResult;

pub use base::BaseTheme;
pub use registry::{RegistryError, ThemeRegistry};

/// Stylesheet reference emitted in the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLink {
    pub href: String,
    pub integrity: Option<String>,
    pub crossorigin: Option<String>,
}

impl AssetLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            integrity: None,
            crossorigin: None,
        }
    }

    /// Adds a subresource-integrity hash with anonymous CORS.
    pub fn with_integrity(mut self, integrity: impl Into<String>) -> Self {
        self.integrity = Some(integrity.into());
        self.crossorigin = Some("anonymous".to_string());
        self
    }
}

/// Script reference emitted at the end of the document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetScript {
    pub src: String,
    pub integrity: Option<String>,
    pub defer: bool,
}

impl AssetScript {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            integrity: None,
            defer: false,
        }
    }

    pub fn deferred(mut self) -> Self {
        self.defer = true;
        self
    }
}

/// How a theme marks `<body>` when dark mode is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DarkModeMarker {
    /// Attribute such as `data-bs-theme="dark"`.
    Attribute { name: String, value: String },
    /// Extra class token such as `dark-mode`.
    Class(String),
}

/// Pluggable visual skin.
///
/// Implementations are shared behind `Arc<dyn Theme>` by the registry, so
/// they must be `Send + Sync` and free of per-request state.
pub trait Theme: Send + Sync {
    /// Stable registry name, e.g. `bootstrap`.
    fn name(&self) -> &str;

    /// Stylesheets for the requested color mode.
    fn css_links(&self, dark_mode: bool) -> Vec<AssetLink>;

    fn js_scripts(&self) -> Vec<AssetScript>;

    fn custom_css(&self) -> &str;

    fn custom_js(&self) -> &str;

    fn dark_mode_marker(&self) -> Option<DarkModeMarker>;

    /// Class always applied to `<body>`; may be empty.
    fn body_class(&self) -> &str;

    /// Renders one atom subtree, dispatching on atom type.
    fn render_atom(&self, atom: &Atom) -> RenderResult<String>;

    /// Renders a `dashboard` root into the theme's body layout.
    ///
    /// # Errors
    /// - Structural errors when the root is not `dashboard` with
    ///   `header, content, footer` children.
    fn render_dashboard(&self, root: &Atom) -> RenderResult<String>;

    /// Wraps pre-rendered content into a full HTML document.
    fn render_page(&self, content: &str, model: &dyn DashboardModel) -> RenderResult<String>;
}
