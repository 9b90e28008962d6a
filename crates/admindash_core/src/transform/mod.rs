//! Dashboard model to Atom tree transformer.
//!
//! # Responsibility
//! - Map a read-only `DashboardModel` into a theme-agnostic Atom tree.
//! - Name the failing section when a sub-transform rejects the model.
//!
//! # Invariants
//! - Output root is `dashboard` with exactly `header, content, footer`.
//! - Transform is pure and deterministic: same model, same tree.
//! - Optional model fields produce absent atoms/properties, never placeholders.

pub mod menu;

use crate::model::atom::{
    Atom, ATOM_CONTAINER, ATOM_CONTENT, ATOM_DASHBOARD, ATOM_FOOTER, ATOM_HEADER, ATOM_IMAGE,
    ATOM_LINK, ATOM_TEXT,
};
use crate::model::dashboard::DashboardModel;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use menu::{transform_menu, transform_user_menu, MAX_MENU_DEPTH};

/// `variant` value of the primary navigation menu.
pub const MENU_VARIANT_MAIN: &str = "main";
/// `variant` value of the quick-access shortcut menu.
pub const MENU_VARIANT_QUICK_ACCESS: &str = "quick_access";

/// Structural transform failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// Menu item at dotted index `path` is malformed.
    InvalidMenuItem { path: String, reason: &'static str },
    /// Signed-in user is malformed.
    InvalidUser(&'static str),
    /// Submenus nest deeper than allowed.
    MenuTooDeep { max_depth: usize },
    /// A dashboard section failed; wraps the underlying reason.
    Section {
        section: &'static str,
        source: Box<TransformError>,
    },
}

impl TransformError {
    fn in_section(section: &'static str) -> impl FnOnce(TransformError) -> TransformError {
        move |source| TransformError::Section {
            section,
            source: Box::new(source),
        }
    }
}

impl Display for TransformError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMenuItem { path, reason } => {
                write!(f, "menu item {path} is invalid: {reason}")
            }
            Self::InvalidUser(reason) => write!(f, "user is invalid: {reason}"),
            Self::MenuTooDeep { max_depth } => {
                write!(f, "menu nesting exceeds maximum depth of {max_depth}")
            }
            Self::Section { section, source } => write!(f, "{section} transform failed: {source}"),
        }
    }
}

impl Error for TransformError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Section { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Transforms a dashboard model into a `dashboard` root atom.
///
/// # Errors
/// - `Section { section: "header" | "content" | "footer", .. }` wrapping the
///   sub-transform failure.
pub fn transform_dashboard(model: &dyn DashboardModel) -> Result<Atom, TransformError> {
    let header = transform_header(model).map_err(TransformError::in_section("header"))?;
    let content = transform_content(model);
    let footer = transform_footer(model);

    Ok(Atom::new(ATOM_DASHBOARD)
        .with_child(header)
        .with_child(content)
        .with_child(footer))
}

/// Builds the `header` atom: logo, menus, then the user or auth section.
pub fn transform_header(model: &dyn DashboardModel) -> Result<Atom, TransformError> {
    let mut header = Atom::new(ATOM_HEADER)
        .with_optional_property("background_mode", &normalized_mode(model))
        .with_optional_property("background_color", model.navbar_background_color().trim())
        .with_optional_property("text_color", model.navbar_text_color().trim());

    if let Some(logo) = transform_logo(model) {
        header.add_child(logo);
    }

    let main_menu = transform_menu(model.menu_items())?.with_property("variant", MENU_VARIANT_MAIN);
    header.add_child(main_menu);

    let quick_access = model.quick_access_menu();
    if !quick_access.is_empty() {
        header.add_child(
            transform_menu(quick_access)?.with_property("variant", MENU_VARIANT_QUICK_ACCESS),
        );
    }

    match transform_user_menu(model.user(), model.user_menu())? {
        Some(user_menu) => header.add_child(user_menu),
        None => {
            if let Some(auth) = transform_auth_links(model) {
                header.add_child(auth);
            }
        }
    }

    Ok(header)
}

fn transform_logo(model: &dyn DashboardModel) -> Option<Atom> {
    let image_url = model.logo_image_url().trim();
    let raw_html = model.logo_raw_html().trim();
    let inner = if !image_url.is_empty() {
        Atom::new(ATOM_IMAGE)
            .with_property("src", image_url)
            .with_property("alt", model.title())
    } else if !raw_html.is_empty() {
        Atom::new(ATOM_TEXT).with_property("html", raw_html)
    } else {
        return None;
    };

    let href = match model.logo_redirect_url().trim() {
        "" => "/",
        url => url,
    };
    Some(
        Atom::new(ATOM_LINK)
            .with_property("href", href)
            .with_property("role", "brand")
            .with_child(inner),
    )
}

fn transform_auth_links(model: &dyn DashboardModel) -> Option<Atom> {
    let mut auth = Atom::new(ATOM_CONTAINER).with_property("role", "auth");
    for (url, label) in [(model.login_url(), "Login"), (model.register_url(), "Register")] {
        let url = url.trim();
        if !url.is_empty() {
            auth.add_child(
                Atom::new(ATOM_LINK)
                    .with_property("href", url)
                    .with_property("text", label),
            );
        }
    }
    if auth.children().is_empty() {
        None
    } else {
        Some(auth)
    }
}

/// Builds the `content` atom; model content is trusted pre-rendered markup.
pub fn transform_content(model: &dyn DashboardModel) -> Atom {
    let mut content = Atom::new(ATOM_CONTENT);
    if !model.content().is_empty() {
        content.add_child(Atom::new(ATOM_TEXT).with_property("html", model.content()));
    }
    content
}

/// Builds the `footer` atom.
pub fn transform_footer(model: &dyn DashboardModel) -> Atom {
    let mut footer = Atom::new(ATOM_FOOTER);
    if !model.footer_html().is_empty() {
        footer.add_child(Atom::new(ATOM_TEXT).with_property("html", model.footer_html()));
    }
    footer
}

fn normalized_mode(model: &dyn DashboardModel) -> String {
    model.navbar_background_color_mode().trim().to_ascii_lowercase()
}
