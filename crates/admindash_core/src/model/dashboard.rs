//! Dashboard input model.
//!
//! # Responsibility
//! - Define the read-only capability set the transformer consumes.
//! - Provide a serde-backed `Dashboard` value loadable from JSON files.
//!
//! # Invariants
//! - Core code reads models only through `DashboardModel` getters.
//! - Empty strings mean "not configured" for every optional URL/color field.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const DEFAULT_TITLE: &str = "Dashboard";

/// One navigation entry with an optional nested submenu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    pub title: String,
    pub url: String,
    pub icon: String,
    pub active: bool,
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    pub fn with_children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = children;
        self
    }
}

/// Signed-in user shown in the header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub name: String,
    pub email: String,
    pub avatar_url: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Read-only dashboard capability set consumed by the transformer and the
/// page assembler.
pub trait DashboardModel {
    fn content(&self) -> &str;
    fn menu_items(&self) -> &[MenuItem];
    fn quick_access_menu(&self) -> &[MenuItem];
    fn user(&self) -> Option<&User>;
    fn user_menu(&self) -> &[MenuItem];
    fn login_url(&self) -> &str;
    fn register_url(&self) -> &str;
    /// `dark` or `light`; compared case-insensitively.
    fn navbar_background_color_mode(&self) -> &str;
    fn navbar_background_color(&self) -> &str;
    fn navbar_text_color(&self) -> &str;
    fn favicon_url(&self) -> &str;
    fn logo_image_url(&self) -> &str;
    fn logo_raw_html(&self) -> &str;
    fn logo_redirect_url(&self) -> &str;

    fn title(&self) -> &str {
        DEFAULT_TITLE
    }

    fn footer_html(&self) -> &str {
        ""
    }
}

/// Plain dashboard value, deserializable from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dashboard {
    pub title: String,
    pub content: String,
    pub footer_html: String,
    pub menu_items: Vec<MenuItem>,
    pub quick_access_menu: Vec<MenuItem>,
    pub user: Option<User>,
    pub user_menu: Vec<MenuItem>,
    pub login_url: String,
    pub register_url: String,
    pub navbar_background_color_mode: String,
    pub navbar_background_color: String,
    pub navbar_text_color: String,
    pub favicon_url: String,
    pub logo_image_url: String,
    pub logo_raw_html: String,
    pub logo_redirect_url: String,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            content: String::new(),
            footer_html: String::new(),
            menu_items: Vec::new(),
            quick_access_menu: Vec::new(),
            user: None,
            user_menu: Vec::new(),
            login_url: String::new(),
            register_url: String::new(),
            navbar_background_color_mode: String::new(),
            navbar_background_color: String::new(),
            navbar_text_color: String::new(),
            favicon_url: String::new(),
            logo_image_url: String::new(),
            logo_raw_html: String::new(),
            logo_redirect_url: String::new(),
        }
    }
}

impl DashboardModel for Dashboard {
    fn content(&self) -> &str {
        &self.content
    }

    fn menu_items(&self) -> &[MenuItem] {
        &self.menu_items
    }

    fn quick_access_menu(&self) -> &[MenuItem] {
        &self.quick_access_menu
    }

    fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    fn user_menu(&self) -> &[MenuItem] {
        &self.user_menu
    }

    fn login_url(&self) -> &str {
        &self.login_url
    }

    fn register_url(&self) -> &str {
        &self.register_url
    }

    fn navbar_background_color_mode(&self) -> &str {
        &self.navbar_background_color_mode
    }

    fn navbar_background_color(&self) -> &str {
        &self.navbar_background_color
    }

    fn navbar_text_color(&self) -> &str {
        &self.navbar_text_color
    }

    fn favicon_url(&self) -> &str {
        &self.favicon_url
    }

    fn logo_image_url(&self) -> &str {
        &self.logo_image_url
    }

    fn logo_raw_html(&self) -> &str {
        &self.logo_raw_html
    }

    fn logo_redirect_url(&self) -> &str {
        &self.logo_redirect_url
    }

    fn title(&self) -> &str {
        if self.title.trim().is_empty() {
            DEFAULT_TITLE
        } else {
            &self.title
        }
    }

    fn footer_html(&self) -> &str {
        &self.footer_html
    }
}

/// Errors from loading a dashboard model file.
#[derive(Debug)]
pub enum ModelLoadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for ModelLoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read dashboard model `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid dashboard model `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ModelLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Loads a dashboard model from a JSON file.
///
/// Missing fields take their defaults, so `{}` is a valid (empty) dashboard.
pub fn load_dashboard(path: impl AsRef<Path>) -> Result<Dashboard, ModelLoadError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| ModelLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ModelLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{Dashboard, DashboardModel, MenuItem};

    #[test]
    fn blank_title_falls_back_to_default() {
        let dashboard = Dashboard {
            title: "  ".to_string(),
            ..Dashboard::default()
        };
        assert_eq!(dashboard.title(), "Dashboard");
    }

    #[test]
    fn partial_json_uses_defaults() {
        let dashboard: Dashboard = serde_json::from_str(
            r#"{"menu_items":[{"title":"Home","url":"/","active":true}]}"#,
        )
        .expect("partial model should parse");
        assert_eq!(dashboard.menu_items(), &[MenuItem::new("Home", "/").active()]);
        assert!(dashboard.user().is_none());
        assert_eq!(dashboard.title(), "Dashboard");
    }
}
