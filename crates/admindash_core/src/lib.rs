//! Core library for rendering admin dashboards to HTML.
//! A dashboard model is transformed into a theme-agnostic Atom tree, which a
//! registered theme renders into a complete page.

pub mod config;
pub mod logging;
pub mod model;
pub mod render;
pub mod service;
pub mod theme;
pub mod transform;

pub use config::{ConfigError, RenderConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::atom::{Atom, AtomValidationError};
pub use model::dashboard::{
    load_dashboard, Dashboard, DashboardModel, MenuItem, ModelLoadError, User,
};
pub use render::{AtomRenderer, RenderError, RenderResult};
pub use service::dashboard_service::DashboardService;
pub use theme::{BaseTheme, RegistryError, Theme, ThemeRegistry};
pub use transform::{transform_dashboard, TransformError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
