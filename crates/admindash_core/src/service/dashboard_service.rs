//! Dashboard rendering service.
//!
//! # Responsibility
//! - Provide the single entry point from a dashboard model to an HTML page.
//! - Resolve themes through an injected `ThemeRegistry`.
//!
//! # Invariants
//! - A failed render returns an error and never partial HTML.
//! - Logs carry theme names and status only, never model content.

use crate::config::{ConfigError, RenderConfig};
use crate::model::atom::Atom;
use crate::model::dashboard::DashboardModel;
use crate::render::RenderResult;
use crate::theme::{RegistryError, Theme, ThemeRegistry};
use crate::transform::{transform_dashboard, TransformError};
use log::{error, info};
use std::sync::Arc;

/// Use-case service wrapper around a shared theme registry.
#[derive(Clone)]
pub struct DashboardService {
    registry: Arc<ThemeRegistry>,
}

impl DashboardService {
    /// Creates a service using the provided registry.
    pub fn new(registry: Arc<ThemeRegistry>) -> Self {
        Self { registry }
    }

    /// Creates a service over the built-in themes with `bootstrap` as default.
    pub fn with_builtin_themes() -> Result<Self, RegistryError> {
        Ok(Self::new(Arc::new(ThemeRegistry::with_builtin_themes()?)))
    }

    /// Creates a service over the built-in themes with the configured default.
    ///
    /// # Errors
    /// - `Registry` when the built-in themes fail to register.
    /// - `UnknownTheme` when `config.default_theme` is not a built-in theme.
    pub fn from_config(config: &RenderConfig) -> Result<Self, ConfigError> {
        let registry = ThemeRegistry::with_builtin_themes().map_err(ConfigError::Registry)?;
        registry
            .set_default(&config.default_theme)
            .map_err(|source| ConfigError::UnknownTheme {
                name: config.default_theme.clone(),
                source,
            })?;
        Ok(Self::new(Arc::new(registry)))
    }

    pub fn registry(&self) -> &Arc<ThemeRegistry> {
        &self.registry
    }

    /// Builds the theme-agnostic atom tree for `model`.
    pub fn transform(&self, model: &dyn DashboardModel) -> Result<Atom, TransformError> {
        transform_dashboard(model)
    }

    /// Renders `model` into a complete HTML document.
    ///
    /// # Contract
    /// - Empty or unknown `theme_name` renders with the registry default.
    /// - Steps run in order: transform, dashboard body, page shell.
    pub fn render(&self, model: &dyn DashboardModel, theme_name: &str) -> RenderResult<String> {
        let theme = self.registry.get(theme_name);
        let result = render_with(theme.as_ref(), model);
        match &result {
            Ok(html) => info!(
                "event=render_dashboard module=service status=ok theme={} bytes={}",
                theme.name(),
                html.len()
            ),
            Err(err) => error!(
                "event=render_dashboard module=service status=error theme={} error={err}",
                theme.name()
            ),
        }
        result
    }
}

fn render_with(theme: &dyn Theme, model: &dyn DashboardModel) -> RenderResult<String> {
    let root = transform_dashboard(model)?;
    let body = theme.render_dashboard(&root)?;
    theme.render_page(&body, model)
}

#[cfg(test)]
mod tests {
    use super::DashboardService;
    use crate::config::{ConfigError, RenderConfig};
    use crate::model::dashboard::{Dashboard, MenuItem};
    use crate::render::RenderError;
    use crate::transform::TransformError;

    fn sample() -> Dashboard {
        Dashboard {
            title: "Ops".to_string(),
            content: "<p>hello</p>".to_string(),
            menu_items: vec![MenuItem::new("Home", "/")],
            ..Dashboard::default()
        }
    }

    #[test]
    fn render_produces_full_document() {
        let service = DashboardService::with_builtin_themes().expect("built-in themes register");
        let html = service.render(&sample(), "tabler").expect("render should succeed");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Ops</title>"));
        assert!(html.contains("<p>hello</p>"));
        assert!(html.contains("@tabler/core"));
    }

    #[test]
    fn unknown_theme_uses_default() {
        let service = DashboardService::with_builtin_themes().expect("built-in themes register");
        let html = service.render(&sample(), "material").expect("render should succeed");
        assert!(html.contains("bootstrap@5"));
    }

    #[test]
    fn transform_failure_surfaces_as_render_error() {
        let mut model = sample();
        model.menu_items.push(MenuItem::new("  ", "/blank"));
        let err = DashboardService::with_builtin_themes()
            .expect("built-in themes register")
            .render(&model, "")
            .expect_err("blank menu title must fail");
        assert!(matches!(
            err,
            RenderError::Transform(TransformError::Section { section: "header", .. })
        ));
    }

    #[test]
    fn from_config_applies_default_theme() {
        let config = RenderConfig {
            default_theme: "adminlte".to_string(),
            ..RenderConfig::default()
        };
        let service = DashboardService::from_config(&config).expect("config should apply");
        assert_eq!(service.registry().default_name(), "adminlte");

        let bad = RenderConfig {
            default_theme: "material".to_string(),
            ..RenderConfig::default()
        };
        let err = DashboardService::from_config(&bad)
            .err()
            .expect("unknown theme must fail");
        assert!(matches!(err, ConfigError::UnknownTheme { .. }));
    }
}
