//! Composable default theme.
//!
//! Built-in themes construct a `BaseTheme`, swap in their own handlers and
//! assets, and either use it directly or wrap it to override single
//! operations.

use crate::model::atom::Atom;
use crate::model::dashboard::DashboardModel;
use crate::render::html::attr;
use crate::render::page::render_page;
use crate::render::{AtomRenderer, DashboardSections, RenderFn, RenderResult};
use crate::theme::{AssetLink, AssetScript, DarkModeMarker, Theme};

/// Data-driven theme: assets, body decoration, and a handler table.
#[derive(Debug, Clone)]
pub struct BaseTheme {
    name: String,
    css_links: Vec<AssetLink>,
    dark_css_links: Vec<AssetLink>,
    js_scripts: Vec<AssetScript>,
    custom_css: String,
    custom_js: String,
    dark_mode_marker: Option<DarkModeMarker>,
    body_class: String,
    layout_class: String,
    renderer: AtomRenderer,
}

impl BaseTheme {
    /// Theme with neutral handlers and no assets.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            css_links: Vec::new(),
            dark_css_links: Vec::new(),
            js_scripts: Vec::new(),
            custom_css: String::new(),
            custom_js: String::new(),
            dark_mode_marker: None,
            body_class: String::new(),
            layout_class: "dashboard".to_string(),
            renderer: AtomRenderer::base(),
        }
    }

    pub fn with_css(mut self, link: AssetLink) -> Self {
        self.css_links.push(link);
        self
    }

    /// Stylesheet appended only in dark mode.
    pub fn with_dark_css(mut self, link: AssetLink) -> Self {
        self.dark_css_links.push(link);
        self
    }

    pub fn with_script(mut self, script: AssetScript) -> Self {
        self.js_scripts.push(script);
        self
    }

    pub fn with_custom_css(mut self, css: impl Into<String>) -> Self {
        self.custom_css = css.into();
        self
    }

    pub fn with_custom_js(mut self, js: impl Into<String>) -> Self {
        self.custom_js = js.into();
        self
    }

    pub fn with_dark_mode_marker(mut self, marker: DarkModeMarker) -> Self {
        self.dark_mode_marker = Some(marker);
        self
    }

    pub fn with_body_class(mut self, class: impl Into<String>) -> Self {
        self.body_class = class.into();
        self
    }

    /// Class of the `div` wrapping the rendered dashboard sections.
    pub fn with_layout_class(mut self, class: impl Into<String>) -> Self {
        self.layout_class = class.into();
        self
    }

    /// Replaces the handler for one atom type.
    pub fn with_handler(mut self, kind: &str, handler: RenderFn) -> Self {
        self.renderer.set_handler(kind, handler);
        self
    }

    pub fn layout_class(&self) -> &str {
        &self.layout_class
    }
}

impl Theme for BaseTheme {
    fn name(&self) -> &str {
        &self.name
    }

    fn css_links(&self, dark_mode: bool) -> Vec<AssetLink> {
        let mut links = self.css_links.clone();
        if dark_mode {
            links.extend(self.dark_css_links.iter().cloned());
        }
        links
    }

    fn js_scripts(&self) -> Vec<AssetScript> {
        self.js_scripts.clone()
    }

    fn custom_css(&self) -> &str {
        &self.custom_css
    }

    fn custom_js(&self) -> &str {
        &self.custom_js
    }

    fn dark_mode_marker(&self) -> Option<DarkModeMarker> {
        self.dark_mode_marker.clone()
    }

    fn body_class(&self) -> &str {
        &self.body_class
    }

    fn render_atom(&self, atom: &Atom) -> RenderResult<String> {
        self.renderer.render(atom)
    }

    fn render_dashboard(&self, root: &Atom) -> RenderResult<String> {
        let sections = DashboardSections::from_root(root)?;
        let header = self.render_atom(sections.header)?;
        let content = self.render_atom(sections.content)?;
        let footer = self.render_atom(sections.footer)?;
        Ok(format!(
            "<div{}>{header}{content}{footer}</div>",
            attr("class", &self.layout_class)
        ))
    }

    fn render_page(&self, content: &str, model: &dyn DashboardModel) -> RenderResult<String> {
        render_page(self, content, model)
    }
}

#[cfg(test)]
mod tests {
    use super::BaseTheme;
    use crate::theme::{AssetLink, Theme};

    #[test]
    fn dark_links_are_appended_only_in_dark_mode() {
        let theme = BaseTheme::new("plain")
            .with_css(AssetLink::new("/light.css"))
            .with_dark_css(AssetLink::new("/dark.css"));
        assert_eq!(theme.css_links(false).len(), 1);
        let dark = theme.css_links(true);
        assert_eq!(dark.len(), 2);
        assert_eq!(dark[1].href, "/dark.css");
    }
}
