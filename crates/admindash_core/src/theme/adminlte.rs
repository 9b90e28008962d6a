//! AdminLTE 3 theme.
//!
//! Wraps a `BaseTheme` and overrides only the dashboard layout: the main
//! menu moves from the top navbar into the left sidebar.

use crate::model::atom::{
    Atom, ATOM_CONTENT, ATOM_FOOTER, ATOM_HEADER, ATOM_LINK, ATOM_MENU, ATOM_MENU_ITEM,
};
use crate::model::dashboard::DashboardModel;
use crate::render::handlers::{class_attr, header_style, icon_markup, is_active};
use crate::render::html::{attr, classes, escape_html};
use crate::render::page::render_page;
use crate::render::{DashboardSections, RenderContext, RenderResult};
use crate::theme::{AssetLink, AssetScript, BaseTheme, DarkModeMarker, Theme};
use crate::transform::MENU_VARIANT_MAIN;

pub const THEME_NAME: &str = "adminlte";

const ADMINLTE_CSS: &str =
    "https://cdn.jsdelivr.net/npm/admin-lte@3.2.0/dist/css/adminlte.min.css";
const FONTAWESOME_CSS: &str =
    "https://cdn.jsdelivr.net/npm/@fortawesome/fontawesome-free@6.5.2/css/all.min.css";
const JQUERY_JS: &str = "https://cdn.jsdelivr.net/npm/jquery@3.7.1/dist/jquery.min.js";
const BOOTSTRAP4_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@4.6.2/dist/js/bootstrap.bundle.min.js";
const ADMINLTE_JS: &str = "https://cdn.jsdelivr.net/npm/admin-lte@3.2.0/dist/js/adminlte.min.js";

/// AdminLTE skin with a sidebar layout.
#[derive(Debug, Clone)]
pub struct AdminLteTheme {
    base: BaseTheme,
}

impl AdminLteTheme {
    pub fn new() -> Self {
        let base = BaseTheme::new(THEME_NAME)
            .with_css(AssetLink::new(FONTAWESOME_CSS))
            .with_css(AssetLink::new(ADMINLTE_CSS))
            .with_script(AssetScript::new(JQUERY_JS))
            .with_script(AssetScript::new(BOOTSTRAP4_JS))
            .with_script(AssetScript::new(ADMINLTE_JS))
            .with_dark_mode_marker(DarkModeMarker::Class("dark-mode".to_string()))
            .with_body_class("hold-transition sidebar-mini layout-fixed")
            .with_layout_class("wrapper")
            .with_handler(ATOM_HEADER, render_header)
            .with_handler(ATOM_CONTENT, render_content)
            .with_handler(ATOM_FOOTER, render_footer)
            .with_handler(ATOM_MENU, render_menu)
            .with_handler(ATOM_MENU_ITEM, render_menu_item);
        Self { base }
    }

    fn render_sidebar(&self, header: &Atom) -> RenderResult<String> {
        let brand = match header.children().iter().find(|child| is_brand(child)) {
            Some(logo) => self.render_atom(logo)?,
            None => String::new(),
        };
        let menu = match main_menu(header) {
            Some(menu) => self.render_atom(menu)?,
            None => String::new(),
        };
        Ok(format!(
            "<aside class=\"main-sidebar sidebar-dark-primary elevation-4\">{brand}\
             <div class=\"sidebar\"><nav class=\"mt-2\">{menu}</nav></div></aside>"
        ))
    }
}

impl Default for AdminLteTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for AdminLteTheme {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn css_links(&self, dark_mode: bool) -> Vec<AssetLink> {
        self.base.css_links(dark_mode)
    }

    fn js_scripts(&self) -> Vec<AssetScript> {
        self.base.js_scripts()
    }

    fn custom_css(&self) -> &str {
        self.base.custom_css()
    }

    fn custom_js(&self) -> &str {
        self.base.custom_js()
    }

    fn dark_mode_marker(&self) -> Option<DarkModeMarker> {
        self.base.dark_mode_marker()
    }

    fn body_class(&self) -> &str {
        self.base.body_class()
    }

    fn render_atom(&self, atom: &Atom) -> RenderResult<String> {
        self.base.render_atom(atom)
    }

    fn render_dashboard(&self, root: &Atom) -> RenderResult<String> {
        let sections = DashboardSections::from_root(root)?;
        let navbar = self.render_atom(&navbar_only(sections.header))?;
        let sidebar = self.render_sidebar(sections.header)?;
        let content = self.render_atom(sections.content)?;
        let footer = self.render_atom(sections.footer)?;
        Ok(format!(
            "<div{}>{navbar}{sidebar}{content}{footer}</div>",
            attr("class", self.base.layout_class())
        ))
    }

    fn render_page(&self, content: &str, model: &dyn DashboardModel) -> RenderResult<String> {
        render_page(self, content, model)
    }
}

fn is_brand(atom: &Atom) -> bool {
    atom.kind() == ATOM_LINK && atom.get("role") == "brand"
}

fn is_main_menu(atom: &Atom) -> bool {
    atom.kind() == ATOM_MENU && atom.get("variant") == MENU_VARIANT_MAIN
}

fn main_menu(header: &Atom) -> Option<&Atom> {
    header.children().iter().find(|child| is_main_menu(child))
}

/// Copy of `header` without the brand link and main menu, which the sidebar
/// renders instead. The source tree is left untouched.
fn navbar_only(header: &Atom) -> Atom {
    let mut navbar = Atom::new(header.kind());
    for (key, value) in header.properties() {
        navbar.set(key, value);
    }
    for child in header.children() {
        if !is_brand(child) && !is_main_menu(child) {
            navbar.add_child(child.clone());
        }
    }
    navbar
}

fn render_header(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    let scheme = match atom.get("background_mode") {
        "dark" => "navbar-dark",
        _ => "navbar-white navbar-light",
    };
    Ok(format!(
        "<nav{}{}><ul class=\"navbar-nav\"><li class=\"nav-item\">\
         <a class=\"nav-link\" data-widget=\"pushmenu\" href=\"#\" role=\"button\">\
         <i class=\"fas fa-bars\"></i></a></li></ul>{}</nav>",
        class_attr(&["main-header", "navbar", "navbar-expand", scheme], atom),
        header_style(atom),
        ctx.render_children(atom)?
    ))
}

fn render_content(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    Ok(format!(
        "<div{}><section class=\"content\"><div class=\"container-fluid\">{}</div></section></div>",
        class_attr(&["content-wrapper"], atom),
        ctx.render_children(atom)?
    ))
}

fn render_footer(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    Ok(format!(
        "<footer{}>{}</footer>",
        class_attr(&["main-footer"], atom),
        ctx.render_children(atom)?
    ))
}

fn render_menu(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    let variant = atom.get("variant");
    let tokens: &[&str] = match variant {
        "main" => &["nav", "nav-pills", "nav-sidebar", "flex-column"],
        "submenu" => &["nav", "nav-treeview"],
        "user" => &["dropdown-menu", "dropdown-menu-right"],
        _ => &["navbar-nav", "ml-auto"],
    };
    let widget = if variant == MENU_VARIANT_MAIN {
        " data-widget=\"treeview\" role=\"menu\""
    } else {
        ""
    };
    Ok(format!(
        "<ul{}{widget}>{}</ul>",
        class_attr(tokens, atom),
        ctx.render_children(atom)?
    ))
}

fn render_menu_item(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    let active = if is_active(atom) { "active" } else { "" };
    let href = match atom.get("href") {
        "" => "#",
        href => href,
    };
    let icon = match icon_markup(atom) {
        markup if markup.is_empty() => "<i class=\"nav-icon far fa-circle\"></i> ".to_string(),
        markup => markup,
    };
    let caret = if atom.find_child(ATOM_MENU).is_some() {
        "<i class=\"right fas fa-angle-left\"></i>"
    } else {
        ""
    };
    Ok(format!(
        "<li{}><a{}{}>{icon}<p>{}{caret}</p></a>{}</li>",
        class_attr(&["nav-item"], atom),
        attr("class", &classes(&["nav-link", active])),
        attr("href", href),
        escape_html(atom.get("text")),
        ctx.render_children(atom)?
    ))
}

#[cfg(test)]
mod tests {
    use super::AdminLteTheme;
    use crate::model::atom::Atom;
    use crate::theme::Theme;

    fn dashboard() -> Atom {
        let header = Atom::new("header")
            .with_child(
                Atom::new("link")
                    .with_property("href", "/")
                    .with_property("role", "brand")
                    .with_property("text", "Acme"),
            )
            .with_child(
                Atom::new("menu").with_property("variant", "main").with_child(
                    Atom::new("menu_item")
                        .with_property("text", "Home")
                        .with_property("href", "/home"),
                ),
            );
        Atom::new("dashboard")
            .with_child(header)
            .with_child(Atom::new("content"))
            .with_child(Atom::new("footer"))
    }

    #[test]
    fn main_menu_moves_into_sidebar() {
        let html = AdminLteTheme::new()
            .render_dashboard(&dashboard())
            .expect("render should succeed");
        let sidebar_start = html.find("main-sidebar").expect("sidebar present");
        let menu_at = html.find("href=\"/home\"").expect("menu link present");
        assert!(menu_at > sidebar_start);
        assert_eq!(html.matches("href=\"/home\"").count(), 1);
        assert!(html.starts_with("<div class=\"wrapper\">"));
    }

    #[test]
    fn brand_after_other_links_still_reaches_sidebar() {
        let header = Atom::new("header")
            .with_child(
                Atom::new("link")
                    .with_property("href", "/help")
                    .with_property("text", "Help"),
            )
            .with_child(
                Atom::new("link")
                    .with_property("href", "/")
                    .with_property("role", "brand")
                    .with_property("text", "ACMEBRAND"),
            );
        let root = Atom::new("dashboard")
            .with_child(header)
            .with_child(Atom::new("content"))
            .with_child(Atom::new("footer"));

        let html = AdminLteTheme::new()
            .render_dashboard(&root)
            .expect("render should succeed");
        let sidebar_start = html.find("main-sidebar").expect("sidebar present");
        let brand_at = html.find("ACMEBRAND").expect("brand rendered");
        assert!(brand_at > sidebar_start);
        assert_eq!(html.matches("ACMEBRAND").count(), 1);
        assert!(html.contains("href=\"/help\""));
    }

    #[test]
    fn layout_override_leaves_tree_untouched() {
        let tree = dashboard();
        let before = tree.clone();
        AdminLteTheme::new()
            .render_dashboard(&tree)
            .expect("render should succeed");
        assert_eq!(tree, before);
    }
}
