//! Bootstrap 5 theme.

use crate::model::atom::{
    Atom, ATOM_BUTTON, ATOM_CONTENT, ATOM_FOOTER, ATOM_HEADER, ATOM_IMAGE, ATOM_LINK, ATOM_MENU,
    ATOM_MENU_ITEM,
};
use crate::render::handlers::{class_attr, header_style, icon_markup, inline_text, is_active};
use crate::render::html::{attr, classes, escape_html};
use crate::render::{RenderContext, RenderResult};
use crate::theme::{AssetLink, AssetScript, BaseTheme, DarkModeMarker};

pub const THEME_NAME: &str = "bootstrap";

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_ICONS_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css";
const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";

/// Builds the Bootstrap theme.
pub fn theme() -> BaseTheme {
    BaseTheme::new(THEME_NAME)
        .with_css(AssetLink::new(BOOTSTRAP_CSS))
        .with_css(AssetLink::new(BOOTSTRAP_ICONS_CSS))
        .with_script(AssetScript::new(BOOTSTRAP_JS))
        .with_dark_mode_marker(DarkModeMarker::Attribute {
            name: "data-bs-theme".to_string(),
            value: "dark".to_string(),
        })
        .with_layout_class("d-flex flex-column min-vh-100")
        .with_handler(ATOM_HEADER, render_header)
        .with_handler(ATOM_CONTENT, render_content)
        .with_handler(ATOM_FOOTER, render_footer)
        .with_handler(ATOM_MENU, render_menu)
        .with_handler(ATOM_MENU_ITEM, render_menu_item)
        .with_handler(ATOM_LINK, render_link)
        .with_handler(ATOM_BUTTON, render_button)
        .with_handler(ATOM_IMAGE, render_image)
}

fn render_header(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    let scheme = match atom.get("background_mode") {
        "dark" => "navbar-dark bg-dark",
        _ => "navbar-light bg-light",
    };
    Ok(format!(
        "<header><nav{}{}><div class=\"container-fluid\">{}</div></nav></header>",
        class_attr(&["navbar", "navbar-expand-lg", scheme], atom),
        header_style(atom),
        ctx.render_children(atom)?
    ))
}

fn render_content(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    Ok(format!(
        "<main{}>{}</main>",
        class_attr(&["container-fluid", "flex-grow-1", "py-4"], atom),
        ctx.render_children(atom)?
    ))
}

fn render_footer(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    Ok(format!(
        "<footer{}><div class=\"container-fluid\">{}</div></footer>",
        class_attr(&["footer", "mt-auto", "py-3", "border-top"], atom),
        ctx.render_children(atom)?
    ))
}

fn render_menu(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    let tokens: &[&str] = match atom.get("variant") {
        "submenu" | "user" => &["dropdown-menu"],
        "quick_access" => &["navbar-nav", "ms-auto"],
        _ => &["navbar-nav", "me-auto"],
    };
    Ok(format!(
        "<ul{}>{}</ul>",
        class_attr(tokens, atom),
        ctx.render_children(atom)?
    ))
}

fn render_menu_item(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    let active = if is_active(atom) { "active" } else { "" };
    let label = format!("{}{}", icon_markup(atom), escape_html(atom.get("text")));
    let has_submenu = atom.find_child(ATOM_MENU).is_some();
    let (item_class, link_class) = if has_submenu {
        ("dropdown", "dropdown-toggle")
    } else {
        ("", "")
    };
    let toggle = if has_submenu {
        " role=\"button\" data-bs-toggle=\"dropdown\" aria-expanded=\"false\""
    } else {
        ""
    };
    let href = match atom.get("href") {
        "" => "#",
        href => href,
    };
    Ok(format!(
        "<li{}><a{}{}{toggle}>{label}</a>{}</li>",
        class_attr(&["nav-item", item_class], atom),
        attr("class", &classes(&["nav-link", link_class, active])),
        attr("href", href),
        ctx.render_children(atom)?
    ))
}

fn render_link(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    let class = if atom.get("role") == "brand" {
        "navbar-brand"
    } else {
        "nav-link"
    };
    Ok(format!(
        "<a{}{}>{}{}</a>",
        class_attr(&[class], atom),
        attr("href", atom.get("href")),
        inline_text(atom),
        ctx.render_children(atom)?
    ))
}

fn render_button(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    let variant = match atom.get("variant") {
        "" => "btn-primary".to_string(),
        variant => format!("btn-{variant}"),
    };
    Ok(format!(
        "<button type=\"button\"{}{}>{}{}</button>",
        class_attr(&["btn", variant.as_str()], atom),
        attr("data-bs-target", atom.get("target")),
        inline_text(atom),
        ctx.render_children(atom)?
    ))
}

fn render_image(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    Ok(format!(
        "<img{}{}{}>{}",
        class_attr(&["img-fluid"], atom),
        attr("src", atom.get("src")),
        attr("alt", atom.get("alt")),
        ctx.render_children(atom)?
    ))
}
