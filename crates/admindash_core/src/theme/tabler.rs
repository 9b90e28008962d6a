//! Tabler theme.

use crate::model::atom::{Atom, ATOM_CONTENT, ATOM_FOOTER, ATOM_HEADER, ATOM_MENU, ATOM_MENU_ITEM};
use crate::render::handlers::{class_attr, header_style, icon_markup, is_active};
use crate::render::html::{attr, escape_html};
use crate::render::{RenderContext, RenderResult};
use crate::theme::{AssetLink, AssetScript, BaseTheme, DarkModeMarker};

pub const THEME_NAME: &str = "tabler";

const TABLER_CSS: &str = "https://cdn.jsdelivr.net/npm/@tabler/core@1.0.0/dist/css/tabler.min.css";
const TABLER_ICONS_CSS: &str =
    "https://cdn.jsdelivr.net/npm/@tabler/icons-webfont@3.19.0/dist/tabler-icons.min.css";
const TABLER_JS: &str = "https://cdn.jsdelivr.net/npm/@tabler/core@1.0.0/dist/js/tabler.min.js";

pub fn theme() -> BaseTheme {
    BaseTheme::new(THEME_NAME)
        .with_css(AssetLink::new(TABLER_CSS))
        .with_css(AssetLink::new(TABLER_ICONS_CSS))
        .with_script(AssetScript::new(TABLER_JS).deferred())
        .with_dark_mode_marker(DarkModeMarker::Attribute {
            name: "data-bs-theme".to_string(),
            value: "dark".to_string(),
        })
        .with_layout_class("page")
        .with_handler(ATOM_HEADER, render_header)
        .with_handler(ATOM_CONTENT, render_content)
        .with_handler(ATOM_FOOTER, render_footer)
        .with_handler(ATOM_MENU, render_menu)
        .with_handler(ATOM_MENU_ITEM, render_menu_item)
}

fn render_header(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    let theme_attr = match atom.get("background_mode") {
        "dark" => " data-bs-theme=\"dark\"",
        _ => "",
    };
    Ok(format!(
        "<header{}{}{theme_attr}><div class=\"container-xl\">{}</div></header>",
        class_attr(&["navbar", "navbar-expand-md", "d-print-none"], atom),
        header_style(atom),
        ctx.render_children(atom)?
    ))
}

fn render_content(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    Ok(format!(
        "<div class=\"page-wrapper\"><div{}><div class=\"container-xl\">{}</div></div></div>",
        class_attr(&["page-body"], atom),
        ctx.render_children(atom)?
    ))
}

fn render_footer(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    Ok(format!(
        "<footer{}><div class=\"container-xl\">{}</div></footer>",
        class_attr(&["footer", "footer-transparent", "d-print-none"], atom),
        ctx.render_children(atom)?
    ))
}

fn render_menu(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    let tokens: &[&str] = match atom.get("variant") {
        "submenu" | "user" => &["dropdown-menu"],
        _ => &["navbar-nav"],
    };
    Ok(format!(
        "<ul{}>{}</ul>",
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
        markup if markup.is_empty() => markup,
        markup => format!("<span class=\"nav-link-icon\">{markup}</span>"),
    };
    Ok(format!(
        "<li{}><a class=\"nav-link\"{}>{icon}<span class=\"nav-link-title\">{}</span></a>{}</li>",
        class_attr(&["nav-item", active], atom),
        attr("href", href),
        escape_html(atom.get("text")),
        ctx.render_children(atom)?
    ))
}
