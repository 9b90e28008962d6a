//! Theme-neutral atom handlers.
//!
//! Themes start from [`install_base`] and replace the handlers whose markup
//! they want to shape. Every handler renders children through the context.

use crate::model::atom::{
    Atom, ATOM_BUTTON, ATOM_CONTAINER, ATOM_CONTENT, ATOM_FOOTER, ATOM_HEADER, ATOM_IMAGE,
    ATOM_LINK, ATOM_MENU, ATOM_MENU_ITEM, ATOM_TEXT, ATOM_USER_INFO, ATOM_USER_MENU,
};
use crate::render::dispatch::{AtomRenderer, RenderContext};
use crate::render::html::{attr, class_hook, classes, color_style, escape_html};
use crate::render::RenderResult;

/// Registers the neutral handler for every built-in atom type.
pub fn install_base(renderer: AtomRenderer) -> AtomRenderer {
    renderer
        .with_handler(ATOM_CONTAINER, render_container)
        .with_handler(ATOM_HEADER, render_header)
        .with_handler(ATOM_CONTENT, render_content)
        .with_handler(ATOM_FOOTER, render_footer)
        .with_handler(ATOM_MENU, render_menu)
        .with_handler(ATOM_MENU_ITEM, render_menu_item)
        .with_handler(ATOM_LINK, render_link)
        .with_handler(ATOM_BUTTON, render_button)
        .with_handler(ATOM_IMAGE, render_image)
        .with_handler(ATOM_TEXT, render_text)
        .with_handler(ATOM_USER_MENU, render_user_menu)
        .with_handler(ATOM_USER_INFO, render_user_info)
}

/// Fallback for atom types without a handler: a `div` tagged with the type
/// name as a styling hook.
pub fn render_unknown(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    Ok(format!(
        "<div class=\"{}\"{}>{}</div>",
        class_hook(atom.kind()),
        attr("data-atom-type", atom.kind()),
        ctx.render_children(atom)?
    ))
}

/// `class` attribute combining theme tokens with the atom's `class` property.
pub fn class_attr(base: &[&str], atom: &Atom) -> String {
    let mut tokens = base.to_vec();
    tokens.push(atom.get("class"));
    attr("class", &classes(&tokens))
}

/// Escaped `text` property, or trusted raw markup from `html`.
pub fn inline_text(atom: &Atom) -> String {
    if atom.has("html") {
        atom.get("html").to_string()
    } else {
        escape_html(atom.get("text"))
    }
}

/// Optional leading icon element for `icon` properties.
pub fn icon_markup(atom: &Atom) -> String {
    match atom.get("icon") {
        "" => String::new(),
        icon => format!("<i{}></i> ", attr("class", icon)),
    }
}

/// Whether the atom carries `active="true"`.
pub fn is_active(atom: &Atom) -> bool {
    atom.get("active") == "true"
}

/// Navbar inline colors from header properties.
pub fn header_style(atom: &Atom) -> String {
    attr(
        "style",
        &color_style(atom.get("background_color"), atom.get("text_color")),
    )
}

fn render_container(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    let role = atom.get("role");
    let role_class = if role.is_empty() {
        String::new()
    } else {
        format!("container-{role}")
    };
    Ok(format!(
        "<div{}>{}</div>",
        class_attr(&["container", role_class.as_str()], atom),
        ctx.render_children(atom)?
    ))
}

fn render_header(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    let mode = atom.get("background_mode");
    let mode_class = if mode.is_empty() {
        String::new()
    } else {
        format!("header-{mode}")
    };
    Ok(format!(
        "<header{}{}><nav class=\"navbar\">{}</nav></header>",
        class_attr(&["header", mode_class.as_str()], atom),
        header_style(atom),
        ctx.render_children(atom)?
    ))
}

fn render_content(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    Ok(format!(
        "<main{}>{}</main>",
        class_attr(&["content"], atom),
        ctx.render_children(atom)?
    ))
}

fn render_footer(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    Ok(format!(
        "<footer{}>{}</footer>",
        class_attr(&["footer"], atom),
        ctx.render_children(atom)?
    ))
}

fn render_menu(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    let variant = match atom.get("variant") {
        "" => String::new(),
        variant => format!("menu-{variant}"),
    };
    Ok(format!(
        "<ul{}>{}</ul>",
        class_attr(&["menu", variant.as_str()], atom),
        ctx.render_children(atom)?
    ))
}

fn render_menu_item(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    let label = format!("{}{}", icon_markup(atom), escape_html(atom.get("text")));
    let entry = if atom.has("href") {
        format!("<a{}>{label}</a>", attr("href", atom.get("href")))
    } else {
        format!("<span>{label}</span>")
    };
    let active = if is_active(atom) { "active" } else { "" };
    Ok(format!(
        "<li{}>{entry}{}</li>",
        class_attr(&["menu-item", active], atom),
        ctx.render_children(atom)?
    ))
}

fn render_link(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    Ok(format!(
        "<a{}{}>{}{}</a>",
        attr("href", atom.get("href")),
        class_attr(&[], atom),
        inline_text(atom),
        ctx.render_children(atom)?
    ))
}

fn render_button(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    let button_type = match atom.get("type") {
        "" => "button",
        value => value,
    };
    Ok(format!(
        "<button{}{}{}>{}{}</button>",
        attr("type", button_type),
        class_attr(&["button"], atom),
        attr("data-target", atom.get("target")),
        inline_text(atom),
        ctx.render_children(atom)?
    ))
}

fn render_image(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    Ok(format!(
        "<img{}{}{}>{}",
        attr("src", atom.get("src")),
        attr("alt", atom.get("alt")),
        class_attr(&[], atom),
        ctx.render_children(atom)?
    ))
}

fn render_text(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    Ok(format!("{}{}", inline_text(atom), ctx.render_children(atom)?))
}

fn render_user_menu(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    Ok(format!(
        "<div{}>{}</div>",
        class_attr(&["user-menu"], atom),
        ctx.render_children(atom)?
    ))
}

fn render_user_info(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
    let avatar = match atom.get("avatar") {
        "" => String::new(),
        src => format!(
            "<img class=\"user-avatar\"{}{}>",
            attr("src", src),
            attr("alt", atom.get("name"))
        ),
    };
    let email = match atom.get("email") {
        "" => String::new(),
        email => format!("<span class=\"user-email\">{}</span>", escape_html(email)),
    };
    Ok(format!(
        "<div{}>{avatar}<span class=\"user-name\">{}</span>{email}{}</div>",
        class_attr(&["user-info"], atom),
        escape_html(atom.get("name")),
        ctx.render_children(atom)?
    ))
}

#[cfg(test)]
mod tests {
    use crate::model::atom::Atom;
    use crate::render::dispatch::AtomRenderer;

    #[test]
    fn menu_item_without_href_renders_span() {
        let html = AtomRenderer::base()
            .render(&Atom::new("menu_item").with_property("text", "Reports"))
            .expect("render should succeed");
        assert_eq!(html, "<li class=\"menu-item\"><span>Reports</span></li>");
    }

    #[test]
    fn active_menu_item_is_marked() {
        let html = AtomRenderer::base()
            .render(
                &Atom::new("menu_item")
                    .with_property("text", "Home")
                    .with_property("href", "/")
                    .with_property("active", "true"),
            )
            .expect("render should succeed");
        assert!(html.contains("class=\"menu-item active\""));
        assert!(html.contains("<a href=\"/\">Home</a>"));
    }

    #[test]
    fn text_escapes_plain_values_but_keeps_raw_html() {
        let renderer = AtomRenderer::base();
        let escaped = renderer
            .render(&Atom::new("text").with_property("text", "<b>"))
            .expect("render should succeed");
        assert_eq!(escaped, "&lt;b&gt;");
        let raw = renderer
            .render(&Atom::new("text").with_property("html", "<b>ok</b>"))
            .expect("render should succeed");
        assert_eq!(raw, "<b>ok</b>");
    }

    #[test]
    fn unknown_type_uses_class_hook() {
        let html = AtomRenderer::base()
            .render(&Atom::new("stat_card"))
            .expect("render should succeed");
        assert_eq!(
            html,
            "<div class=\"atom-stat_card\" data-atom-type=\"stat_card\"></div>"
        );
    }
}
