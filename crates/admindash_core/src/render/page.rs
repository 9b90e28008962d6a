//! Page assembler.
//!
//! # Invariants
//! - Document order is fixed: doctype, `<html>`, `<head>` (charset, viewport,
//!   title, favicon, CSS links, custom CSS), `<body>` (body markup, JS scripts,
//!   custom JS).
//! - Dark mode is decided from the model navbar mode and selects which CSS
//!   link set the theme contributes.

use crate::model::dashboard::DashboardModel;
use crate::render::html::{attr, classes, escape_html};
use crate::render::RenderResult;
use crate::theme::{AssetLink, AssetScript, DarkModeMarker, Theme};

/// Everything the assembler needs besides the body markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageAssets {
    pub title: String,
    pub favicon_url: Option<String>,
    pub css_links: Vec<AssetLink>,
    pub custom_css: String,
    pub js_scripts: Vec<AssetScript>,
    pub custom_js: String,
    pub body_class: String,
    /// Applied to `<body>` only when `dark_mode` is set.
    pub dark_mode_marker: Option<DarkModeMarker>,
    pub dark_mode: bool,
}

/// Returns whether the model asks for a dark navbar.
pub fn is_dark_mode(model: &dyn DashboardModel) -> bool {
    model
        .navbar_background_color_mode()
        .trim()
        .eq_ignore_ascii_case("dark")
}

/// Collects theme and model assets for one page.
pub fn page_assets<T: Theme + ?Sized>(theme: &T, model: &dyn DashboardModel) -> PageAssets {
    let dark_mode = is_dark_mode(model);
    let favicon_url = match model.favicon_url().trim() {
        "" => None,
        url => Some(url.to_string()),
    };
    PageAssets {
        title: model.title().to_string(),
        favicon_url,
        css_links: theme.css_links(dark_mode),
        custom_css: theme.custom_css().to_string(),
        js_scripts: theme.js_scripts(),
        custom_js: theme.custom_js().to_string(),
        body_class: theme.body_class().to_string(),
        dark_mode_marker: theme.dark_mode_marker(),
        dark_mode,
    }
}

/// Wraps pre-rendered content into a full document using `theme` assets.
pub fn render_page<T: Theme + ?Sized>(
    theme: &T,
    content: &str,
    model: &dyn DashboardModel,
) -> RenderResult<String> {
    Ok(assemble_page(content, &page_assets(theme, model)))
}

/// Emits a complete HTML5 document around `body`.
pub fn assemble_page(body: &str, assets: &PageAssets) -> String {
    let mut out = String::with_capacity(body.len() + 1024);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(&assets.title)));
    if let Some(favicon) = &assets.favicon_url {
        out.push_str(&format!("<link rel=\"icon\"{}>\n", attr("href", favicon)));
    }
    for link in &assets.css_links {
        out.push_str(&format!(
            "<link rel=\"stylesheet\"{}{}{}>\n",
            attr("href", &link.href),
            attr("integrity", link.integrity.as_deref().unwrap_or("")),
            attr("crossorigin", link.crossorigin.as_deref().unwrap_or(""))
        ));
    }
    if !assets.custom_css.is_empty() {
        out.push_str(&format!("<style>{}</style>\n", assets.custom_css));
    }
    out.push_str("</head>\n");

    out.push_str(&format!("<body{}>\n", body_attributes(assets)));
    out.push_str(body);
    out.push('\n');
    for script in &assets.js_scripts {
        out.push_str(&format!(
            "<script{}{}{}></script>\n",
            attr("src", &script.src),
            attr("integrity", script.integrity.as_deref().unwrap_or("")),
            if script.defer { " defer" } else { "" }
        ));
    }
    if !assets.custom_js.is_empty() {
        out.push_str(&format!("<script>{}</script>\n", assets.custom_js));
    }
    out.push_str("</body>\n</html>\n");
    out
}

fn body_attributes(assets: &PageAssets) -> String {
    let marker = if assets.dark_mode {
        assets.dark_mode_marker.as_ref()
    } else {
        None
    };
    let marker_class = match marker {
        Some(DarkModeMarker::Class(class)) => class.as_str(),
        _ => "",
    };
    let mut out = attr("class", &classes(&[assets.body_class.as_str(), marker_class]));
    if let Some(DarkModeMarker::Attribute { name, value }) = marker {
        out.push_str(&attr(name, value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{assemble_page, PageAssets};
    use crate::theme::{AssetLink, AssetScript, DarkModeMarker};

    fn assets() -> PageAssets {
        PageAssets {
            title: "Ops & Admin".to_string(),
            favicon_url: Some("/favicon.ico".to_string()),
            css_links: vec![AssetLink::new("/a.css"), AssetLink::new("/b.css")],
            custom_css: ".x{}".to_string(),
            js_scripts: vec![AssetScript::new("/a.js")],
            custom_js: "init();".to_string(),
            body_class: "layout".to_string(),
            dark_mode_marker: Some(DarkModeMarker::Class("dark-mode".to_string())),
            dark_mode: false,
        }
    }

    #[test]
    fn emits_sections_in_fixed_order() {
        let html = assemble_page("<main>BODY</main>", &assets());
        let order = [
            "<!DOCTYPE html>",
            "<html",
            "<head>",
            "<meta charset=\"utf-8\">",
            "<meta name=\"viewport\"",
            "<title>Ops &amp; Admin</title>",
            "<link rel=\"icon\" href=\"/favicon.ico\">",
            "href=\"/a.css\"",
            "href=\"/b.css\"",
            "<style>.x{}</style>",
            "</head>",
            "<body class=\"layout\">",
            "<main>BODY</main>",
            "<script src=\"/a.js\"></script>",
            "<script>init();</script>",
            "</body>",
            "</html>",
        ];
        let mut cursor = 0;
        for needle in order {
            let found = html[cursor..]
                .find(needle)
                .unwrap_or_else(|| panic!("`{needle}` missing or out of order in:\n{html}"));
            cursor += found + needle.len();
        }
    }

    #[test]
    fn minimal_page_is_emitted_line_by_line() {
        let assets = PageAssets {
            title: "T".to_string(),
            js_scripts: vec![AssetScript::new("/app.js")],
            ..PageAssets::default()
        };
        let expected = "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
            <meta charset=\"utf-8\">\n\
            <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
            <title>T</title>\n\
            </head>\n\
            <body>\n\
            <p>x</p>\n\
            <script src=\"/app.js\"></script>\n\
            </body>\n</html>\n";
        assert_eq!(assemble_page("<p>x</p>", &assets), expected);
    }

    #[test]
    fn dark_marker_applies_only_in_dark_mode() {
        let mut assets = assets();
        assert!(!assemble_page("", &assets).contains("dark-mode"));
        assets.dark_mode = true;
        assert!(assemble_page("", &assets).contains("<body class=\"layout dark-mode\">"));
    }

    #[test]
    fn optional_head_entries_are_omitted() {
        let html = assemble_page("", &PageAssets::default());
        assert!(!html.contains("rel=\"icon\""));
        assert!(!html.contains("<style>"));
        assert!(html.contains("<body>"));
    }
}
