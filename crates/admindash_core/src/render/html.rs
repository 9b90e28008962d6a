//! Small markup helpers shared by every theme.

use once_cell::sync::Lazy;
use regex::Regex;

static CLASS_UNSAFE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9_-]+").expect("valid class sanitizer regex"));

static CSS_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:#[0-9a-fA-F]{3,8}|[a-zA-Z]+|(?:rgb|rgba|hsl|hsla)\([0-9.,%\s]+\))$")
        .expect("valid css color regex")
});

/// Escapes text for element content and double-quoted attribute values.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Formats ` name="value"` with an escaped value, or nothing when empty.
pub fn attr(name: &str, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!(" {name}=\"{}\"", escape_html(value))
    }
}

/// Joins non-empty class tokens with single spaces.
pub fn classes(tokens: &[&str]) -> String {
    tokens
        .iter()
        .map(|token| token.trim())
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Turns an arbitrary atom type name into a CSS class hook, `atom-<name>`.
pub fn class_hook(kind: &str) -> String {
    let lowered = kind.trim().to_ascii_lowercase();
    let sanitized = CLASS_UNSAFE_RE.replace_all(&lowered, "-");
    let trimmed = sanitized.trim_matches('-');
    if trimmed.is_empty() {
        "atom-unknown".to_string()
    } else {
        format!("atom-{trimmed}")
    }
}

/// Returns whether `value` is a hex, named, or functional CSS color.
pub fn is_css_color(value: &str) -> bool {
    CSS_COLOR_RE.is_match(value)
}

/// Builds an inline `style` value for navbar color properties.
///
/// Values that are not plain CSS colors are dropped.
pub fn color_style(background: &str, text: &str) -> String {
    let mut style = String::new();
    let background = background.trim();
    if is_css_color(background) {
        style.push_str(&format!("background-color:{background};"));
    }
    let text = text.trim();
    if is_css_color(text) {
        style.push_str(&format!("color:{text};"));
    }
    style
}
