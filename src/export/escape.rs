//! HTML escaping for content embedded in the export template.

/// Escape text for safe embedding in an HTML document.
///
/// Substitutions run in a fixed order, each over the whole string once:
/// `&`, `<`, `>`, `"`, `'`. Ampersand goes first so already-substituted
/// entities are not double-escaped.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
