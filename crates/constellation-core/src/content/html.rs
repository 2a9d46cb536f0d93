use std::borrow::Cow;

/// Escape text for element content and double-quoted attributes.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Only allow link targets that cannot run script.
pub fn safe_href(href: &str) -> &str {
    let h = href.trim();
    let lower = h.to_ascii_lowercase();
    let allowed = ["http://", "https://", "mailto:", "tel:", "/", "#"]
        .iter()
        .any(|p| lower.starts_with(p));
    if allowed {
        h
    } else {
        "#"
    }
}

#[inline]
pub fn is_external(href: &str) -> bool {
    let lower = href.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
