// templates/paths.rs

/// Percent-encode a slug or id so it stays one path segment in a link.
pub fn segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// Element id for `prefix` + `id`, usable unescaped in a `#` selector.
pub fn dom_id(prefix: &str, id: &str) -> String {
    let safe: String = id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("{prefix}-{safe}")
}
