// URL path helpers used by API actions.

use url::form_urlencoded;

/// Escapes a single path segment. `*` is passed through so wildcard
/// segments keep working.
pub fn escape(segment: &str) -> String {
    if segment == "*" {
        return segment.to_string();
    }
    form_urlencoded::byte_serialize(segment.as_bytes()).collect()
}

/// Joins segments with `/`, dropping blank ones and collapsing repeated
/// slashes.
pub fn pathify<S: AsRef<str>>(segments: &[S]) -> String {
    let joined = segments
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !s.trim().is_empty())
        .collect::<Vec<_>>()
        .join("/");

    let mut path = String::with_capacity(joined.len());
    for c in joined.chars() {
        if c == '/' && path.ends_with('/') {
            continue;
        }
        path.push(c);
    }
    path
}

/// Escapes every non-blank segment and joins them into a path.
pub fn escaped_path<S: AsRef<str>>(segments: &[S]) -> String {
    let escaped: Vec<String> = segments
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !s.trim().is_empty())
        .map(escape)
        .collect();
    pathify(&escaped)
}
