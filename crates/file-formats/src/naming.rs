//! Display-name helpers

/// Returns the filename with its final extension stripped, for display.
///
/// A name with no extension is returned unchanged; only the last dot
/// segment is removed ("a.tar.gz" displays as "a.tar").
pub fn display_name(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < name.len() => &name[..idx],
        _ => name,
    }
}

/// Returns the lowercased final extension including the dot, if any
pub fn file_extension(name: &str) -> Option<String> {
    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() => Some(name[idx..].to_lowercase()),
        _ => None,
    }
}
