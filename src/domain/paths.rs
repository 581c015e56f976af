//! Rules for site-relative navigation paths.

use super::ConfigError;

/// Check that `path` is a usable site-relative target for the entry `label`.
///
/// A valid target is non-empty, starts with a single '/', and contains no
/// whitespace or control characters. Fragments (`/favorites/#ulm`) and
/// non-ASCII segments (`/面试/`) are allowed.
pub fn validate_link(label: &str, path: &str) -> Result<(), ConfigError> {
    let malformed = path.is_empty()
        || !path.starts_with('/')
        || path.starts_with("//")
        || path.chars().any(|c| c.is_whitespace() || c.is_control());

    if malformed {
        return Err(ConfigError::invalid_path(label, path));
    }
    Ok(())
}

/// Ensure a page path starts with '/'.
pub fn normalize(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// Whether `page` lies under the link `target`.
///
/// Directory-style targets (ending in '/') cover every page beneath them,
/// other targets only match exactly. A fragment on the target is ignored.
pub fn covers(target: &str, page: &str) -> bool {
    let target = target.split('#').next().unwrap_or(target);
    if target.ends_with('/') {
        page.starts_with(target)
    } else {
        page == target
    }
}
