//! Site suffix stripping and the placeholder-title rule.

/// Suffix YouTube appends to every page title.
pub const SITE_SUFFIX: &str = "- YouTube";

/// Title YouTube serves for videos it can't show yet (premieres, streams that
/// haven't started, ...).
pub const PLACEHOLDER_TITLE: &str = "YouTube";

/// What to do with a cleaned title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleVerdict {
    /// Use this (stripped, trimmed) title.
    Keep(String),
    /// The page only carried the placeholder title; skip the URL.
    PlaceholderTitle,
}

/// For a title ending in [`SITE_SUFFIX`], cuts at the first occurrence of the
/// suffix (dropping it and everything after it) and trims whitespace. Other
/// titles are only trimmed.
pub fn strip_site_suffix(title: &str) -> &str {
    if !title.ends_with(SITE_SUFFIX) {
        return title.trim();
    }
    match title.find(SITE_SUFFIX) {
        Some(idx) => title[..idx].trim(),
        None => title.trim(),
    }
}

/// Strips the suffix, then applies the placeholder rule.
pub fn judge_title(cleaned: &str) -> TitleVerdict {
    let stripped = strip_site_suffix(cleaned);
    if stripped == PLACEHOLDER_TITLE {
        TitleVerdict::PlaceholderTitle
    } else {
        TitleVerdict::Keep(stripped.to_string())
    }
}
