//! `<title>` scraping.

use once_cell::sync::Lazy;
use regex::Regex;

/// Relaxed `<title ...>CAPTURE</title`: opening-tag attributes are ignored and
/// the closing `>` is not required. Single line; first (shortest) match wins.
static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<\s*title\b[^>]*>(.*?)</title").expect("title regex"));

/// Returns the first `<title>` text in `content`, untrimmed and still escaped.
pub fn find_title(content: &str) -> Option<&str> {
    TITLE_RE
        .captures(content)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}
