//! URL normalization before fetching.
//!
//! Strips tracking fragments and rewrites alternate-frontend links to the
//! canonical site, so the page we fetch (and the URL we store) is stable.

mod frontend;
mod tracking;

pub use frontend::{rewrite_frontend, CANONICAL_HOST};
pub use tracking::{strip_tracking, TRACKING_MARKER};

/// Returns `host` of `url` lowercased, or `None` if `url` doesn't parse.
pub fn host_of(url: &str) -> Option<String> {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_ascii_lowercase()))
}

/// Normalizes a source URL. Never fails; unknown URLs come back unchanged.
///
/// Tracking data is stripped first, then frontend links are rewritten.
///
/// # Examples
///
/// - `normalize("https://yewtu.be/watch?v=abc123")` → `"https://youtube.com/watch?v=abc123"`
/// - `normalize("https://youtube.com/watch?v=abc123&pp=xyz")` → `"https://youtube.com/watch?v=abc123"`
pub fn normalize(url: &str) -> String {
    let stripped = strip_tracking(url);
    let normalized = rewrite_frontend(stripped).unwrap_or_else(|| stripped.to_string());
    if normalized != url {
        tracing::debug!(from = url, to = %normalized, "normalized url");
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_rewrites_frontend() {
        assert_eq!(
            normalize("https://yewtu.be/watch?v=abc123"),
            "https://youtube.com/watch?v=abc123"
        );
    }

    #[test]
    fn normalize_strips_tracking() {
        assert_eq!(
            normalize("https://youtube.com/watch?v=abc123&pp=xyz"),
            "https://youtube.com/watch?v=abc123"
        );
    }

    #[test]
    fn normalize_applies_both() {
        assert_eq!(
            normalize("https://yewtu.be/watch?v=abc123&pp=ygUEdGVzdA%3D%3D"),
            "https://youtube.com/watch?v=abc123"
        );
    }

    #[test]
    fn normalize_leaves_other_urls_alone() {
        let url = "https://odysee.com/@chan:1/video:2";
        assert_eq!(normalize(url), url);
        assert_eq!(normalize("not a url"), "not a url");
    }

    #[test]
    fn host_of_lowercases() {
        assert_eq!(host_of("https://WWW.YouTube.com/x").as_deref(), Some("www.youtube.com"));
        assert_eq!(host_of("nope"), None);
    }
}
