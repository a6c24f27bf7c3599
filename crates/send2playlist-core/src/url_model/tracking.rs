//! Tracking query fragments.

/// Query marker after which everything is tracking data.
pub const TRACKING_MARKER: &str = "&pp=";

/// Truncates `url` at the first [`TRACKING_MARKER`], dropping the marker and the rest.
pub fn strip_tracking(url: &str) -> &str {
    match url.find(TRACKING_MARKER) {
        Some(idx) => &url[..idx],
        None => url,
    }
}
