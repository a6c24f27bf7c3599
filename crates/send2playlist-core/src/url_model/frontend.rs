//! Alternate frontend (Invidious instance at yewtu.be) to canonical site rewrite.

use super::host_of;

/// Host token identifying the alternate frontend.
const FRONTEND_TOKEN: &str = "yewtu";

/// Site that frontend links are rewritten to.
pub const CANONICAL_HOST: &str = "youtube.com";

/// Rewrites a frontend URL to `https://youtube.com/<last path segment>`.
///
/// The last segment keeps its query string, so `watch?v=ID` survives.
/// Returns `None` when `url` is not a frontend link.
pub fn rewrite_frontend(url: &str) -> Option<String> {
    let host = host_of(url)?;
    if !host.contains(FRONTEND_TOKEN) {
        return None;
    }
    let segment = url.rsplit('/').next().unwrap_or_default();
    Some(format!("https://{CANONICAL_HOST}/{segment}"))
}
