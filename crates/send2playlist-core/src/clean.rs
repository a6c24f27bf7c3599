//! Title cleanup: the handful of HTML entities video sites leave in `<title>`.

/// Entities rendered as a single quote.
const QUOTE_ENTITIES: [&str; 2] = ["&#39;", "&quot;"];

/// Unescapes `&#39;`/`&quot;` to `'`, then `&amp;` to `&`.
///
/// The quote family goes first so `&amp;#39;` ends up as `&#39;` rather than
/// being unescaped twice.
pub fn clean_title(raw: &str) -> String {
    let mut title = raw.to_string();
    for entity in QUOTE_ENTITIES {
        title = title.replace(entity, "'");
    }
    title.replace("&amp;", "&")
}
