//! Per-site channel/author rules, keyed by host.
//!
//! These patterns follow each site's page source as served today and are
//! best-effort: a markup change upstream just means no channel name.

use crate::url_model::host_of;
use once_cell::sync::Lazy;
use regex::Regex;

static YOUTUBE_CHANNEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<link itemprop="name" content="([^"]*)">"#).expect("youtube channel regex")
});

// JSON-LD block: "author": { "@type": "Person", "name": "..." }
static ODYSEE_AUTHOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""author":\s*\{\s*"@type":\s*"Person",\s*"name":\s*"([^"]*)""#)
        .expect("odysee author regex")
});

/// Site family a URL belongs to, deciding which channel rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    YouTube,
    Odysee,
    /// Any other host: title only.
    Other,
}

impl Site {
    /// Classifies `url` by host token (`youtube`, `odysee`).
    pub fn from_url(url: &str) -> Self {
        match host_of(url) {
            Some(host) if host.contains("youtube") => Site::YouTube,
            Some(host) if host.contains("odysee") => Site::Odysee,
            _ => Site::Other,
        }
    }

    /// Channel/author name scraped from `content`; empty names count as absent.
    pub fn channel_name(self, content: &str) -> Option<String> {
        let re: &Regex = match self {
            Site::YouTube => &*YOUTUBE_CHANNEL_RE,
            Site::Odysee => &*ODYSEE_AUTHOR_RE,
            Site::Other => return None,
        };
        re.captures(content)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_hosts() {
        assert_eq!(Site::from_url("https://www.youtube.com/watch?v=a"), Site::YouTube);
        assert_eq!(Site::from_url("https://m.youtube.com/watch?v=a"), Site::YouTube);
        assert_eq!(Site::from_url("https://odysee.com/@c:1/v:2"), Site::Odysee);
        assert_eq!(Site::from_url("https://example.com/youtube"), Site::Other);
        assert_eq!(Site::from_url("garbage"), Site::Other);
    }

    #[test]
    fn youtube_channel() {
        let page = r#"<span itemprop="author"><link itemprop="name" content="Chan &amp; Co"></span>"#;
        assert_eq!(
            Site::YouTube.channel_name(page).as_deref(),
            Some("Chan &amp; Co")
        );
    }

    #[test]
    fn odysee_author_as_served() {
        let page = "\"author\": {\n    \"@type\": \"Person\",\n    \"name\": \"@someone\",\n    \"url\": \"x\"";
        assert_eq!(Site::Odysee.channel_name(page).as_deref(), Some("@someone"));
    }

    #[test]
    fn odysee_author_compact_layout() {
        let page = r#"{"author":{"@type":"Person","name":"@compact"}}"#;
        assert_eq!(Site::Odysee.channel_name(page).as_deref(), Some("@compact"));
    }

    #[test]
    fn other_sites_have_no_channel() {
        let page = r#"<link itemprop="name" content="Nope">"#;
        assert_eq!(Site::Other.channel_name(page), None);
    }

    #[test]
    fn empty_channel_is_absent() {
        let page = r#"<link itemprop="name" content="">"#;
        assert_eq!(Site::YouTube.channel_name(page), None);
    }
}
