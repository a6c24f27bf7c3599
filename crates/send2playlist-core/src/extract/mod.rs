//! Title and channel extraction from raw page markup.
//!
//! Plain pattern matching over the response text; each site family's channel
//! rule lives in [`site`].

mod site;
mod title;

pub use site::Site;
pub use title::find_title;

use crate::fetch_page::{FetchError, PageFetcher};
use std::fmt;
use thiserror::Error;

/// Separator between channel name and title.
pub const CHANNEL_SEPARATOR: &str = " | ";

/// Why a page produced no title. Both causes are the same error kind to
/// callers; the cause only feeds diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoTitleCause {
    /// The `<title>` pattern did not match.
    MissingTitle,
    /// The body is not valid UTF-8.
    NotUtf8,
}

impl fmt::Display for NoTitleCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoTitleCause::MissingTitle => write!(f, "no <title> in page"),
            NoTitleCause::NotUtf8 => write!(f, "body is not valid UTF-8"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no title: {0}")]
    NoTitle(NoTitleCause),
    #[error("fetch failed: {0}")]
    Transport(#[from] FetchError),
}

/// Raw title of a page plus the channel/author name, when the site exposes one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTitle {
    pub channel: Option<String>,
    pub title: String,
}

impl ExtractedTitle {
    /// `"<channel> | <title>"`, or just the title when no channel was found.
    pub fn compose(&self) -> String {
        match &self.channel {
            Some(channel) => format!("{channel}{CHANNEL_SEPARATOR}{}", self.title),
            None => self.title.clone(),
        }
    }
}

/// Decodes a response body as UTF-8. A decode failure counts as "no title".
pub fn decode_body(body: Vec<u8>) -> Result<String, ExtractError> {
    String::from_utf8(body).map_err(|_| ExtractError::NoTitle(NoTitleCause::NotUtf8))
}

/// Extracts title and channel from already-decoded page `content` fetched from `url`.
pub fn extract_from_content(url: &str, content: &str) -> Result<ExtractedTitle, ExtractError> {
    let title = find_title(content).ok_or(ExtractError::NoTitle(NoTitleCause::MissingTitle))?;
    let channel = Site::from_url(url).channel_name(content);
    Ok(ExtractedTitle {
        channel,
        title: title.to_string(),
    })
}

/// Fetches `url` and extracts its title. The body is dropped once scraped.
pub fn fetch_title<F: PageFetcher + ?Sized>(
    fetcher: &F,
    url: &str,
) -> Result<ExtractedTitle, ExtractError> {
    let body = fetcher.fetch(url)?;
    let content = decode_body(body)?;
    extract_from_content(url, &content)
}
