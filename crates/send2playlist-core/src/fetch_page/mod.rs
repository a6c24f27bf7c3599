//! HTTP GET of a video page.
//!
//! Uses the curl crate (libcurl) with a browser-like `User-Agent`, follows
//! redirects and hands back the raw body; decoding is the extractor's job.

mod error;

pub use error::FetchError;

use crate::config::PlaylistConfig;
use std::time::Duration;

/// Source of page bodies. The pipeline only talks to this, so tests can serve
/// canned markup without a network.
pub trait PageFetcher {
    /// Fetches `url` and returns the raw response body.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Blocking libcurl fetcher. One `Easy` handle per request.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    user_agent: String,
    connect_timeout: Duration,
    timeout: Duration,
}

impl CurlFetcher {
    pub fn new(config: &PlaylistConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            connect_timeout: config.connect_timeout,
            timeout: config.timeout,
        }
    }
}

impl PageFetcher for CurlFetcher {
    /// Performs a GET and returns the body. Non-2xx statuses are errors.
    /// Runs in the current thread.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.useragent(&self.user_agent)?;
        easy.follow_location(true)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }

        tracing::debug!(url, bytes = body.len(), "fetched page");
        Ok(body)
    }
}
