//! Page fetch error type.

use thiserror::Error;

/// Error returned by a page fetch (curl failure or HTTP error status).
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (DNS, connection refused, timeout, bad URL, ...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display() {
        assert_eq!(FetchError::Http(404).to_string(), "HTTP 404");
    }
}
