//! Error types for Gutendex fetching and decoding.

use thiserror::Error;

/// Errors raised while retrieving a Gutendex page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The target is not an absolute `http`/`https` URL.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        /// The rejected URL string.
        url: String,
    },

    /// Network-level error (DNS resolution, connection refused, TLS errors, etc.)
    #[error("network error fetching {url}: {source}")]
    Network {
        /// The URL that failed.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before completion.
    #[error("timeout fetching {url}")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// Non-success HTTP status.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        /// The URL that returned an error status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The response body could not be read as text.
    #[error("failed to read response body from {url}: {source}")]
    Body {
        /// The URL whose body failed.
        url: String,
        /// The underlying read error.
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be constructed.
    #[error("HTTP client construction failed: {reason}")]
    Client {
        /// Why construction failed.
        reason: String,
    },
}

impl FetchError {
    /// Classifies a reqwest send error into a timeout or a network failure.
    pub fn from_send(url: impl Into<String>, source: reqwest::Error) -> Self {
        let url = url.into();
        if source.is_timeout() {
            Self::Timeout { url }
        } else {
            Self::Network { url, source }
        }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }
}

/// Errors raised while decoding a Gutendex page.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The document is not valid JSON or does not have the page shape.
    #[error("invalid Gutendex response: {source}")]
    Json {
        /// The underlying parse error.
        #[from]
        source: serde_json::Error,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_http_status_message() {
        let err = FetchError::http_status("https://gutendex.com/books", 503);
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("https://gutendex.com/books"));
    }

    #[test]
    fn test_fetch_error_invalid_url_message() {
        let err = FetchError::invalid_url("books?search=x");
        assert_eq!(err.to_string(), "invalid URL: books?search=x");
    }

    #[test]
    fn test_decode_error_wraps_serde_message() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = DecodeError::from(source);
        assert!(err.to_string().starts_with("invalid Gutendex response"));
    }
}
