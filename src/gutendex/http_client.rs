//! Shared HTTP client construction policy for Gutendex requests.
//!
//! Centralizes timeout, user-agent, and compression defaults so every
//! outbound request is built the same way.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::user_agent;

use super::FetchError;

/// Default connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default total request timeout in seconds.
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 30;

/// Timeouts applied to the Gutendex HTTP client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub connect_secs: u64,
    pub read_secs: u64,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self {
            connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            read_secs: DEFAULT_READ_TIMEOUT_SECS,
        }
    }
}

/// Builds the HTTP client used by [`super::HttpFetcher`].
///
/// # Errors
///
/// Returns [`FetchError::Client`] when client construction fails.
pub fn build_http_client(timeouts: HttpTimeouts) -> Result<Client, FetchError> {
    debug!(
        connect_secs = timeouts.connect_secs,
        read_secs = timeouts.read_secs,
        "Building Gutendex HTTP client"
    );
    Client::builder()
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .timeout(Duration::from_secs(timeouts.read_secs))
        .user_agent(user_agent::default_user_agent())
        .gzip(true)
        .build()
        .map_err(|error| FetchError::Client {
            reason: error.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_timeouts_default_values() {
        let timeouts = HttpTimeouts::default();
        assert_eq!(timeouts.connect_secs, 10);
        assert_eq!(timeouts.read_secs, 30);
    }

    #[test]
    fn test_build_http_client_with_custom_timeouts() {
        let client = build_http_client(HttpTimeouts {
            connect_secs: 1,
            read_secs: 2,
        });
        assert!(client.is_ok(), "client should build with custom timeouts");
    }
}
