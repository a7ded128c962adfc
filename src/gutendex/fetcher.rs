//! HTTP fetcher: GET an absolute URL and return the response body as text.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};
use url::Url;

use super::FetchError;
use super::http_client::{HttpTimeouts, build_http_client};

/// Retrieves raw response bodies.
///
/// The menu controller depends on this trait so searches can run against a
/// canned fetcher in tests.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url` and returns the body text.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

#[async_trait]
impl<T: Fetcher + ?Sized> Fetcher for &T {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url).await
    }
}

/// Validates that `url` is an absolute `http`/`https` URL.
///
/// # Errors
///
/// Returns [`FetchError::InvalidUrl`] for relative or non-HTTP URLs.
pub fn parse_absolute_url(url: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(url).map_err(|_| FetchError::invalid_url(url))?;
    if matches!(parsed.scheme(), "http" | "https") && parsed.has_host() {
        Ok(parsed)
    } else {
        Err(FetchError::invalid_url(url))
    }
}

/// reqwest-backed [`Fetcher`]. One GET per call, no retries.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with its own client built from `timeouts`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Client`] if HTTP client construction fails.
    pub fn new(timeouts: HttpTimeouts) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_http_client(timeouts)?,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    #[instrument(skip(self), fields(url = %url))]
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let target = parse_absolute_url(url)?;

        debug!("Sending GET request");
        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|e| FetchError::from_send(url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Gutendex returned non-success status");
            return Err(FetchError::http_status(url, status.as_u16()));
        }

        let body = response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;
        debug!(bytes = body.len(), "Received response body");
        Ok(body)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_absolute_url_accepts_https() {
        let url = parse_absolute_url("https://gutendex.com/books?search=dom").unwrap();
        assert_eq!(url.host_str(), Some("gutendex.com"));
    }

    #[test]
    fn test_parse_absolute_url_rejects_relative() {
        let err = parse_absolute_url("/books?search=dom").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[test]
    fn test_parse_absolute_url_rejects_non_http_scheme() {
        let err = parse_absolute_url("file:///etc/passwd").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn test_http_fetcher_rejects_invalid_url_without_request() {
        let fetcher = HttpFetcher::new(HttpTimeouts::default()).unwrap();
        let err = fetcher.fetch("not a url").await.unwrap_err();
        assert_eq!(err.to_string(), "invalid URL: not a url");
    }
}
