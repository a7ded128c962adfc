//! Gutendex client: search URL construction, page fetching, and decoding.
//!
//! Gutendex serves Project Gutenberg metadata as paginated JSON:
//! `GET /books?search=<terms>` returns `{ "next": <url|null>, "results": [...] }`.

mod decode;
mod error;
mod fetcher;
mod http_client;

pub use decode::{
    AuthorSummary, BookSummary, SearchPage, UNKNOWN_AUTHOR_NAME, decode_book_summaries,
    decode_page, next_page_url,
};
pub use error::{DecodeError, FetchError};
pub use fetcher::{Fetcher, HttpFetcher, parse_absolute_url};
pub use http_client::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_READ_TIMEOUT_SECS, HttpTimeouts, build_http_client,
};

/// Default Gutendex API base URL.
pub const DEFAULT_BASE_URL: &str = "https://gutendex.com";

/// Builds `<base>/books?search=<query>` with the query percent-encoded.
#[must_use]
pub fn search_url(base_url: &str, query: &str) -> String {
    format!(
        "{}/books?search={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(query)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_spaces_and_accents() {
        assert_eq!(
            search_url(DEFAULT_BASE_URL, "Memórias Póstumas"),
            "https://gutendex.com/books?search=Mem%C3%B3rias%20P%C3%B3stumas"
        );
    }

    #[test]
    fn test_search_url_trims_trailing_slash() {
        assert_eq!(
            search_url("http://127.0.0.1:8080/", "dom"),
            "http://127.0.0.1:8080/books?search=dom"
        );
    }

    #[test]
    fn test_search_url_encodes_reserved_characters() {
        assert_eq!(
            search_url(DEFAULT_BASE_URL, "a&b=c"),
            "https://gutendex.com/books?search=a%26b%3Dc"
        );
    }
}
