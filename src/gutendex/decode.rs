//! Decoding of Gutendex `/books` pages into book summaries.

use std::fmt;

use serde::Deserialize;
use tracing::warn;

use crate::catalog::{NewAuthor, NewBook, author_label};

use super::DecodeError;
use super::fetcher::parse_absolute_url;

/// Author name stored when a result lists no authors.
pub const UNKNOWN_AUTHOR_NAME: &str = "Autor desconhecido";

// ==================== Gutendex API Response Types ====================

/// Top-level Gutendex `/books` response.
#[derive(Debug, Deserialize)]
struct GutendexPage {
    #[serde(default)]
    next: Option<String>,
    #[serde(default)]
    results: Option<Vec<BookSummary>>,
}

/// One author entry of a search result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthorSummary {
    pub name: String,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub death_year: Option<i32>,
}

/// Flattened view of one search result, prior to persistence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookSummary {
    pub title: String,
    #[serde(default)]
    pub authors: Vec<AuthorSummary>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub download_count: i64,
}

impl BookSummary {
    /// Converts the summary into a persistable book.
    ///
    /// Only the first listed author is kept. Languages are joined with `,`.
    #[must_use]
    pub fn to_new_book(&self) -> NewBook {
        let author = self.authors.first().map_or_else(
            || NewAuthor {
                name: UNKNOWN_AUTHOR_NAME.to_string(),
                birth_year: None,
                death_year: None,
            },
            |first| NewAuthor {
                name: first.name.clone(),
                birth_year: first.birth_year,
                death_year: first.death_year,
            },
        );

        NewBook {
            title: self.title.clone(),
            language: self.languages.join(","),
            download_count: self.download_count.max(0),
            author,
        }
    }
}

impl fmt::Display for BookSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let authors = self
            .authors
            .iter()
            .map(|a| author_label(&a.name, a.birth_year, a.death_year))
            .collect::<Vec<_>>()
            .join("; ");
        write!(
            f,
            "Título: {} | Autor(es): {} | Idiomas: {} | Downloads: {}",
            self.title,
            authors,
            self.languages.join(", "),
            self.download_count
        )
    }
}

/// One decoded page: its results and the pagination cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    pub results: Vec<BookSummary>,
    pub next: Option<String>,
}

/// Decodes a Gutendex page.
///
/// A missing or null `results` yields no results. A `next` that is not an
/// absolute URL is dropped so pagination stops there.
///
/// # Errors
///
/// Returns [`DecodeError::Json`] if the document is not valid JSON or not a page object.
pub fn decode_page(json: &str) -> Result<SearchPage, DecodeError> {
    let page: GutendexPage = serde_json::from_str(json)?;

    let next = page.next.filter(|candidate| {
        let valid = parse_absolute_url(candidate).is_ok();
        if !valid {
            warn!(next = %candidate, "Ignoring malformed pagination cursor");
        }
        valid
    });

    Ok(SearchPage {
        results: page.results.unwrap_or_default(),
        next,
    })
}

/// Maps the `results` array of a page into book summaries.
///
/// # Errors
///
/// Returns [`DecodeError::Json`] if the document is not valid JSON.
pub fn decode_book_summaries(json: &str) -> Result<Vec<BookSummary>, DecodeError> {
    decode_page(json).map(|page| page.results)
}

/// Reads the `next` pagination cursor of a page.
///
/// # Errors
///
/// Returns [`DecodeError::Json`] if the document is not valid JSON.
pub fn next_page_url(json: &str) -> Result<Option<String>, DecodeError> {
    decode_page(json).map(|page| page.next)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const DOM_CASMURRO_PAGE: &str = r#"{
        "count": 1,
        "next": null,
        "previous": null,
        "results": [{
            "id": 55752,
            "title": "Dom Casmurro",
            "authors": [{"name": "Machado de Assis", "birth_year": 1839, "death_year": 1908}],
            "translators": [],
            "subjects": ["Brazilian fiction"],
            "languages": ["pt"],
            "copyright": false,
            "media_type": "Text",
            "download_count": 1523
        }]
    }"#;

    #[test]
    fn test_decode_book_summaries_maps_result_fields() {
        let summaries = decode_book_summaries(DOM_CASMURRO_PAGE).unwrap();
        assert_eq!(summaries.len(), 1);
        let summary = &summaries[0];
        assert_eq!(summary.title, "Dom Casmurro");
        assert_eq!(summary.languages, vec!["pt".to_string()]);
        assert_eq!(summary.download_count, 1523);
        assert_eq!(
            summary.authors[0],
            AuthorSummary {
                name: "Machado de Assis".to_string(),
                birth_year: Some(1839),
                death_year: Some(1908),
            }
        );
    }

    #[test]
    fn test_decode_book_summaries_empty_results_is_empty() {
        let summaries = decode_book_summaries(r#"{"count":0,"next":null,"results":[]}"#).unwrap();
        assert!(summaries.is_empty());
    }

    #[test]
    fn test_decode_book_summaries_missing_results_is_empty() {
        assert!(decode_book_summaries(r#"{"count":0}"#).unwrap().is_empty());
        assert!(decode_book_summaries(r#"{"results":null}"#).unwrap().is_empty());
    }

    #[test]
    fn test_decode_book_summaries_invalid_json_is_error() {
        let err = decode_book_summaries("<html>oops</html>").unwrap_err();
        assert!(matches!(err, DecodeError::Json { .. }));
    }

    #[test]
    fn test_decode_book_summaries_top_level_array_is_error() {
        assert!(decode_book_summaries("[]").is_err());
    }

    #[test]
    fn test_decode_book_summaries_defaults_optional_fields() {
        let summaries = decode_book_summaries(
            r#"{"results":[{"title":"Anonymous Tract","authors":[{"name":"Anon"}]}]}"#,
        )
        .unwrap();
        let summary = &summaries[0];
        assert!(summary.languages.is_empty());
        assert_eq!(summary.download_count, 0);
        assert_eq!(summary.authors[0].birth_year, None);
        assert_eq!(summary.authors[0].death_year, None);
    }

    #[test]
    fn test_next_page_url_returns_literal_string() {
        let json = r#"{"next":"https://gutendex.com/books/?page=2&search=machado","results":[]}"#;
        assert_eq!(
            next_page_url(json).unwrap().as_deref(),
            Some("https://gutendex.com/books/?page=2&search=machado")
        );
    }

    #[test]
    fn test_next_page_url_null_or_missing_is_absent() {
        assert_eq!(next_page_url(r#"{"next":null,"results":[]}"#).unwrap(), None);
        assert_eq!(next_page_url(r#"{"results":[]}"#).unwrap(), None);
    }

    #[test]
    fn test_next_page_url_malformed_is_absent() {
        assert_eq!(next_page_url(r#"{"next":"page=2","results":[]}"#).unwrap(), None);
    }

    #[test]
    fn test_to_new_book_keeps_only_first_author() {
        let summary = BookSummary {
            title: "Collected Works".to_string(),
            authors: vec![
                AuthorSummary {
                    name: "First".to_string(),
                    birth_year: Some(1800),
                    death_year: None,
                },
                AuthorSummary {
                    name: "Second".to_string(),
                    birth_year: Some(1810),
                    death_year: Some(1870),
                },
            ],
            languages: vec!["en".to_string(), "fr".to_string()],
            download_count: 9,
        };

        let book = summary.to_new_book();
        assert_eq!(book.author.name, "First");
        assert_eq!(book.language, "en,fr");
        assert_eq!(book.download_count, 9);
    }

    #[test]
    fn test_to_new_book_without_authors_uses_placeholder() {
        let summary = BookSummary {
            title: "Orphan".to_string(),
            authors: Vec::new(),
            languages: vec!["en".to_string()],
            download_count: -3,
        };

        let book = summary.to_new_book();
        assert_eq!(book.author.name, UNKNOWN_AUTHOR_NAME);
        assert_eq!(book.download_count, 0);
    }

    #[test]
    fn test_book_summary_display_lists_all_authors() {
        let summaries = decode_book_summaries(DOM_CASMURRO_PAGE).unwrap();
        assert_eq!(
            summaries[0].to_string(),
            "Título: Dom Casmurro | Autor(es): Machado de Assis (1839 - 1908) | Idiomas: pt | Downloads: 1523"
        );
    }
}
