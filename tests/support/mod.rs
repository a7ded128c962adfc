//! Shared helpers for integration tests.

#![allow(dead_code)]

use serde_json::{Value, json};

/// One book entry of a Gutendex results array.
pub fn gutendex_book(
    title: &str,
    author: &str,
    birth_year: Option<i32>,
    death_year: Option<i32>,
    language: &str,
    download_count: i64,
) -> Value {
    json!({
        "id": 1,
        "title": title,
        "authors": [{ "name": author, "birth_year": birth_year, "death_year": death_year }],
        "translators": [],
        "subjects": [],
        "languages": [language],
        "copyright": false,
        "media_type": "Text",
        "download_count": download_count
    })
}

/// A full Gutendex search page.
pub fn gutendex_page(next: Option<&str>, results: Vec<Value>) -> String {
    json!({
        "count": results.len(),
        "next": next,
        "previous": null,
        "results": results
    })
    .to_string()
}
