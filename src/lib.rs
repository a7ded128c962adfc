//! LiterAlura Core Library
//!
//! This library provides the core functionality for the LiterAlura catalog,
//! which searches Gutendex (Project Gutenberg metadata) by title or author,
//! stores matching books and authors in `SQLite`, and reports on them.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`gutendex`] - HTTP fetcher, search URLs, and JSON page decoding
//! - [`db`] - Database connection and schema management
//! - [`catalog`] - Book/author persistence and queries
//! - [`service`] - Aggregate queries on top of the catalog
//! - [`menu`] - Interactive command loop
//! - [`config`] - Resolved runtime configuration

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod config;
pub mod db;
pub mod dedup;
pub mod gutendex;
pub mod menu;
pub mod service;
mod user_agent;

// Re-export commonly used types
pub use catalog::{Author, Book, Catalog, CatalogError, CatalogRepository, NewAuthor, NewBook};
pub use config::{AppConfig, ConfigError, DatabaseLocation};
pub use db::{Database, DbError};
pub use dedup::dedupe_by_key;
pub use gutendex::{
    BookSummary, DecodeError, FetchError, Fetcher, HttpFetcher, HttpTimeouts,
    decode_book_summaries, next_page_url,
};
pub use menu::{MenuController, MenuError};
pub use service::BookService;
