//! Repository seam for catalog persistence operations.
//!
//! The menu controller and the book service depend on this trait rather than on
//! [`Catalog`] directly. Each method maps to exactly one SQL statement (or, for
//! `save_book`, one transaction) in the `Catalog` implementation.

use std::collections::BTreeSet;

use async_trait::async_trait;

use super::{Author, Book, Catalog, NewBook, Result};

/// Data-access contract for books and authors.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Persists a book, inserting its author first when the name is new.
    async fn save_book(&self, book: &NewBook) -> Result<i64>;

    /// Returns true when a book with exactly this title is stored.
    async fn exists_by_title(&self, title: &str) -> Result<bool>;

    /// Books whose title equals `title`, ignoring case.
    async fn find_books_by_exact_title(&self, title: &str) -> Result<Vec<Book>>;

    /// Books whose language contains `code`.
    async fn find_books_by_language(&self, code: &str) -> Result<Vec<Book>>;

    /// Every stored book.
    async fn list_all_books(&self) -> Result<Vec<Book>>;

    /// The ten most downloaded books, most downloaded first.
    async fn top10_by_downloads(&self) -> Result<Vec<Book>>;

    /// Authors alive at some point during `year`.
    async fn authors_alive_in_year(&self, year: i32) -> Result<Vec<Author>>;

    /// Authors born in `year`.
    async fn authors_born_in_year(&self, year: i32) -> Result<Vec<Author>>;

    /// Authors who died in `year`.
    async fn authors_dead_in_year(&self, year: i32) -> Result<Vec<Author>>;

    /// Distinct author names across stored books.
    async fn list_all_author_names(&self) -> Result<BTreeSet<String>>;
}

#[async_trait]
impl CatalogRepository for Catalog {
    async fn save_book(&self, book: &NewBook) -> Result<i64> {
        Catalog::save_book(self, book).await
    }

    async fn exists_by_title(&self, title: &str) -> Result<bool> {
        Catalog::exists_by_title(self, title).await
    }

    async fn find_books_by_exact_title(&self, title: &str) -> Result<Vec<Book>> {
        Catalog::find_books_by_exact_title(self, title).await
    }

    async fn find_books_by_language(&self, code: &str) -> Result<Vec<Book>> {
        Catalog::find_books_by_language(self, code).await
    }

    async fn list_all_books(&self) -> Result<Vec<Book>> {
        Catalog::list_all_books(self).await
    }

    async fn top10_by_downloads(&self) -> Result<Vec<Book>> {
        Catalog::top10_by_downloads(self).await
    }

    async fn authors_alive_in_year(&self, year: i32) -> Result<Vec<Author>> {
        Catalog::authors_alive_in_year(self, year).await
    }

    async fn authors_born_in_year(&self, year: i32) -> Result<Vec<Author>> {
        Catalog::authors_born_in_year(self, year).await
    }

    async fn authors_dead_in_year(&self, year: i32) -> Result<Vec<Author>> {
        Catalog::authors_dead_in_year(self, year).await
    }

    async fn list_all_author_names(&self) -> Result<BTreeSet<String>> {
        Catalog::list_all_author_names(self).await
    }
}
