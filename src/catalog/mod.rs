//! Catalog module: persistence and queries for books and their authors.
//!
//! The catalog is backed by two `SQLite` tables, `author` and `book`, with every
//! book referencing exactly one author. Books are only ever inserted; nothing
//! is updated or deleted.
//!
//! # Overview
//!
//! - [`Catalog`] - Store operations (save and lookups)
//! - [`CatalogRepository`] - Data-access seam used by the menu and service layers
//! - [`Book`] / [`Author`] - Stored entities
//! - [`NewBook`] / [`NewAuthor`] - Insert payloads
//! - [`CatalogError`] - Operation error types
//!
//! # Example
//!
//! ```ignore
//! use literalura_core::catalog::{Catalog, NewAuthor, NewBook};
//! use literalura_core::Database;
//!
//! let catalog = Catalog::new(Database::new_in_memory().await?);
//! catalog.save_book(&NewBook {
//!     title: "Dom Casmurro".into(),
//!     language: "pt".into(),
//!     download_count: 1200,
//!     author: NewAuthor { name: "Machado de Assis".into(), birth_year: Some(1839), death_year: Some(1908) },
//! }).await?;
//! let alive = catalog.authors_alive_in_year(1900).await?;
//! ```

mod error;
mod model;
mod repository;

pub use error::{CatalogDbErrorKind, CatalogError};
pub use model::{Author, Book, NewAuthor, NewBook, author_label};
pub use repository::CatalogRepository;

use std::collections::BTreeSet;

use sqlx::{Executor, Sqlite, SqliteConnection};
use tracing::{debug, instrument};

use crate::db::Database;
use model::BookRow;

/// Maximum number of rows returned by the most-downloaded query.
pub const TOP_DOWNLOADS_LIMIT: i64 = 10;

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Expands to a `SELECT` over `book JOIN author` shaped as [`BookRow`], followed by `$tail`.
macro_rules! select_books {
    ($tail:literal) => {
        concat!(
            "SELECT b.id, b.title, b.language, b.download_count, ",
            "a.id AS author_id, a.name AS author_name, ",
            "a.birth_year AS author_birth_year, a.death_year AS author_death_year ",
            "FROM book b JOIN author a ON a.id = b.author_id ",
            $tail
        )
    };
}

/// Expands to a `SELECT` over authors that have at least one stored book, followed by `$tail`.
macro_rules! select_authors {
    ($tail:literal) => {
        concat!(
            "SELECT a.id, a.name, a.birth_year, a.death_year FROM author a ",
            "WHERE EXISTS (SELECT 1 FROM book b WHERE b.author_id = a.id) ",
            $tail
        )
    };
}

/// Escapes `LIKE` wildcards so user input is matched literally.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Book and author store.
#[derive(Debug, Clone)]
pub struct Catalog {
    db: Database,
}

impl Catalog {
    /// Creates a catalog over the given database connection.
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Persists a book, reusing an existing author row with exactly the same name
    /// or inserting a new one first.
    ///
    /// The author lookup/insert and the book insert share one transaction.
    ///
    /// # Returns
    ///
    /// The ID of the newly created book.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Database`] if any statement fails.
    #[instrument(skip(self, book), fields(title = %book.title, author = %book.author.name))]
    pub async fn save_book(&self, book: &NewBook) -> Result<i64> {
        let mut tx = self.db.pool().begin().await?;

        let author_id = resolve_author_id(&mut tx, &book.author).await?;

        let (book_id,): (i64,) = sqlx::query_as(
            r"INSERT INTO book (title, language, download_count, author_id)
              VALUES (?, ?, ?, ?)
              RETURNING id",
        )
        .bind(&book.title)
        .bind(&book.language)
        .bind(book.download_count.max(0))
        .bind(author_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!(book_id, author_id, "Saved book");
        Ok(book_id)
    }

    /// Finds the author stored under exactly this name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Database`] if the query fails.
    #[instrument(skip(self))]
    pub async fn find_author_by_name(&self, name: &str) -> Result<Option<Author>> {
        author_by_name(self.db.pool(), name).await
    }

    /// Returns true when a book with exactly this title (case-sensitive) is stored.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Database`] if the query fails.
    #[instrument(skip(self))]
    pub async fn exists_by_title(&self, title: &str) -> Result<bool> {
        let (exists,): (bool,) =
            sqlx::query_as(r"SELECT EXISTS (SELECT 1 FROM book WHERE title = ?)")
                .bind(title)
                .fetch_one(self.db.pool())
                .await?;

        Ok(exists)
    }

    /// Finds books whose title equals `title`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Database`] if the query fails.
    #[instrument(skip(self))]
    pub async fn find_books_by_exact_title(&self, title: &str) -> Result<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(select_books!(
            "WHERE LOWER(b.title) = LOWER(?) ORDER BY b.id"
        ))
        .bind(title)
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    /// Finds books whose language contains `code` as a substring.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Database`] if the query fails.
    #[instrument(skip(self))]
    pub async fn find_books_by_language(&self, code: &str) -> Result<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(select_books!(
            r"WHERE b.language LIKE '%' || ? || '%' ESCAPE '\' ORDER BY b.id"
        ))
        .bind(escape_like(code))
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    /// Lists every stored book in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Database`] if the query fails.
    #[instrument(skip(self))]
    pub async fn list_all_books(&self) -> Result<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(select_books!("ORDER BY b.id"))
            .fetch_all(self.db.pool())
            .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    /// Returns at most [`TOP_DOWNLOADS_LIMIT`] books, most downloaded first.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Database`] if the query fails.
    #[instrument(skip(self))]
    pub async fn top10_by_downloads(&self) -> Result<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(select_books!(
            "ORDER BY b.download_count DESC, b.id ASC LIMIT ?"
        ))
        .bind(TOP_DOWNLOADS_LIMIT)
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    /// Authors born in or before `year` who had not died before it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Database`] if the query fails.
    #[instrument(skip(self))]
    pub async fn authors_alive_in_year(&self, year: i32) -> Result<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(select_authors!(
            r"AND a.birth_year <= ?1
              AND (a.death_year IS NULL OR a.death_year >= ?1)
              ORDER BY a.name, a.id"
        ))
        .bind(year)
        .fetch_all(self.db.pool())
        .await?;

        Ok(authors)
    }

    /// Authors born in `year` (and not recorded as dying before it).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Database`] if the query fails.
    #[instrument(skip(self))]
    pub async fn authors_born_in_year(&self, year: i32) -> Result<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(select_authors!(
            r"AND a.birth_year = ?1
              AND (a.death_year IS NULL OR a.death_year >= ?1)
              ORDER BY a.name, a.id"
        ))
        .bind(year)
        .fetch_all(self.db.pool())
        .await?;

        Ok(authors)
    }

    /// Authors who died in `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Database`] if the query fails.
    #[instrument(skip(self))]
    pub async fn authors_dead_in_year(&self, year: i32) -> Result<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(select_authors!(
            r"AND a.birth_year <= ?1
              AND a.death_year = ?1
              ORDER BY a.name, a.id"
        ))
        .bind(year)
        .fetch_all(self.db.pool())
        .await?;

        Ok(authors)
    }

    /// Distinct names of the authors of stored books.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Database`] if the query fails.
    #[instrument(skip(self))]
    pub async fn list_all_author_names(&self) -> Result<BTreeSet<String>> {
        let names: Vec<(String,)> = sqlx::query_as(
            r"SELECT DISTINCT a.name FROM book b
              JOIN author a ON a.id = b.author_id",
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(names.into_iter().map(|(name,)| name).collect())
    }

    /// Number of stored books.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Database`] if the query fails.
    #[instrument(skip(self))]
    pub async fn count_books(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM book")
            .fetch_one(self.db.pool())
            .await?;
        Ok(count)
    }

    /// Number of stored authors.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Database`] if the query fails.
    #[instrument(skip(self))]
    pub async fn count_authors(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM author")
            .fetch_one(self.db.pool())
            .await?;
        Ok(count)
    }
}

/// Oldest author stored under exactly `name`, on a pool or inside a transaction.
async fn author_by_name<'e, E>(executor: E, name: &str) -> Result<Option<Author>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let author = sqlx::query_as::<_, Author>(
        r"SELECT id, name, birth_year, death_year FROM author
          WHERE name = ?
          ORDER BY id
          LIMIT 1",
    )
    .bind(name)
    .fetch_optional(executor)
    .await?;

    Ok(author)
}

/// Returns the id of the author named exactly `author.name`, inserting the author when missing.
async fn resolve_author_id(conn: &mut SqliteConnection, author: &NewAuthor) -> Result<i64> {
    if let Some(existing) = author_by_name(&mut *conn, &author.name).await? {
        return Ok(existing.id);
    }

    let (id,): (i64,) = sqlx::query_as(
        r"INSERT INTO author (name, birth_year, death_year)
          VALUES (?, ?, ?)
          RETURNING id",
    )
    .bind(&author.name)
    .bind(author.birth_year)
    .bind(author.death_year)
    .fetch_one(&mut *conn)
    .await?;

    debug!(author_id = id, name = %author.name, "Inserted author");
    Ok(id)
}
