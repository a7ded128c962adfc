//! Catalog entity types.

use std::fmt;

use sqlx::FromRow;

/// Label printed in place of a missing death year.
const ALIVE_LABEL: &str = "Vivo";

/// Label printed in place of an unknown birth or death year.
const UNKNOWN_YEAR_LABEL: &str = "?";

/// A stored author.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Author {
    /// Unique identifier.
    pub id: i64,
    /// Author name as reported by Gutendex.
    pub name: String,
    /// Birth year, when known.
    pub birth_year: Option<i32>,
    /// Death year; absent when the author is alive or the year is unknown.
    pub death_year: Option<i32>,
}

impl Author {
    /// Returns the `Name (birth - death)` label used by the author reports.
    #[must_use]
    pub fn display_label(&self) -> String {
        author_label(&self.name, self.birth_year, self.death_year)
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_label())
    }
}

/// Formats an author as `Name (birth - death)`.
///
/// An unknown birth year prints as `?`, an absent death year as `Vivo`.
#[must_use]
pub fn author_label(name: &str, birth_year: Option<i32>, death_year: Option<i32>) -> String {
    let birth = birth_year.map_or_else(|| UNKNOWN_YEAR_LABEL.to_string(), |y| y.to_string());
    let death = death_year.map_or_else(|| ALIVE_LABEL.to_string(), |y| y.to_string());
    format!("{name} ({birth} - {death})")
}

/// A stored book together with its author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Unique identifier.
    pub id: i64,
    /// Book title.
    pub title: String,
    /// Language code(s), comma separated when the work has several.
    pub language: String,
    /// Gutendex download count.
    pub download_count: i64,
    /// The single author retained for this book.
    pub author: Author,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Título: {} | Autor: {} | Idioma: {} | Downloads: {}",
            self.title, self.author.name, self.language, self.download_count
        )
    }
}

/// Flat row shape of `book JOIN author`.
#[derive(Debug, FromRow)]
pub(crate) struct BookRow {
    pub id: i64,
    pub title: String,
    pub language: String,
    pub download_count: i64,
    pub author_id: i64,
    pub author_name: String,
    pub author_birth_year: Option<i32>,
    pub author_death_year: Option<i32>,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            language: row.language,
            download_count: row.download_count,
            author: Author {
                id: row.author_id,
                name: row.author_name,
                birth_year: row.author_birth_year,
                death_year: row.author_death_year,
            },
        }
    }
}

/// Author data for a book that is about to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
}

/// A book that is about to be persisted, with its author resolved by name on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub language: String,
    pub download_count: i64,
    pub author: NewAuthor,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machado() -> Author {
        Author {
            id: 1,
            name: "Machado de Assis".to_string(),
            birth_year: Some(1839),
            death_year: Some(1908),
        }
    }

    #[test]
    fn test_author_display_label_with_both_years() {
        assert_eq!(machado().display_label(), "Machado de Assis (1839 - 1908)");
    }

    #[test]
    fn test_author_display_label_alive() {
        let author = Author {
            death_year: None,
            ..machado()
        };
        assert_eq!(author.to_string(), "Machado de Assis (1839 - Vivo)");
    }

    #[test]
    fn test_author_label_unknown_birth() {
        assert_eq!(author_label("Anon", None, Some(1500)), "Anon (? - 1500)");
    }

    #[test]
    fn test_book_display_includes_author_and_downloads() {
        let book = Book {
            id: 7,
            title: "Dom Casmurro".to_string(),
            language: "pt".to_string(),
            download_count: 1234,
            author: machado(),
        };
        assert_eq!(
            book.to_string(),
            "Título: Dom Casmurro | Autor: Machado de Assis | Idioma: pt | Downloads: 1234"
        );
    }

    #[test]
    fn test_book_row_converts_into_book_with_author() {
        let row = BookRow {
            id: 3,
            title: "Memórias Póstumas de Brás Cubas".to_string(),
            language: "pt".to_string(),
            download_count: 50,
            author_id: 1,
            author_name: "Machado de Assis".to_string(),
            author_birth_year: Some(1839),
            author_death_year: Some(1908),
        };
        let book = Book::from(row);
        assert_eq!(book.id, 3);
        assert_eq!(book.author, machado());
    }
}
