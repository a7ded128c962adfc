//! Error types for catalog operations.

use std::fmt;

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Coarse cause of a failed catalog statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogDbErrorKind {
    /// Another connection holds the database lock.
    BusyOrLocked,
    /// A schema constraint rejected the write.
    ConstraintViolation,
    /// The pool is closed or could not hand out a connection.
    Unavailable,
    /// The database file could not be read or written.
    Io,
    Other,
}

impl CatalogDbErrorKind {
    #[must_use]
    pub fn from_sqlx(error: &sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => Self::Unavailable,
            sqlx::Error::Io(_) => Self::Io,
            sqlx::Error::Database(db_error) => match db_error.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => Self::ConstraintViolation,
                _ if is_locked(db_error.code().as_deref(), db_error.message()) => {
                    Self::BusyOrLocked
                }
                _ => Self::Other,
            },
            _ => Self::Other,
        }
    }
}

// SQLite reports lock contention as primary result codes 5 and 6.
fn is_locked(code: Option<&str>, message: &str) -> bool {
    matches!(code, Some("5" | "6" | "SQLITE_BUSY" | "SQLITE_LOCKED"))
        || message.contains("database is locked")
}

impl fmt::Display for CatalogDbErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BusyOrLocked => "busy_or_locked",
            Self::ConstraintViolation => "constraint_violation",
            Self::Unavailable => "unavailable",
            Self::Io => "io",
            Self::Other => "other",
        })
    }
}

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("database error ({kind}): {message}")]
    Database {
        kind: CatalogDbErrorKind,
        /// Driver error text, kept as a string so the error stays `Clone`.
        message: String,
    },
}

impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database {
            kind: CatalogDbErrorKind::from_sqlx(&err),
            message: err.to_string(),
        }
    }
}

impl CatalogError {
    #[must_use]
    pub fn database_kind(&self) -> CatalogDbErrorKind {
        match self {
            Self::Database { kind, .. } => *kind,
        }
    }
}
