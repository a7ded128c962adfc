//! Database connection and schema management.
//!
//! One pooled `SQLite` connection serves the interactive session. File-backed
//! catalogs run in WAL mode with foreign keys enforced, and the schema in
//! `migrations/` is applied on open.
//!
//! # Example
//!
//! ```no_run
//! use literalura_core::Database;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::new(Path::new("literalura.db")).await?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use thiserror::Error;
use tracing::{debug, instrument};

/// The menu loop issues one statement at a time, so one session is enough.
const MAX_CONNECTIONS: u32 = 1;

/// How long a statement waits on a locked file before failing with `SQLITE_BUSY`.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors raised while opening the catalog database.
#[derive(Error, Debug)]
pub enum DbError {
    /// The database could not be opened or configured.
    #[error("failed to open catalog database: {0}")]
    Connection(#[from] sqlx::Error),

    /// Schema migrations could not be applied.
    #[error("failed to apply catalog schema: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Handle to the catalog's `SQLite` pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens (or creates) the catalog database at `db_path`.
    ///
    /// File-backed catalogs use WAL journaling and a busy timeout. Missing
    /// `author` and `book` tables are created.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Connection` if the file cannot be opened,
    /// or `DbError::Migration` if the schema cannot be applied.
    #[instrument(skip(db_path), fields(path = %db_path.display()))]
    pub async fn new(db_path: &Path) -> Result<Self, DbError> {
        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        Self::migrated(pool).await
    }

    /// Creates a catalog that lives only as long as this handle.
    ///
    /// The pooled connection is never recycled, since dropping it would
    /// drop the data with it.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Connection` if the connection fails,
    /// or `DbError::Migration` if the schema cannot be applied.
    #[instrument]
    pub async fn new_in_memory() -> Result<Self, DbError> {
        let options = SqliteConnectOptions::new()
            .in_memory(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::migrated(pool).await
    }

    async fn migrated(pool: SqlitePool) -> Result<Self, DbError> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        debug!("Catalog schema up to date");
        Ok(Self { pool })
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Reports whether the journal mode is WAL.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Connection` if the pragma cannot be read.
    pub async fn is_wal_enabled(&self) -> Result<bool, DbError> {
        let (mode,): (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&self.pool)
            .await?;

        Ok(mode.eq_ignore_ascii_case("wal"))
    }

    /// Closes the pool, flushing WAL contents to the main file.
    pub async fn close(self) {
        self.pool.close().await;
    }
}
