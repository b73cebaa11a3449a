//! Quote repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over canonical `quotes` storage.
//! - Keep SQL details inside the core persistence boundary.
//! - Keep the cached row count consistent with mutating statements.
//!
//! # Invariants
//! - Write paths validate author/text before SQL mutations.
//! - The cached count equals `SELECT COUNT(*) FROM quotes` outside the
//!   window between a mutating statement and its counter update.
//! - The repository is the sole writer of its database file; out-of-band
//!   writers invalidate the cached count.

use crate::db::{self, DbError};
use crate::model::quote::{
    validate_author, validate_quote_text, Quote, QuoteDetails, QuoteId, QuoteValidationError,
    RandomQuote,
};
use parking_lot::{Mutex, RwLock};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

const SQL_COUNT: &str = "SELECT COUNT(*) FROM quotes;";
const SQL_ADD: &str = "INSERT INTO quotes (date, author, quote) VALUES (?1, ?2, ?3);";
const SQL_DELETE: &str = "DELETE FROM quotes WHERE id = ?1;";
const SQL_EDIT: &str = "UPDATE quotes SET quote = ?1 WHERE id = ?2;";
const SQL_RANDOM: &str = "SELECT id, quote FROM quotes ORDER BY RANDOM() LIMIT 1;";
const SQL_GET: &str = "SELECT quote FROM quotes WHERE id = ?1;";
const SQL_GET_DETAILS: &str = "SELECT date, author FROM quotes WHERE id = ?1;";
const SQL_GET_ALL: &str = "SELECT id, date, author, quote FROM quotes ORDER BY id DESC;";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for quote persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(QuoteValidationError),
    Db(DbError),
    NotFound(QuoteId),
    Empty,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "quote not found: {id}"),
            Self::Empty => write!(f, "no quotes stored"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Empty => None,
        }
    }
}

impl From<QuoteValidationError> for RepoError {
    fn from(value: QuoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for quote CRUD operations.
///
/// Absence semantics follow the statement shape: lookups by id surface
/// `NotFound` errors, while edit/delete report a `false` result when no
/// row matched.
pub trait QuoteRepository {
    /// Returns the cached row count without touching storage.
    fn count(&self) -> i64;
    /// Inserts a quote stamped with the current time; returns its id.
    fn add(&self, author: &str, text: &str) -> RepoResult<QuoteId>;
    /// Picks one quote uniformly at random among all current rows.
    fn random_quote(&self) -> RepoResult<RandomQuote>;
    /// Gets the quote body by id.
    fn get_quote(&self, id: QuoteId) -> RepoResult<String>;
    /// Gets timestamp and attribution by id.
    fn get_details(&self, id: QuoteId) -> RepoResult<QuoteDetails>;
    /// Replaces the quote body; `false` when the id is absent.
    fn edit(&self, id: QuoteId, new_text: &str) -> RepoResult<bool>;
    /// Removes a quote; `false` when the id is absent.
    fn delete(&self, id: QuoteId) -> RepoResult<bool>;
    /// Returns all quotes, newest id first, eagerly materialized.
    fn get_all(&self) -> RepoResult<Vec<Quote>>;
}

/// SQLite-backed quote repository.
///
/// Owns the single database connection and the cached row count. The
/// connection sits behind a mutex because SQLite handles are not shareable
/// across threads; individual statements serialize on it while the cached
/// count keeps `count()` lock-cheap and storage-free.
pub struct SqliteQuoteRepository {
    conn: Mutex<Connection>,
    cached_count: RwLock<i64>,
}

impl SqliteQuoteRepository {
    /// Opens the database file at `path` and loads the initial count.
    ///
    /// A handle that fails schema bootstrap or the initial count query is
    /// released before the error is returned.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        Self::from_connection(db::open_db(path)?)
    }

    /// Opens an in-memory database; used by tests and smoke probes.
    pub fn open_in_memory() -> RepoResult<Self> {
        Self::from_connection(db::open_db_in_memory()?)
    }

    fn from_connection(conn: Connection) -> RepoResult<Self> {
        let count: i64 = conn.query_row(SQL_COUNT, [], |row| row.get(0))?;
        Ok(Self {
            conn: Mutex::new(conn),
            cached_count: RwLock::new(count),
        })
    }

    /// Closes the underlying handle, consuming the repository.
    pub fn close(self) -> RepoResult<()> {
        self.conn
            .into_inner()
            .close()
            .map_err(|(_, err)| RepoError::Db(DbError::Sqlite(err)))
    }
}

impl QuoteRepository for SqliteQuoteRepository {
    fn count(&self) -> i64 {
        *self.cached_count.read()
    }

    fn add(&self, author: &str, text: &str) -> RepoResult<QuoteId> {
        validate_author(author)?;
        validate_quote_text(text)?;

        let conn = self.conn.lock();
        conn.execute(SQL_ADD, params![unix_now(), author, text])?;
        let id = conn.last_insert_rowid();
        drop(conn);

        *self.cached_count.write() += 1;
        Ok(id)
    }

    fn random_quote(&self) -> RepoResult<RandomQuote> {
        let conn = self.conn.lock();
        let picked = conn
            .query_row(SQL_RANDOM, [], |row| {
                Ok(RandomQuote {
                    id: row.get(0)?,
                    quote: row.get(1)?,
                })
            })
            .optional()?;

        picked.ok_or(RepoError::Empty)
    }

    fn get_quote(&self, id: QuoteId) -> RepoResult<String> {
        let conn = self.conn.lock();
        conn.query_row(SQL_GET, [id], |row| row.get(0))
            .optional()?
            .ok_or(RepoError::NotFound(id))
    }

    fn get_details(&self, id: QuoteId) -> RepoResult<QuoteDetails> {
        let conn = self.conn.lock();
        conn.query_row(SQL_GET_DETAILS, [id], |row| {
            Ok(QuoteDetails {
                date: row.get(0)?,
                author: row.get(1)?,
            })
        })
        .optional()?
        .ok_or(RepoError::NotFound(id))
    }

    fn edit(&self, id: QuoteId, new_text: &str) -> RepoResult<bool> {
        validate_quote_text(new_text)?;

        let changed = self.conn.lock().execute(SQL_EDIT, params![new_text, id])?;
        Ok(changed == 1)
    }

    fn delete(&self, id: QuoteId) -> RepoResult<bool> {
        let changed = self.conn.lock().execute(SQL_DELETE, [id])?;
        if changed != 1 {
            return Ok(false);
        }

        *self.cached_count.write() -= 1;
        Ok(true)
    }

    fn get_all(&self) -> RepoResult<Vec<Quote>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(SQL_GET_ALL)?;
        let mut rows = stmt.query([])?;
        let mut quotes = Vec::new();

        while let Some(row) = rows.next()? {
            quotes.push(Quote {
                id: row.get(0)?,
                date: row.get(1)?,
                author: row.get(2)?,
                quote: row.get(3)?,
            });
        }

        Ok(quotes)
    }
}

fn unix_now() -> i64 {
    // Clocks before the epoch clamp to 0 instead of failing the insert.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs() as i64)
}
