//! SQLite storage bootstrap for the quote store.
//!
//! # Responsibility
//! - Open and configure SQLite connections for QuoteVault core.
//! - Ensure the `quotes` table and its date index exist before use.
//!
//! # Invariants
//! - Schema statements are idempotent (`IF NOT EXISTS`), so opening an
//!   already-initialized database is always safe.
//! - Core code must not read or write quote data before the schema batch
//!   succeeds.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Transport-level database error surfaced by the bootstrap layer.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
