//! Quote domain model.
//!
//! # Responsibility
//! - Define the canonical record persisted in the `quotes` table.
//! - Provide input validation shared by all write paths.
//!
//! # Invariants
//! - `author` and `quote` are never empty for a persisted record.
//! - `date` carries unix seconds and is immutable after insert.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier assigned by the storage engine on insert.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type QuoteId = i64;

/// Canonical record for one stored utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Auto-increment primary key; never reused for another quote.
    pub id: QuoteId,
    /// Insert timestamp in unix seconds.
    pub date: i64,
    /// Attribution text.
    pub author: String,
    /// The quoted text; the only field mutated after creation.
    pub quote: String,
}

/// Read model for detail lookups (timestamp and attribution, no body).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteDetails {
    pub date: i64,
    pub author: String,
}

/// Read model for the random pick (id and body, no metadata).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomQuote {
    pub id: QuoteId,
    pub quote: String,
}

/// Validation error for caller-supplied quote fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteValidationError {
    EmptyAuthor,
    EmptyQuote,
}

impl Display for QuoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAuthor => write!(f, "author must not be empty"),
            Self::EmptyQuote => write!(f, "quote text must not be empty"),
        }
    }
}

impl Error for QuoteValidationError {}

/// Validates attribution text for write paths.
///
/// Whitespace-only input counts as empty.
pub fn validate_author(author: &str) -> Result<(), QuoteValidationError> {
    if author.trim().is_empty() {
        return Err(QuoteValidationError::EmptyAuthor);
    }
    Ok(())
}

/// Validates quote body text for write paths.
///
/// Whitespace-only input counts as empty.
pub fn validate_quote_text(text: &str) -> Result<(), QuoteValidationError> {
    if text.trim().is_empty() {
        return Err(QuoteValidationError::EmptyQuote);
    }
    Ok(())
}
