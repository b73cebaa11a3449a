//! Quote use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for embedding callers (bots, CLIs).
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - The service layer remains storage-agnostic.

use crate::model::quote::{Quote, QuoteDetails, QuoteId, RandomQuote};
use crate::repo::quote_repo::{QuoteRepository, RepoResult};

/// Use-case service wrapper for quote operations.
pub struct QuoteService<R: QuoteRepository> {
    repo: R,
}

impl<R: QuoteRepository> QuoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the number of stored quotes.
    pub fn quote_count(&self) -> i64 {
        self.repo.count()
    }

    /// Stores a new quote and returns its assigned id.
    pub fn add_quote(&self, author: &str, text: &str) -> RepoResult<QuoteId> {
        self.repo.add(author, text)
    }

    /// Picks one stored quote at random.
    pub fn random_quote(&self) -> RepoResult<RandomQuote> {
        self.repo.random_quote()
    }

    /// Returns the body of the quote with the given id.
    pub fn quote_text(&self, id: QuoteId) -> RepoResult<String> {
        self.repo.get_quote(id)
    }

    /// Returns timestamp and attribution of the quote with the given id.
    pub fn quote_details(&self, id: QuoteId) -> RepoResult<QuoteDetails> {
        self.repo.get_details(id)
    }

    /// Replaces the body of an existing quote.
    ///
    /// Returns `false` when no quote has the given id.
    pub fn edit_quote(&self, id: QuoteId, new_text: &str) -> RepoResult<bool> {
        self.repo.edit(id, new_text)
    }

    /// Removes a quote by id.
    ///
    /// Returns `false` when no quote has the given id.
    pub fn remove_quote(&self, id: QuoteId) -> RepoResult<bool> {
        self.repo.delete(id)
    }

    /// Lists all stored quotes, newest first.
    pub fn all_quotes(&self) -> RepoResult<Vec<Quote>> {
        self.repo.get_all()
    }

    /// Consumes the service, handing back the repository for teardown.
    pub fn into_repo(self) -> R {
        self.repo
    }
}
