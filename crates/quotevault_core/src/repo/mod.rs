//! Repository layer abstraction and persistence implementation.
//!
//! # Responsibility
//! - Define the quote data-access contract.
//! - Isolate SQLite statement details from service orchestration.
//!
//! # Invariants
//! - Write paths validate caller input before SQL mutations.
//! - Repository APIs return semantic errors (`NotFound`, `Empty`) in
//!   addition to DB transport errors.

pub mod quote_repo;
