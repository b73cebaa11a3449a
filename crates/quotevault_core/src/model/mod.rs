//! Domain model for stored quotes.
//!
//! # Responsibility
//! - Define the canonical quote record and its read projections.
//! - Validate caller-supplied fields before they reach persistence.
//!
//! # Invariants
//! - `id` is unique and stable for the life of a record.
//! - `date` is assigned at insert time and never changes.

pub mod quote;
