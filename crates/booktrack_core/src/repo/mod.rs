//! Persistence adapter for book records.
//!
//! # Responsibility
//! - Define the data access contract used by services.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - One connection per call: acquire, one statement, release.
//! - Store errors are propagated without translation.

pub mod book_repo;
