//! Book domain model.
//!
//! # Responsibility
//! - Define the record shape shared by persistence, services and forms.
//!
//! # Invariants
//! - Every stored book is identified by a store-assigned `BookId`.
//! - Records are never edited in place; they are added or removed.

pub mod book;
