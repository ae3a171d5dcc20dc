//! Command implementations.

pub mod interactive;
pub mod library;
