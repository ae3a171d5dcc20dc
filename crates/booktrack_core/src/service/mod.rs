//! Core use-case services.
//!
//! # Responsibility
//! - Expose the library operations front ends call into.
//! - Keep front ends decoupled from storage details.

pub mod library_service;
