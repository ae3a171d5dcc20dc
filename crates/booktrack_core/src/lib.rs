//! Core library for the personal book tracker.
//!
//! Holds the book model, the SQLite persistence adapter, the library
//! service and the form layer front ends render from.

pub mod config;
pub mod db;
pub mod form;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::StoreConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::book::{
    Book, BookField, BookId, BookValidationError, LibraryStats, NewBook, ParseSearchFieldError,
    SearchField,
};
pub use repo::book_repo::{BookRepository, RepoError, RepoResult, SqliteBookRepository};
pub use service::library_service::LibraryService;
