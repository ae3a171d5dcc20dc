//! Library use-case service.
//!
//! # Responsibility
//! - Provide add/remove/search/list/statistics entry points for front ends.
//! - Delegate each operation to exactly one repository call.
//!
//! # Invariants
//! - The service holds no state besides its repository, so reinvoking an
//!   operation on every render pass is safe.
//! - Service APIs return repository errors unchanged.

use crate::model::book::{Book, BookId, LibraryStats, NewBook, SearchField};
use crate::repo::book_repo::{BookRepository, RepoResult};
use log::{info, warn};
use std::time::Instant;

/// Use-case service wrapper for book operations.
pub struct LibraryService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> LibraryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Adds one book and returns its assigned id.
    ///
    /// Input checks happen in the form layer before this is called.
    pub fn add_book(&self, book: &NewBook) -> RepoResult<BookId> {
        let started_at = Instant::now();
        let result = self.repo.add(book);
        match &result {
            Ok(id) => info!(
                "event=book_add module=service status=ok id={} duration_ms={}",
                id,
                started_at.elapsed().as_millis()
            ),
            Err(err) => warn!("event=book_add module=service status=error error={err}"),
        }
        result
    }

    /// Removes every book titled exactly `title`; returns removed row count.
    pub fn remove_book(&self, title: &str) -> RepoResult<usize> {
        let result = self.repo.remove(title);
        match &result {
            Ok(removed) => info!("event=book_remove module=service status=ok removed={removed}"),
            Err(err) => warn!("event=book_remove module=service status=error error={err}"),
        }
        result
    }

    /// Substring search over the title or author column.
    pub fn search_books(&self, query: &str, field: SearchField) -> RepoResult<Vec<Book>> {
        let result = self.repo.search(query, field);
        match &result {
            Ok(books) => info!(
                "event=book_search module=service status=ok field={} hits={}",
                field,
                books.len()
            ),
            Err(err) => warn!("event=book_search module=service status=error error={err}"),
        }
        result
    }

    /// Lists every stored book.
    pub fn list_books(&self) -> RepoResult<Vec<Book>> {
        let result = self.repo.list_all();
        if let Err(err) = &result {
            warn!("event=book_list module=service status=error error={err}");
        }
        result
    }

    pub fn statistics(&self) -> RepoResult<LibraryStats> {
        let result = self.repo.statistics();
        match &result {
            Ok(stats) => info!(
                "event=book_stats module=service status=ok total={} read={}",
                stats.total, stats.read
            ),
            Err(err) => warn!("event=book_stats module=service status=error error={err}"),
        }
        result
    }
}
