//! Book repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide add/remove/search/list/statistics over the `books` table.
//! - Own the connection lifecycle of every call.
//!
//! # Invariants
//! - Each call opens its own connection and drops it before returning, on
//!   both success and error paths.
//! - Each call executes exactly one statement; mutations commit through
//!   SQLite autocommit.
//! - Search columns come from `SearchField` only; the query text is always a
//!   bound parameter.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::config::StoreConfig;
use crate::db::{open_db, DbError};
use crate::model::book::{Book, BookId, LibraryStats, NewBook, SearchField};
use log::debug;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const BOOK_SELECT_SQL: &str = "SELECT
    id,
    title,
    author,
    year,
    genre,
    read
FROM books";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for book persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted book data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for book records.
pub trait BookRepository {
    /// Inserts one book and returns its store-assigned id.
    fn add(&self, book: &NewBook) -> RepoResult<BookId>;
    /// Deletes every book whose title equals `title` exactly.
    ///
    /// Returns the number of removed rows; zero is not an error.
    fn remove(&self, title: &str) -> RepoResult<usize>;
    /// Returns books whose `field` contains `query` (case-sensitive).
    ///
    /// An empty query matches every book.
    fn search(&self, query: &str, field: SearchField) -> RepoResult<Vec<Book>>;
    /// Returns every book in store scan order.
    fn list_all(&self) -> RepoResult<Vec<Book>>;
    fn statistics(&self) -> RepoResult<LibraryStats>;
}

/// SQLite-backed book repository.
///
/// Holds only configuration; connections are opened per call.
#[derive(Debug, Clone)]
pub struct SqliteBookRepository {
    config: StoreConfig,
}

impl SqliteBookRepository {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    fn connect(&self) -> RepoResult<Connection> {
        Ok(open_db(self.config.db_path())?)
    }
}

impl BookRepository for SqliteBookRepository {
    fn add(&self, book: &NewBook) -> RepoResult<BookId> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO books (
                title,
                author,
                year,
                genre,
                read
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                book.title.as_str(),
                book.author.as_str(),
                book.year,
                book.genre.as_str(),
                bool_to_int(book.read),
            ],
        )?;
        let id = conn.last_insert_rowid();
        debug!("event=repo_insert module=repo status=ok id={id}");
        Ok(id)
    }

    fn remove(&self, title: &str) -> RepoResult<usize> {
        let conn = self.connect()?;
        let removed = conn.execute("DELETE FROM books WHERE title = ?1;", [title])?;
        debug!("event=repo_delete module=repo status=ok removed={removed}");
        Ok(removed)
    }

    fn search(&self, query: &str, field: SearchField) -> RepoResult<Vec<Book>> {
        let conn = self.connect()?;
        let column = field.column();
        let mut stmt = conn.prepare(&format!(
            "{BOOK_SELECT_SQL}
             WHERE (?1 = '' OR instr({column}, ?1) > 0);"
        ))?;
        let mut rows = stmt.query([query])?;
        let mut books = Vec::new();

        while let Some(row) = rows.next()? {
            books.push(parse_book_row(row)?);
        }

        debug!(
            "event=repo_search module=repo status=ok field={} hits={}",
            column,
            books.len()
        );
        Ok(books)
    }

    fn list_all(&self) -> RepoResult<Vec<Book>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("{BOOK_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut books = Vec::new();

        while let Some(row) = rows.next()? {
            books.push(parse_book_row(row)?);
        }

        Ok(books)
    }

    fn statistics(&self) -> RepoResult<LibraryStats> {
        let conn = self.connect()?;
        let (total, read) = conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(read), 0) FROM books;",
            [],
            |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)),
        )?;

        let total = count_to_u64(total, "total")?;
        let read = count_to_u64(read, "read")?;
        if read > total {
            return Err(RepoError::InvalidData(format!(
                "read count {read} exceeds total {total}"
            )));
        }

        Ok(LibraryStats::from_counts(total, read))
    }
}

fn parse_book_row(row: &Row<'_>) -> RepoResult<Book> {
    let read = match row.get::<_, i64>("read")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid read value `{other}` in books.read"
            )));
        }
    };

    Ok(Book {
        id: row.get("id")?,
        title: row.get("title")?,
        author: row.get("author")?,
        year: row.get("year")?,
        genre: row.get("genre")?,
        read,
    })
}

fn count_to_u64(value: i64, label: &str) -> RepoResult<u64> {
    u64::try_from(value)
        .map_err(|_| RepoError::InvalidData(format!("negative {label} count `{value}`")))
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
