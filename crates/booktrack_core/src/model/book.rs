//! Book record, insert payload and aggregate statistics.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused while the row exists.
//! - `title`, `author` and `genre` are non-empty on insert; whitespace counts
//!   as a value.
//! - `year` is non-zero and lies in `[MIN_YEAR, MAX_YEAR]` on insert.
//! - Titles are not unique.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Store-assigned surrogate key.
pub type BookId = i64;

pub const MIN_YEAR: i64 = 0;
pub const MAX_YEAR: i64 = 2100;

/// One tracked book as persisted in the `books` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: i64,
    pub genre: String,
    pub read: bool,
}

/// Insert payload for a book that has no id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i64,
    pub genre: String,
    pub read: bool,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            read,
        }
    }

    /// Checks required-field presence and the year range.
    ///
    /// Fields are checked in form order, so the first missing field wins.
    /// A year of `0` is the untouched numeric widget and counts as missing.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        for (field, value) in [
            (BookField::Title, &self.title),
            (BookField::Author, &self.author),
        ] {
            if value.is_empty() {
                return Err(BookValidationError::MissingField(field));
            }
        }
        if self.year == 0 {
            return Err(BookValidationError::MissingField(BookField::Year));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(BookValidationError::YearOutOfRange(self.year));
        }
        if self.genre.is_empty() {
            return Err(BookValidationError::MissingField(BookField::Genre));
        }
        Ok(())
    }

    /// Attaches a store-assigned id.
    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            year: self.year,
            genre: self.genre,
            read: self.read,
        }
    }
}

/// Required input fields of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookField {
    Title,
    Author,
    Year,
    Genre,
}

impl BookField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Year => "year",
            Self::Genre => "genre",
        }
    }
}

/// Input validation failure for [`NewBook`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    MissingField(BookField),
    YearOutOfRange(i64),
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required field `{}`", field.as_str()),
            Self::YearOutOfRange(year) => write!(
                f,
                "publication year {year} is outside {MIN_YEAR}..={MAX_YEAR}"
            ),
        }
    }
}

impl Error for BookValidationError {}

/// Column a substring search runs against.
///
/// Closed set: the column name is interpolated into SQL, so only these
/// variants may ever reach a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    #[default]
    Title,
    Author,
}

impl SearchField {
    pub const ALL: [SearchField; 2] = [SearchField::Title, SearchField::Author];

    /// SQL column name for this field.
    pub fn column(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
        }
    }
}

impl Display for SearchField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

/// Returned when text does not name a [`SearchField`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSearchFieldError(pub String);

impl Display for ParseSearchFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported search field `{}`; expected title|author",
            self.0
        )
    }
}

impl Error for ParseSearchFieldError {}

impl FromStr for SearchField {
    type Err = ParseSearchFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            other => Err(ParseSearchFieldError(other.to_string())),
        }
    }
}

/// Aggregate read/unread counts over the whole library.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LibraryStats {
    pub total: u64,
    pub read: u64,
    /// `100 * read / total`, or `0.0` for an empty library.
    pub read_percentage: f64,
}

impl LibraryStats {
    pub fn from_counts(total: u64, read: u64) -> Self {
        let read_percentage = if total == 0 {
            0.0
        } else {
            100.0 * read as f64 / total as f64
        };
        Self {
            total,
            read,
            read_percentage,
        }
    }

    /// Read share as a fraction in `[0, 1]` for progress indicators.
    pub fn progress_fraction(&self) -> f64 {
        (self.read_percentage / 100.0).clamp(0.0, 1.0)
    }
}
