//! Text rendering of notices, book cards and statistics.
//!
//! Output is plain text; styling is left to the front end.

use crate::model::book::{Book, LibraryStats};
use serde::Serialize;

const PROGRESS_BAR_WIDTH: usize = 30;

/// Severity of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// One user-facing status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

pub fn read_status_label(read: bool) -> &'static str {
    if read {
        "Read"
    } else {
        "Unread"
    }
}

/// Renders one book as a multi-line card.
pub fn render_book(book: &Book) -> String {
    format!(
        "Title:  {}\nAuthor: {}\nYear:   {}\nGenre:  {}\nStatus: {}",
        book.title,
        book.author,
        book.year,
        book.genre,
        read_status_label(book.read)
    )
}

/// Renders cards separated by blank lines.
///
/// Returns an empty string for an empty slice; callers decide which warning
/// an empty result deserves.
pub fn render_books(books: &[Book]) -> String {
    books
        .iter()
        .map(render_book)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Renders the two statistics metrics followed by a progress bar.
pub fn render_statistics(stats: &LibraryStats) -> String {
    format!(
        "Total Books:     {}\nPercentage Read: {:.2}%\n{}",
        stats.total,
        stats.read_percentage,
        progress_bar(stats.progress_fraction(), PROGRESS_BAR_WIDTH)
    )
}

/// Draws a bounded bar for `fraction`; values outside `[0, 1]` are clamped
/// and NaN renders as empty.
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    let filled = ((fraction * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::{progress_bar, render_book, render_books, render_statistics};
    use crate::model::book::{Book, LibraryStats};

    fn dune(read: bool) -> Book {
        Book {
            id: 1,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            year: 1965,
            genre: "SciFi".to_string(),
            read,
        }
    }

    #[test]
    fn book_card_shows_every_field_and_status() {
        let card = render_book(&dune(true));
        assert!(card.contains("Title:  Dune"));
        assert!(card.contains("Author: Herbert"));
        assert!(card.contains("Year:   1965"));
        assert!(card.contains("Genre:  SciFi"));
        assert!(card.ends_with("Status: Read"));
        assert!(render_book(&dune(false)).ends_with("Status: Unread"));
    }

    #[test]
    fn books_are_separated_by_blank_line() {
        assert_eq!(render_books(&[]), "");
        let rendered = render_books(&[dune(true), dune(false)]);
        assert_eq!(rendered.matches("\n\n").count(), 1);
    }

    #[test]
    fn statistics_use_two_decimals() {
        let rendered = render_statistics(&LibraryStats::from_counts(3, 1));
        assert!(rendered.contains("Total Books:     3"));
        assert!(rendered.contains("Percentage Read: 33.33%"));
    }

    #[test]
    fn progress_bar_is_bounded() {
        assert_eq!(progress_bar(0.0, 4), "[----]");
        assert_eq!(progress_bar(0.5, 4), "[##--]");
        assert_eq!(progress_bar(1.0, 4), "[####]");
        assert_eq!(progress_bar(7.0, 4), "[####]");
        assert_eq!(progress_bar(-1.0, 4), "[----]");
        assert_eq!(progress_bar(f64::NAN, 4), "[----]");
    }
}
