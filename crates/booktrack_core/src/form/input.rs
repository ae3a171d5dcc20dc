//! Form inputs and submit handlers.
//!
//! # Invariants
//! - `submit_add` never calls the service when validation fails.
//! - Empty search results and removals that match nothing are warnings or
//!   successes, never errors.

use crate::form::render::Notice;
use crate::model::book::{Book, BookValidationError, LibraryStats, NewBook, SearchField};
use crate::repo::book_repo::{BookRepository, RepoResult};
use crate::service::library_service::LibraryService;

pub const MSG_BOOK_ADDED: &str = "Book added successfully!";
pub const MSG_BOOK_REMOVED: &str = "Book removed successfully!";
pub const MSG_MISSING_FIELDS: &str = "Please fill in all fields!";
pub const MSG_NO_BOOKS_FOUND: &str = "No books found!";
pub const MSG_LIBRARY_EMPTY: &str = "Your library is empty!";

/// Result of one submit, ready for the front end to display.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Notice(Notice),
    Books(Vec<Book>),
    Stats(LibraryStats),
}

/// Widget values collected by the add-book page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddBookForm {
    pub title: String,
    pub author: String,
    pub year: i64,
    pub genre: String,
    pub read: bool,
}

impl AddBookForm {
    /// Converts the widget values into an insert payload.
    ///
    /// Values are kept exactly as entered.
    pub fn validate(&self) -> Result<NewBook, BookValidationError> {
        let book = NewBook::new(
            self.title.clone(),
            self.author.clone(),
            self.year,
            self.genre.clone(),
            self.read,
        );
        book.validate()?;
        Ok(book)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RemoveForm {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchForm {
    pub field: SearchField,
    pub query: String,
}

pub fn submit_add<R: BookRepository>(
    service: &LibraryService<R>,
    form: &AddBookForm,
) -> RepoResult<Outcome> {
    let book = match form.validate() {
        Ok(book) => book,
        Err(BookValidationError::MissingField(_)) => {
            return Ok(Outcome::Notice(Notice::warning(MSG_MISSING_FIELDS)));
        }
        Err(err @ BookValidationError::YearOutOfRange(_)) => {
            return Ok(Outcome::Notice(Notice::warning(err.to_string())));
        }
    };

    service.add_book(&book)?;
    Ok(Outcome::Notice(Notice::success(MSG_BOOK_ADDED)))
}

/// Removes by exact title.
///
/// Reports success whether or not any row matched.
pub fn submit_remove<R: BookRepository>(
    service: &LibraryService<R>,
    form: &RemoveForm,
) -> RepoResult<Outcome> {
    service.remove_book(&form.title)?;
    Ok(Outcome::Notice(Notice::success(MSG_BOOK_REMOVED)))
}

pub fn submit_search<R: BookRepository>(
    service: &LibraryService<R>,
    form: &SearchForm,
) -> RepoResult<Outcome> {
    let books = service.search_books(&form.query, form.field)?;
    if books.is_empty() {
        return Ok(Outcome::Notice(Notice::warning(MSG_NO_BOOKS_FOUND)));
    }
    Ok(Outcome::Books(books))
}

/// Loads the full library, or the empty-library warning.
pub fn show_library<R: BookRepository>(service: &LibraryService<R>) -> RepoResult<Outcome> {
    let books = service.list_books()?;
    if books.is_empty() {
        return Ok(Outcome::Notice(Notice::warning(MSG_LIBRARY_EMPTY)));
    }
    Ok(Outcome::Books(books))
}

pub fn show_statistics<R: BookRepository>(service: &LibraryService<R>) -> RepoResult<Outcome> {
    Ok(Outcome::Stats(service.statistics()?))
}

#[cfg(test)]
mod tests {
    use super::{
        show_library, show_statistics, submit_add, submit_remove, submit_search, AddBookForm,
        Outcome, RemoveForm, SearchForm, MSG_BOOK_ADDED, MSG_BOOK_REMOVED, MSG_LIBRARY_EMPTY,
        MSG_MISSING_FIELDS, MSG_NO_BOOKS_FOUND,
    };
    use crate::form::render::{Notice, NoticeLevel};
    use crate::model::book::{Book, BookId, LibraryStats, NewBook, SearchField};
    use crate::repo::book_repo::{BookRepository, RepoResult};
    use crate::service::library_service::LibraryService;
    use std::cell::RefCell;

    #[derive(Default)]
    struct VecRepo {
        books: RefCell<Vec<Book>>,
    }

    impl BookRepository for VecRepo {
        fn add(&self, book: &NewBook) -> RepoResult<BookId> {
            let mut books = self.books.borrow_mut();
            let id = books.len() as BookId + 1;
            books.push(book.clone().into_book(id));
            Ok(id)
        }

        fn remove(&self, title: &str) -> RepoResult<usize> {
            let mut books = self.books.borrow_mut();
            let before = books.len();
            books.retain(|book| book.title != title);
            Ok(before - books.len())
        }

        fn search(&self, query: &str, field: SearchField) -> RepoResult<Vec<Book>> {
            Ok(self
                .books
                .borrow()
                .iter()
                .filter(|book| match field {
                    SearchField::Title => book.title.contains(query),
                    SearchField::Author => book.author.contains(query),
                })
                .cloned()
                .collect())
        }

        fn list_all(&self) -> RepoResult<Vec<Book>> {
            Ok(self.books.borrow().clone())
        }

        fn statistics(&self) -> RepoResult<LibraryStats> {
            let books = self.books.borrow();
            let read = books.iter().filter(|book| book.read).count() as u64;
            Ok(LibraryStats::from_counts(books.len() as u64, read))
        }
    }

    fn filled_form() -> AddBookForm {
        AddBookForm {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            year: 1965,
            genre: "SciFi".to_string(),
            read: true,
        }
    }

    #[test]
    fn add_with_missing_field_warns_and_skips_service() {
        let service = LibraryService::new(VecRepo::default());
        let form = AddBookForm {
            genre: String::new(),
            ..filled_form()
        };

        let outcome = submit_add(&service, &form).unwrap();
        assert_eq!(outcome, Outcome::Notice(Notice::warning(MSG_MISSING_FIELDS)));
        assert!(service.repository().books.borrow().is_empty());
    }

    #[test]
    fn add_with_untouched_year_warns_and_skips_service() {
        let service = LibraryService::new(VecRepo::default());
        let form = AddBookForm {
            year: 0,
            ..filled_form()
        };

        let outcome = submit_add(&service, &form).unwrap();
        assert_eq!(outcome, Outcome::Notice(Notice::warning(MSG_MISSING_FIELDS)));
        assert!(service.repository().books.borrow().is_empty());
    }

    #[test]
    fn add_accepts_whitespace_only_text_fields() {
        let service = LibraryService::new(VecRepo::default());
        let form = AddBookForm {
            title: " ".to_string(),
            genre: "  ".to_string(),
            ..filled_form()
        };

        let outcome = submit_add(&service, &form).unwrap();
        assert_eq!(outcome, Outcome::Notice(Notice::success(MSG_BOOK_ADDED)));
        assert_eq!(service.repository().books.borrow()[0].title, " ");
    }

    #[test]
    fn add_with_out_of_range_year_warns() {
        let service = LibraryService::new(VecRepo::default());
        let form = AddBookForm {
            year: 2200,
            ..filled_form()
        };

        match submit_add(&service, &form).unwrap() {
            Outcome::Notice(notice) => {
                assert_eq!(notice.level, NoticeLevel::Warning);
                assert!(notice.message.contains("2200"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(service.repository().books.borrow().is_empty());
    }

    #[test]
    fn add_keeps_values_as_entered() {
        let service = LibraryService::new(VecRepo::default());
        let form = AddBookForm {
            title: " Dune ".to_string(),
            ..filled_form()
        };

        let outcome = submit_add(&service, &form).unwrap();
        assert_eq!(outcome, Outcome::Notice(Notice::success(MSG_BOOK_ADDED)));
        assert_eq!(service.repository().books.borrow()[0].title, " Dune ");
    }

    #[test]
    fn remove_reports_success_even_without_match() {
        let service = LibraryService::new(VecRepo::default());
        let form = RemoveForm {
            title: "Missing".to_string(),
        };

        let outcome = submit_remove(&service, &form).unwrap();
        assert_eq!(outcome, Outcome::Notice(Notice::success(MSG_BOOK_REMOVED)));
    }

    #[test]
    fn search_without_hits_warns() {
        let service = LibraryService::new(VecRepo::default());
        submit_add(&service, &filled_form()).unwrap();

        let miss = SearchForm {
            field: SearchField::Author,
            query: "Asimov".to_string(),
        };
        assert_eq!(
            submit_search(&service, &miss).unwrap(),
            Outcome::Notice(Notice::warning(MSG_NO_BOOKS_FOUND))
        );

        let hit = SearchForm {
            field: SearchField::Title,
            query: "Du".to_string(),
        };
        match submit_search(&service, &hit).unwrap() {
            Outcome::Books(books) => assert_eq!(books.len(), 1),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn empty_library_and_statistics_views() {
        let service = LibraryService::new(VecRepo::default());
        assert_eq!(
            show_library(&service).unwrap(),
            Outcome::Notice(Notice::warning(MSG_LIBRARY_EMPTY))
        );
        assert_eq!(
            show_statistics(&service).unwrap(),
            Outcome::Stats(LibraryStats::from_counts(0, 0))
        );
    }
}
