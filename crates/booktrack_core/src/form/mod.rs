//! Presentation model for form-driven front ends.
//!
//! # Responsibility
//! - Describe menu destinations and the form inputs each one collects.
//! - Run presence/range checks before any domain operation is invoked.
//! - Turn operation results into user-facing notices and text blocks.
//!
//! # Invariants
//! - Forms hold no state between render passes; every submit is a fresh call.
//! - Store errors are never caught here; they reach the front end as-is.

pub mod input;
pub mod menu;
pub mod render;

pub use input::{
    show_library, show_statistics, submit_add, submit_remove, submit_search, AddBookForm, Outcome,
    RemoveForm, SearchForm,
};
pub use menu::MenuDestination;
pub use render::{
    progress_bar, read_status_label, render_book, render_books, render_statistics, Notice,
    NoticeLevel,
};
