//! One-shot library subcommands.

use crate::output;
use anyhow::Result;
use booktrack_core::form::{
    show_library, show_statistics, submit_add, submit_remove, submit_search, AddBookForm,
    RemoveForm, SearchForm,
};
use booktrack_core::{BookRepository, LibraryService, SearchField};

pub fn add<R: BookRepository>(
    service: &LibraryService<R>,
    title: String,
    author: String,
    year: i64,
    genre: String,
    read: bool,
) -> Result<()> {
    let form = AddBookForm {
        title,
        author,
        year,
        genre,
        read,
    };
    output::print_outcome(&submit_add(service, &form)?, false)
}

pub fn remove<R: BookRepository>(service: &LibraryService<R>, title: String) -> Result<()> {
    output::print_outcome(&submit_remove(service, &RemoveForm { title })?, false)
}

pub fn search<R: BookRepository>(
    service: &LibraryService<R>,
    field: SearchField,
    query: String,
    json: bool,
) -> Result<()> {
    let form = SearchForm { field, query };
    output::print_outcome(&submit_search(service, &form)?, json)
}

pub fn list<R: BookRepository>(service: &LibraryService<R>, json: bool) -> Result<()> {
    output::print_outcome(&show_library(service)?, json)
}

pub fn stats<R: BookRepository>(service: &LibraryService<R>, json: bool) -> Result<()> {
    output::print_outcome(&show_statistics(service)?, json)
}
