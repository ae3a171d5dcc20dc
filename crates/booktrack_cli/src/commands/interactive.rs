//! Interactive menu loop.
//!
//! Each pass selects one destination, collects its widgets and makes at
//! most one library call. Store errors end the loop.

use crate::output;
use anyhow::Result;
use booktrack_core::form::{
    show_library, show_statistics, submit_add, submit_remove, submit_search, AddBookForm,
    MenuDestination, RemoveForm, SearchForm,
};
use booktrack_core::model::book::{MAX_YEAR, MIN_YEAR};
use booktrack_core::{BookRepository, LibraryService, SearchField};
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};

pub fn execute<R: BookRepository>(service: &LibraryService<R>) -> Result<()> {
    println!("{}", "Personal Library Manager".blue().bold());

    loop {
        let selection = Select::new()
            .with_prompt("Menu")
            .items(&MenuDestination::ALL)
            .default(0)
            .interact()?;
        let destination = MenuDestination::ALL[selection];

        println!();
        output::print_heading(destination.heading());

        match destination {
            MenuDestination::Home => {
                println!("Manage your book collection easily with this interactive tool.");
            }
            MenuDestination::AddBook => add_book(service)?,
            MenuDestination::RemoveBook => remove_book(service)?,
            MenuDestination::SearchBooks => search_books(service)?,
            MenuDestination::ListBooks => output::print_outcome(&show_library(service)?, false)?,
            MenuDestination::Statistics => {
                output::print_outcome(&show_statistics(service)?, false)?
            }
            MenuDestination::Exit => {
                println!("Thank you for using Personal Library Manager!");
                return Ok(());
            }
        }
        println!();
    }
}

fn add_book<R: BookRepository>(service: &LibraryService<R>) -> Result<()> {
    let title = text_input("Book Title")?;
    let author = text_input("Author")?;
    let year: i64 = Input::new()
        .with_prompt("Publication Year")
        .default(MIN_YEAR)
        .validate_with(|year: &i64| -> Result<(), String> {
            if (MIN_YEAR..=MAX_YEAR).contains(year) {
                Ok(())
            } else {
                Err(format!("year must be between {MIN_YEAR} and {MAX_YEAR}"))
            }
        })
        .interact_text()?;
    let genre = text_input("Genre")?;
    let read = Confirm::new()
        .with_prompt("Mark as Read")
        .default(false)
        .interact()?;

    if !submit_button("Add Book")? {
        return Ok(());
    }

    let form = AddBookForm {
        title,
        author,
        year,
        genre,
        read,
    };
    output::print_outcome(&submit_add(service, &form)?, false)
}

fn remove_book<R: BookRepository>(service: &LibraryService<R>) -> Result<()> {
    let title = text_input("Enter the title of the book to remove")?;
    if !submit_button("Remove Book")? {
        return Ok(());
    }
    output::print_outcome(&submit_remove(service, &RemoveForm { title })?, false)
}

fn search_books<R: BookRepository>(service: &LibraryService<R>) -> Result<()> {
    let fields = SearchField::ALL
        .iter()
        .map(|field| field.column())
        .collect::<Vec<_>>();
    let selection = Select::new()
        .with_prompt("Search by")
        .items(&fields)
        .default(0)
        .interact()?;
    let query = text_input("Enter search term")?;
    if !submit_button("Search")? {
        return Ok(());
    }

    let form = SearchForm {
        field: SearchField::ALL[selection],
        query,
    };
    output::print_outcome(&submit_search(service, &form)?, false)
}

fn text_input(prompt: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn submit_button(label: &str) -> Result<bool> {
    let pressed = Confirm::new()
        .with_prompt(label)
        .default(true)
        .interact()?;
    Ok(pressed)
}
