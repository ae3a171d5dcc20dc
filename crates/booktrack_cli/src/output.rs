//! Terminal rendering of form outcomes.

use anyhow::Result;
use booktrack_core::form::{render_books, render_statistics, Notice, NoticeLevel, Outcome};
use colored::Colorize;

pub fn print_heading(heading: &str) {
    println!("{}", heading.blue().bold());
}

pub fn print_notice(notice: &Notice) {
    match notice.level {
        NoticeLevel::Success => println!("{}", notice.message.green()),
        NoticeLevel::Warning => println!("{}", notice.message.yellow()),
        NoticeLevel::Error => eprintln!("{}", notice.message.red().bold()),
    }
}

/// Prints an outcome as styled text, or as JSON when `json` is set.
pub fn print_outcome(outcome: &Outcome, json: bool) -> Result<()> {
    if json {
        let value = match outcome {
            Outcome::Notice(notice) => serde_json::to_string_pretty(notice)?,
            Outcome::Books(books) => serde_json::to_string_pretty(books)?,
            Outcome::Stats(stats) => serde_json::to_string_pretty(stats)?,
        };
        println!("{value}");
        return Ok(());
    }

    match outcome {
        Outcome::Notice(notice) => print_notice(notice),
        Outcome::Books(books) => println!("{}", render_books(books)),
        Outcome::Stats(stats) => println!("{}", render_statistics(stats)),
    }
    Ok(())
}
