//! `booktrack` command-line front end.
//!
//! # Responsibility
//! - Parse flags, resolve the store target and start file logging.
//! - Dispatch to the interactive menu or a one-shot subcommand.

mod commands;
mod output;

use anyhow::{Context, Result};
use booktrack_core::config::DB_PATH_ENV;
use booktrack_core::form::Notice;
use booktrack_core::model::book::{MAX_YEAR, MIN_YEAR};
use booktrack_core::{
    default_log_level, init_logging, logging_status, LibraryService, SearchField,
    SqliteBookRepository, StoreConfig,
};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

const LOG_DIR_NAME: &str = "booktrack-logs";

#[derive(Parser)]
#[command(name = "booktrack")]
#[command(author, version, about = "Personal book tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// SQLite database file
    #[arg(long, global = true, env = DB_PATH_ENV)]
    db: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for log files
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive menu (default)
    Menu,

    /// Add a book
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        /// Publication year
        #[arg(long, value_parser = clap::value_parser!(i64).range(MIN_YEAR..=MAX_YEAR))]
        year: i64,

        #[arg(long)]
        genre: String,

        /// Mark the book as read
        #[arg(long)]
        read: bool,
    },

    /// Remove every book with exactly this title
    Remove { title: String },

    /// Search books by title or author substring
    Search {
        /// Field to search (title, author)
        #[arg(long, default_value = "title")]
        by: SearchField,

        /// Text to look for; empty matches everything
        #[arg(default_value = "")]
        query: String,

        /// Print JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Display all books
    List {
        #[arg(long)]
        json: bool,
    },

    /// Display read statistics
    Stats {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    start_logging(&cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_notice(&Notice::error(format!("{err:#}")));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli
        .db
        .map(StoreConfig::new)
        .unwrap_or_else(StoreConfig::from_env);
    info!(
        "event=cli_start module=cli status=ok db={}",
        config.db_path().display()
    );
    let service = LibraryService::new(SqliteBookRepository::new(config));

    let result = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => commands::interactive::execute(&service),
        Commands::Add {
            title,
            author,
            year,
            genre,
            read,
        } => commands::library::add(&service, title, author, year, genre, read),
        Commands::Remove { title } => commands::library::remove(&service, title),
        Commands::Search { by, query, json } => {
            commands::library::search(&service, by, query, json)
        }
        Commands::List { json } => commands::library::list(&service, json),
        Commands::Stats { json } => commands::library::stats(&service, json),
    };
    result.context("library operation failed")
}

fn start_logging(cli: &Cli) {
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    let log_dir = cli
        .log_dir
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join(LOG_DIR_NAME));

    if let Err(err) = init_logging(&level, &log_dir.to_string_lossy()) {
        eprintln!("warning: logging disabled: {err}");
        return;
    }
    if let Some((level, dir)) = logging_status() {
        info!(
            "event=cli_logging module=cli status=ok level={} log_dir={}",
            level,
            dir.display()
        );
    }
}
