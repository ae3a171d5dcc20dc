//! Store connection configuration.
//!
//! # Responsibility
//! - Carry the store's connection target as an explicit value.
//! - Resolve the target from `BOOKTRACK_DB` when the caller asks for it.
//!
//! # Invariants
//! - No process-wide mutable configuration; adapters receive a `StoreConfig`
//!   at construction.

use std::path::{Path, PathBuf};

/// Environment variable holding the SQLite file path.
pub const DB_PATH_ENV: &str = "BOOKTRACK_DB";

/// Database file used when neither a flag nor `BOOKTRACK_DB` is given.
pub const DEFAULT_DB_FILE_NAME: &str = "library.sqlite3";

/// Connection target for the book store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    db_path: PathBuf,
}

impl StoreConfig {
    /// Creates a config pointing at the given SQLite file.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Resolves the target from `BOOKTRACK_DB`, falling back to
    /// [`DEFAULT_DB_FILE_NAME`] in the working directory.
    ///
    /// A blank variable is treated as unset; any other value is used as-is.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(DB_PATH_ENV).ok())
    }

    fn from_env_value(value: Option<String>) -> Self {
        match value {
            Some(path) if !path.trim().is_empty() => Self::new(path),
            _ => Self::default(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::{StoreConfig, DEFAULT_DB_FILE_NAME};
    use std::path::Path;

    #[test]
    fn env_value_overrides_default() {
        let config = StoreConfig::from_env_value(Some("/tmp/books.db".to_string()));
        assert_eq!(config.db_path(), Path::new("/tmp/books.db"));
    }

    #[test]
    fn env_value_keeps_surrounding_spaces() {
        let config = StoreConfig::from_env_value(Some(" my books.db ".to_string()));
        assert_eq!(config.db_path(), Path::new(" my books.db "));
    }

    #[test]
    fn blank_or_missing_env_value_uses_default() {
        assert_eq!(
            StoreConfig::from_env_value(None).db_path(),
            Path::new(DEFAULT_DB_FILE_NAME)
        );
        assert_eq!(
            StoreConfig::from_env_value(Some("   ".to_string())).db_path(),
            Path::new(DEFAULT_DB_FILE_NAME)
        );
    }
}
