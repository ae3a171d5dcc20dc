//! `books` table definition.
//!
//! The store has exactly one table and no versioned upgrades; bootstrap is a
//! single idempotent `CREATE TABLE IF NOT EXISTS`.

use crate::db::DbResult;
use rusqlite::Connection;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Table name used by every persistence statement.
pub const BOOKS_TABLE: &str = "books";

/// Creates the `books` table when it does not exist yet.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Returns whether the `books` table is present on this connection.
pub fn books_table_exists(conn: &Connection) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [BOOKS_TABLE],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

#[cfg(test)]
mod tests {
    use super::{books_table_exists, ensure_schema};
    use rusqlite::Connection;

    #[test]
    fn ensure_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(!books_table_exists(&conn).unwrap());

        ensure_schema(&conn).unwrap();
        ensure_schema(&conn).unwrap();

        assert!(books_table_exists(&conn).unwrap());
    }

    #[test]
    fn read_column_rejects_values_outside_zero_and_one() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO books (title, author, year, genre, read) VALUES ('t', 'a', 1, 'g', 2);",
            [],
        );
        assert!(result.is_err());
    }
}
