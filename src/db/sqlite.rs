//! SQLite database handle and schema setup

use rusqlite::{Connection, Result as SqliteResult};
use std::path::Path;
use std::sync::Mutex;

/// Database wrapping a single SQLite connection.
///
/// The mutex serializes all reads and writes, so concurrent requests see
/// last-write-wins semantics at the granularity of one statement.
pub struct Database {
    pub(crate) conn: Mutex<Connection>,
}

impl Database {
    /// Open (or create) the database at `db_path` and ensure the schema exists
    pub fn new(db_path: &str) -> SqliteResult<Self> {
        if let Some(parent) = Path::new(db_path).parent() {
            std::fs::create_dir_all(parent).ok();
        }

        let conn = Connection::open(db_path)?;
        Self::create_tables(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn create_tables(conn: &Connection) -> SqliteResult<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS note_posts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                author TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }
}
