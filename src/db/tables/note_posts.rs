//! Note post database operations

use rusqlite::{Result as SqliteResult, params};

use super::super::Database;
use crate::models::NotePost;

impl Database {
    /// Create a note post, letting SQLite assign the next id
    pub fn create_post(&self, title: &str, content: &str, author: &str) -> SqliteResult<NotePost> {
        let conn = self.conn.lock().unwrap();

        conn.execute(
            "INSERT INTO note_posts (title, content, author) VALUES (?1, ?2, ?3)",
            params![title, content, author],
        )?;

        let id = conn.last_insert_rowid();

        Ok(NotePost {
            id,
            title: title.to_string(),
            content: content.to_string(),
            author: author.to_string(),
        })
    }

    /// Get a note post by id. Returns `None` when no such row exists.
    pub fn get_post(&self, id: i64) -> SqliteResult<Option<NotePost>> {
        let conn = self.conn.lock().unwrap();

        let result = conn.query_row(
            "SELECT id, title, content, author FROM note_posts WHERE id = ?1",
            [id],
            Self::row_to_post,
        );

        match result {
            Ok(post) => Ok(Some(post)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// List all note posts in insertion order
    pub fn list_posts(&self) -> SqliteResult<Vec<NotePost>> {
        let conn = self.conn.lock().unwrap();

        let mut stmt =
            conn.prepare("SELECT id, title, content, author FROM note_posts ORDER BY id ASC")?;

        let posts = stmt
            .query_map([], Self::row_to_post)?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(posts)
    }

    /// Overwrite all three text fields of the post identified by `id`.
    /// Returns `false` when the id does not exist.
    pub fn update_post(
        &self,
        id: i64,
        title: &str,
        content: &str,
        author: &str,
    ) -> SqliteResult<bool> {
        let conn = self.conn.lock().unwrap();

        let rows_affected = conn.execute(
            "UPDATE note_posts SET title = ?1, content = ?2, author = ?3 WHERE id = ?4",
            params![title, content, author, id],
        )?;

        Ok(rows_affected > 0)
    }

    fn row_to_post(row: &rusqlite::Row) -> rusqlite::Result<NotePost> {
        Ok(NotePost {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            author: row.get(3)?,
        })
    }
}
