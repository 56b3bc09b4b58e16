//! NoteStore implementation for PgStorage.

use super::*;

use crate::traits::NoteStore;
use async_trait::async_trait;
use notekeeper_core::{NewNote, NoteChanges};

#[async_trait]
impl NoteStore for PgStorage {
    async fn list_notes(&self) -> Result<Vec<Note>, StorageError> {
        let rows = sqlx::query(&format!("SELECT {NOTE_COLUMNS} FROM notes ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_note).collect()
    }

    async fn get_note(&self, id: i64) -> Result<Option<Note>, StorageError> {
        let row = sqlx::query(&format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_note(&r)).transpose()
    }

    async fn find_notes_by_title(&self, title: &str) -> Result<Vec<Note>, StorageError> {
        let rows =
            sqlx::query(&format!("SELECT {NOTE_COLUMNS} FROM notes WHERE title = $1 ORDER BY id"))
                .bind(title)
                .fetch_all(&self.pool)
                .await?;
        rows.iter().map(row_to_note).collect()
    }

    async fn create_note(&self, note: &NewNote) -> Result<i64, StorageError> {
        let id: i64 =
            sqlx::query_scalar("INSERT INTO notes (title, content) VALUES ($1, $2) RETURNING id")
                .bind(&note.title)
                .bind(&note.content)
                .fetch_one(&self.pool)
                .await?;
        Ok(id)
    }

    async fn replace_note(&self, id: i64, changes: &NoteChanges) -> Result<bool, StorageError> {
        let result = sqlx::query("UPDATE notes SET title = $1, content = $2 WHERE id = $3")
            .bind(changes.title.as_deref())
            .bind(changes.content.as_deref())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn patch_note(&self, id: i64, changes: &NoteChanges) -> Result<bool, StorageError> {
        // One connection for both statements; dropped back into the pool on any return.
        let mut conn = self.pool.acquire().await?;

        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM notes WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        if exists.is_none() {
            return Ok(false);
        }

        sqlx::query(
            "UPDATE notes
             SET title = COALESCE($1, title),
                 content = COALESCE($2, content)
             WHERE id = $3",
        )
        .bind(changes.title.as_deref())
        .bind(changes.content.as_deref())
        .bind(id)
        .execute(&mut *conn)
        .await?;
        Ok(true)
    }

    async fn delete_note(&self, id: i64) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
