//! Storage backend trait abstraction.

use async_trait::async_trait;
use notekeeper_core::{NewNote, Note, NoteChanges};

use crate::error::StorageError;

/// Note persistence. Every method issues its statement(s) on a single pooled
/// connection that is returned to the pool on every exit path.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Every note, in store order.
    async fn list_notes(&self) -> Result<Vec<Note>, StorageError>;

    /// Note by id, `None` if absent.
    async fn get_note(&self, id: i64) -> Result<Option<Note>, StorageError>;

    /// Notes whose title equals `title` exactly.
    async fn find_notes_by_title(&self, title: &str) -> Result<Vec<Note>, StorageError>;

    /// Insert a note. Returns the store-assigned id.
    async fn create_note(&self, note: &NewNote) -> Result<i64, StorageError>;

    /// Overwrite both text columns; omitted fields are written as NULL.
    /// Returns `false` if no row matched.
    async fn replace_note(&self, id: i64, changes: &NoteChanges) -> Result<bool, StorageError>;

    /// Check existence, then overwrite only the supplied fields.
    /// Returns `false` if no row matched the existence check.
    async fn patch_note(&self, id: i64, changes: &NoteChanges) -> Result<bool, StorageError>;

    /// Delete by id. Returns `false` if no row matched.
    async fn delete_note(&self, id: i64) -> Result<bool, StorageError>;
}
