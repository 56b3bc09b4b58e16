//! In-process note store.
//!
//! Mirrors the PostgreSQL semantics (ascending ids starting at 1, NULL on
//! replace-by-omission, COALESCE on patch) without a database. Used for
//! `serve --ephemeral` and throughout the test suites.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use notekeeper_core::{NewNote, Note, NoteChanges};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::NoteStore;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Note>,
    last_id: i64,
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    table: Arc<RwLock<Table>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteStore for MemoryStorage {
    async fn list_notes(&self) -> Result<Vec<Note>, StorageError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn get_note(&self, id: i64) -> Result<Option<Note>, StorageError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_notes_by_title(&self, title: &str) -> Result<Vec<Note>, StorageError> {
        let table = self.table.read().await;
        Ok(table.rows.values().filter(|n| n.title.as_deref() == Some(title)).cloned().collect())
    }

    async fn create_note(&self, note: &NewNote) -> Result<i64, StorageError> {
        let mut table = self.table.write().await;
        table.last_id = table.last_id.saturating_add(1);
        let id = table.last_id;
        table
            .rows
            .insert(id, Note::new(id, Some(note.title.clone()), Some(note.content.clone())));
        Ok(id)
    }

    async fn replace_note(&self, id: i64, changes: &NoteChanges) -> Result<bool, StorageError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = changes.clone().replace_on(id);
                Ok(true)
            },
            None => Ok(false),
        }
    }

    async fn patch_note(&self, id: i64, changes: &NoteChanges) -> Result<bool, StorageError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = changes.clone().merge_into(row);
                Ok(true)
            },
            None => Ok(false),
        }
    }

    async fn delete_note(&self, id: i64) -> Result<bool, StorageError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}
