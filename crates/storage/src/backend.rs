//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use notekeeper_core::{NewNote, Note, NoteChanges};

use crate::error::StorageError;
use crate::memory::MemoryStorage;
use crate::pg_storage::{PgStorage, PoolConfig};
use crate::traits::NoteStore;

macro_rules! dispatch {
    ($self:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Postgres(s) => <PgStorage as NoteStore>::$method(s, $($arg),*).await,
            StorageBackend::Memory(s) => <MemoryStorage as NoteStore>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Postgres(PgStorage),
    Memory(MemoryStorage),
}

impl StorageBackend {
    pub async fn new_postgres(database_url: &str, config: PoolConfig) -> Result<Self, StorageError> {
        Ok(Self::Postgres(PgStorage::new(database_url, config).await?))
    }

    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(MemoryStorage::new())
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }
}

#[async_trait]
impl NoteStore for StorageBackend {
    async fn list_notes(&self) -> Result<Vec<Note>, StorageError> {
        dispatch!(self, list_notes())
    }

    async fn get_note(&self, id: i64) -> Result<Option<Note>, StorageError> {
        dispatch!(self, get_note(id))
    }

    async fn find_notes_by_title(&self, title: &str) -> Result<Vec<Note>, StorageError> {
        dispatch!(self, find_notes_by_title(title))
    }

    async fn create_note(&self, note: &NewNote) -> Result<i64, StorageError> {
        dispatch!(self, create_note(note))
    }

    async fn replace_note(&self, id: i64, changes: &NoteChanges) -> Result<bool, StorageError> {
        dispatch!(self, replace_note(id, changes))
    }

    async fn patch_note(&self, id: i64, changes: &NoteChanges) -> Result<bool, StorageError> {
        dispatch!(self, patch_note(id, changes))
    }

    async fn delete_note(&self, id: i64) -> Result<bool, StorageError> {
        dispatch!(self, delete_note(id))
    }
}
