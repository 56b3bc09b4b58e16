use std::sync::Arc;

use notekeeper_core::{Note, NoteChanges, NoteSchema, ValidationErrors, parse_note_id};
use notekeeper_storage::{NoteStore, StorageBackend};
use serde_json::Value;

use crate::ServiceError;

/// The notes request handler, independent of HTTP.
///
/// Every write validates first; nothing reaches storage until the request
/// passed its schema. Storage failures propagate unchanged as
/// [`ServiceError::Storage`].
pub struct NoteService {
    storage: Arc<StorageBackend>,
}

impl NoteService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    pub async fn list_notes(&self) -> Result<Vec<Note>, ServiceError> {
        Ok(self.storage.list_notes().await?)
    }

    /// Lenient on `raw_id`: anything that is not an integer cannot match a
    /// row, so it is reported as not found rather than invalid.
    pub async fn get_note(&self, raw_id: &str) -> Result<Note, ServiceError> {
        let Ok(id) = raw_id.parse::<i64>() else {
            tracing::debug!(id = raw_id, "non-integer note id, no row can match");
            return Err(ServiceError::note_not_found(raw_id));
        };
        self.storage.get_note(id).await?.ok_or_else(|| ServiceError::note_not_found(raw_id))
    }

    /// Exact title match. Zero matches is an error here, unlike [`Self::list_notes`].
    pub async fn get_notes_by_title(&self, title: &str) -> Result<Vec<Note>, ServiceError> {
        let notes = self.storage.find_notes_by_title(title).await?;
        if notes.is_empty() {
            return Err(ServiceError::NotFound { entity: "note titled", id: title.to_owned() });
        }
        Ok(notes)
    }

    /// Returns the new note's id.
    pub async fn create_note(&self, body: &Value) -> Result<i64, ServiceError> {
        let note = NoteSchema::new_note(body)?;
        let id = self.storage.create_note(&note).await?;
        tracing::debug!(id, "note created");
        Ok(id)
    }

    /// Full replace: a field omitted from `body` is cleared.
    pub async fn replace_note(&self, raw_id: &str, body: &Value) -> Result<(), ServiceError> {
        let (id, changes) = validate_update(raw_id, body)?;
        if !self.storage.replace_note(id, &changes).await? {
            return Err(ServiceError::note_not_found(raw_id));
        }
        tracing::debug!(id, "note replaced");
        Ok(())
    }

    /// Partial update: a field omitted from `body` keeps its stored value.
    pub async fn patch_note(&self, raw_id: &str, body: &Value) -> Result<(), ServiceError> {
        let (id, changes) = validate_update(raw_id, body)?;
        if !self.storage.patch_note(id, &changes).await? {
            return Err(ServiceError::note_not_found(raw_id));
        }
        tracing::debug!(id, "note patched");
        Ok(())
    }

    pub async fn delete_note(&self, raw_id: &str) -> Result<(), ServiceError> {
        let id = parse_note_id(raw_id).map_err(ValidationErrors::from)?;
        if !self.storage.delete_note(id).await? {
            return Err(ServiceError::note_not_found(raw_id));
        }
        tracing::debug!(id, "note deleted");
        Ok(())
    }
}

/// Validate the path id and the body together so both sets of violations
/// are reported at once.
fn validate_update(
    raw_id: &str,
    body: &Value,
) -> Result<(i64, NoteChanges), ValidationErrors> {
    let id = parse_note_id(raw_id);
    let changes = NoteSchema::note_changes(body);
    match (id, changes) {
        (Ok(id), Ok(changes)) => Ok((id, changes)),
        (id, changes) => {
            let mut errors = ValidationErrors::default();
            if let Err(violation) = id {
                errors.push(violation);
            }
            if let Err(body_errors) = changes {
                errors.violations.extend(body_errors.violations);
            }
            Err(errors)
        },
    }
}
