//! Note entity and the normalized inputs that create or change it.

use serde::{Deserialize, Serialize};

/// A persisted note.
///
/// `title` and `content` are always set on creation. A full replace that
/// omits a field stores NULL, so both are optional when read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Store-assigned primary key
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Note {
    #[must_use]
    pub const fn new(id: i64, title: Option<String>, content: Option<String>) -> Self {
        Self { id, title, content }
    }
}

/// Validated, sanitized input for creating a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
}

/// Validated, sanitized input for replace and patch.
///
/// `None` means the field was not supplied. Replace writes it as NULL;
/// patch keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NoteChanges {
    /// Apply as a partial update: supplied fields win, omitted fields keep `note`'s value.
    #[must_use]
    pub fn merge_into(self, note: &Note) -> Note {
        Note {
            id: note.id,
            title: self.title.or_else(|| note.title.clone()),
            content: self.content.or_else(|| note.content.clone()),
        }
    }

    /// Apply as a full replace: every field is overwritten, omitted ones become `None`.
    #[must_use]
    pub fn replace_on(self, id: i64) -> Note {
        Note { id, title: self.title, content: self.content }
    }
}
