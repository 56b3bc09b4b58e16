//! Core types for notekeeper
//!
//! Domain types, the request validation schema and shared constants used by
//! the storage, service and HTTP crates.

mod constants;
mod env_config;
mod note;
mod validation;

pub use constants::*;
pub use env_config::{env_non_empty, env_parse_with_default};
pub use note::{NewNote, Note, NoteChanges};
pub use validation::{
    FieldRule, FieldViolation, NoteSchema, Presence, Transform, ValidationErrors,
    ViolationLocation, escape_html, parse_note_id, sanitize,
};
