//! Service layer for notekeeper
//!
//! Centralizes the note request logic (validate → persist → classify the
//! outcome) between the HTTP handlers and storage, plus the client for the
//! remote keyword function.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod error;
mod keyword_proxy;
mod note_service;

pub use error::ServiceError;
pub use keyword_proxy::{KeywordProxy, ProxyError, ProxyReply};
pub use note_service::NoteService;
