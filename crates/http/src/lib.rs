//! HTTP API server for notekeeper.

#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod api_error;
mod api_types;
mod handlers;

use axum::{Json, Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use notekeeper_service::{KeywordProxy, NoteService};

pub use api_types::{CreateNoteResponse, MessageResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
///
/// Holds the process-wide service handles; the connection pool lives inside
/// the note service's storage backend. Wrapped in `Arc` for sharing across handlers.
pub struct AppState {
    /// Notes request handling
    pub note_service: Arc<NoteService>,
    /// Remote keyword function; `None` when `NOTEKEEPER_SAY_URL` is unset
    pub keyword_proxy: Option<Arc<KeywordProxy>>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route(
            "/api/notes",
            get(handlers::notes::list_notes).post(handlers::notes::create_note),
        )
        .route("/api/notes/title/{title}", get(handlers::notes::get_notes_by_title))
        .route(
            "/api/notes/{id}",
            get(handlers::notes::get_note)
                .put(handlers::notes::replace_note)
                .patch(handlers::notes::patch_note)
                .delete(handlers::notes::delete_note),
        )
        .route("/say", get(handlers::say::say))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
