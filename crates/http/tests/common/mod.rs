//! Shared helpers for router-level tests.

#![allow(dead_code, reason = "not every test binary uses every helper")]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use notekeeper_http::{AppState, create_router};
use notekeeper_service::{KeywordProxy, NoteService};
use notekeeper_storage::StorageBackend;
use serde_json::Value;
use tower::ServiceExt;

pub fn memory_app() -> Router {
    app_with_proxy(None)
}

pub fn app_with_proxy(keyword_proxy: Option<KeywordProxy>) -> Router {
    let storage = Arc::new(StorageBackend::new_memory());
    let state = Arc::new(AppState {
        note_service: Arc::new(NoteService::new(storage)),
        keyword_proxy: keyword_proxy.map(Arc::new),
    });
    create_router(state)
}

/// Send one request through the router and decode the JSON answer.
/// Non-JSON bodies come back as a JSON string.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, value)
}

pub async fn create(app: &Router, title: &str, content: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/api/notes",
        Some(serde_json::json!({"title": title, "content": content})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
    body["noteId"].as_i64().unwrap()
}
