//! Router-level tests for `/api/notes` against the in-memory backend.

mod common;

use axum::http::StatusCode;
use common::{create, memory_app, send};
use serde_json::json;

#[tokio::test]
async fn list_on_empty_store_returns_empty_array() {
    let app = memory_app();
    let (status, body) = send(&app, "GET", "/api/notes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_then_fetch_returns_trimmed_escaped_fields() {
    let app = memory_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/notes",
        Some(json!({"title": "  Shopping  ", "content": "eggs & <b>milk</b>"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Note created successfully");
    let id = body["noteId"].as_i64().unwrap();

    let (status, note) = send(&app, "GET", &format!("/api/notes/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(note, json!({
        "id": id,
        "title": "Shopping",
        "content": "eggs &amp; &lt;b&gt;milk&lt;&#x2F;b&gt;"
    }));
}

#[tokio::test]
async fn create_without_title_is_rejected_with_field_message() {
    let app = memory_app();
    let (status, body) =
        send(&app, "POST", "/api/notes", Some(json!({"content": "no title"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "title");
    assert_eq!(body["errors"][0]["location"], "body");
    assert_eq!(body["errors"].as_array().unwrap().len(), 1);

    let (_, list) = send(&app, "GET", "/api/notes", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn create_with_malformed_json_is_a_validation_error() {
    let app = memory_app();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/notes")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_unknown_id_is_not_found() {
    let app = memory_app();
    let (status, body) = send(&app, "GET", "/api/notes/999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Note not found");
}

#[tokio::test]
async fn get_non_integer_id_is_not_found_not_invalid() {
    let app = memory_app();
    create(&app, "a", "b").await;
    let (status, _) = send(&app, "GET", "/api/notes/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn title_lookup_matches_exactly_and_404s_on_none() {
    let app = memory_app();
    create(&app, "Work", "one").await;
    create(&app, "Work", "two").await;
    create(&app, "work", "three").await;

    let (status, body) = send(&app, "GET", "/api/notes/title/Work", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, _) = send(&app, "GET", "/api/notes/title/Nothing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn title_with_markup_is_stored_escaped() {
    let app = memory_app();
    create(&app, "<script>", "x").await;

    let (status, _) = send(&app, "GET", "/api/notes/title/%3Cscript%3E", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND, "raw form must not match the stored value");

    let (status, body) = send(&app, "GET", "/api/notes/title/&lt;script&gt;", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["title"], "&lt;script&gt;");
}

#[tokio::test]
async fn replace_clears_omitted_field() {
    let app = memory_app();
    let id = create(&app, "old", "keep?").await;

    let (status, body) =
        send(&app, "PUT", &format!("/api/notes/{id}"), Some(json!({"title": "A"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Note updated successfully");

    let (_, note) = send(&app, "GET", &format!("/api/notes/{id}"), None).await;
    assert_eq!(note["title"], "A");
    assert!(note["content"].is_null());
}

#[tokio::test]
async fn patch_preserves_omitted_field() {
    let app = memory_app();
    let id = create(&app, "old", "keep me").await;

    let (status, _) =
        send(&app, "PATCH", &format!("/api/notes/{id}"), Some(json!({"title": "B"}))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, note) = send(&app, "GET", &format!("/api/notes/{id}"), None).await;
    assert_eq!(note["title"], "B");
    assert_eq!(note["content"], "keep me");
}

#[tokio::test]
async fn writes_with_non_integer_id_are_bad_requests() {
    let app = memory_app();
    for method in ["PUT", "PATCH"] {
        let (status, body) =
            send(&app, method, "/api/notes/abc", Some(json!({"title": "x"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method}");
        assert_eq!(body["errors"][0]["field"], "id");
        assert_eq!(body["errors"][0]["location"], "params");
    }
    let (status, _) = send(&app, "DELETE", "/api/notes/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn writes_to_missing_id_are_not_found() {
    let app = memory_app();
    let (status, _) = send(&app, "PUT", "/api/notes/77", Some(json!({"title": "x"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "PATCH", "/api/notes/77", Some(json!({"title": "x"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_twice_is_ok_then_not_found() {
    let app = memory_app();
    let id = create(&app, "t", "c").await;

    let (status, body) = send(&app, "DELETE", &format!("/api/notes/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Note deleted successfully");

    let (status, _) = send(&app, "DELETE", &format!("/api/notes/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_and_version() {
    let app = memory_app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("ok"));

    let (status, body) = send(&app, "GET", "/api/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn bodyless_patch_keeps_both_fields() {
    let app = memory_app();
    let id = create(&app, "title", "content").await;

    let (status, body) = send(&app, "PATCH", &format!("/api/notes/{id}"), None).await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let (_, note) = send(&app, "GET", &format!("/api/notes/{id}"), None).await;
    assert_eq!(note["title"], "title");
    assert_eq!(note["content"], "content");
}

#[tokio::test]
async fn bodyless_put_clears_both_fields() {
    let app = memory_app();
    let id = create(&app, "title", "content").await;

    let (status, _) = send(&app, "PUT", &format!("/api/notes/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, note) = send(&app, "GET", &format!("/api/notes/{id}"), None).await;
    assert!(note["title"].is_null());
    assert!(note["content"].is_null());
}

#[tokio::test]
async fn bodyless_put_checks_the_id() {
    let app = memory_app();

    let (status, _) = send(&app, "PUT", "/api/notes/4242", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "PUT", "/api/notes/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["errors"][0]["field"], "id");
    assert_eq!(body["errors"][0]["location"], "params");
}

#[tokio::test]
async fn patch_with_malformed_json_is_still_rejected() {
    let app = memory_app();
    let id = create(&app, "t", "c").await;
    let request = axum::http::Request::builder()
        .method("PATCH")
        .uri(format!("/api/notes/{id}"))
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
