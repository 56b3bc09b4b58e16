use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::{Map, Value};
use std::sync::Arc;

use notekeeper_core::{MSG_NOTE_CREATED, MSG_NOTE_DELETED, MSG_NOTE_UPDATED, Note};

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{CreateNoteResponse, MessageResponse};

pub async fn list_notes(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Note>>, ApiError> {
    Ok(Json(state.note_service.list_notes().await?))
}

pub async fn get_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Note>, ApiError> {
    Ok(Json(state.note_service.get_note(&id).await?))
}

pub async fn get_notes_by_title(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> Result<Json<Vec<Note>>, ApiError> {
    Ok(Json(state.note_service.get_notes_by_title(&title).await?))
}

pub async fn create_note(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateNoteResponse>), ApiError> {
    let Json(body) = body?;
    let note_id = state.note_service.create_note(&body).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateNoteResponse { message: MSG_NOTE_CREATED.to_owned(), note_id }),
    ))
}

pub async fn replace_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let body = update_body(body)?;
    state.note_service.replace_note(&id, &body).await?;
    Ok(Json(MessageResponse::new(MSG_NOTE_UPDATED)))
}

pub async fn patch_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let body = update_body(body)?;
    state.note_service.patch_note(&id, &body).await?;
    Ok(Json(MessageResponse::new(MSG_NOTE_UPDATED)))
}

pub async fn delete_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.note_service.delete_note(&id).await?;
    Ok(Json(MessageResponse::new(MSG_NOTE_DELETED)))
}

/// Both update fields are optional, so a request without a JSON body is an
/// update that supplies no fields. Malformed JSON is still rejected.
fn update_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(Value::Object(Map::new())),
        Err(rejection) => Err(rejection.into()),
    }
}
