use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use notekeeper_core::{FieldViolation, ViolationLocation};
use notekeeper_service::ServiceError;

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::SayQuery;

/// Forward `keyword` to the remote function and relay its answer.
pub async fn say(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SayQuery>,
) -> Result<Response, ApiError> {
    let keyword = query.keyword.ok_or_else(|| {
        ApiError::Validation(vec![FieldViolation::new(
            "keyword",
            ViolationLocation::Query,
            "keyword is required",
        )])
    })?;

    let proxy = state.keyword_proxy.as_ref().ok_or_else(|| {
        ServiceError::NotConfigured("keyword function URL is not configured".to_owned())
    })?;

    let reply = proxy.say(&keyword).await.map_err(ServiceError::from)?;
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::OK);
    let content_type =
        reply.content_type.unwrap_or_else(|| "application/json; charset=utf-8".to_owned());
    Ok((status, [(header::CONTENT_TYPE, content_type)], reply.body).into_response())
}
