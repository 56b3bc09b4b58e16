//! Typed error enum for the service layer.
//!
//! Unifies validation, storage and proxy failures into a single error type
//! so the HTTP layer can map each failure mode to a status code.

use notekeeper_core::ValidationErrors;
use notekeeper_storage::StorageError;
use thiserror::Error;

use crate::keyword_proxy::ProxyError;

/// Service-layer error.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller input failed the operation's schema. Never reaches storage.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Well-formed request for an entity that does not exist.
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    /// Storage operation failed (DB error, pool exhausted, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Remote keyword function call failed.
    #[error("proxy: {0}")]
    Proxy(#[from] ProxyError),

    /// Required backend is not configured.
    #[error("not configured: {0}")]
    NotConfigured(String),
}

impl ServiceError {
    pub(crate) fn note_not_found(id: impl Into<String>) -> Self {
        Self::NotFound { entity: "note", id: id.into() }
    }

    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Storage(StorageError::NotFound { .. }))
    }

    /// Whether the store could not hand out a connection in time.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_unavailable())
    }
}
