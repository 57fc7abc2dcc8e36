//! Global application error types and handlers.
//!
//! This module defines custom error types that are used across the entire
//! backend application and provides mechanisms for consistent error handling
//! and response formatting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Access is denied")]
    Forbidden,

    #[error("internal server error")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "EntityNotFoundException",
            Self::Forbidden => "AccessDeniedException",
            Self::Database(_) => "InternalServerError",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Database(e) = &self {
            error!("database error: {e}");
        }

        let body = Json(json!({
            "type": self.kind(),
            "message": self.to_string(),
        }));

        (self.status(), body).into_response()
    }
}
