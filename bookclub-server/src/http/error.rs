//! API error types with IntoResponse
//!
//! Every error renders as `{"message": <string>}` with a matching status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Missing fields or undecodable body (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Unique or foreign-key constraint violated (409)
    Conflict { resource: &'static str, detail: String },

    /// Database error (500, logged)
    Database(DbError),

    /// Store not reachable at all (503, logged)
    Unavailable(sqlx::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::NotFound { resource, .. } => format!("{} not found", resource),
            Self::Conflict { resource, .. } => {
                format!("{} conflicts with existing data", resource)
            }
            Self::Database(_) => "an internal error occurred".to_owned(),
            Self::Unavailable(_) => "database unavailable".to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Database(e) => tracing::error!("Database error: {}", e),
            Self::Unavailable(e) => tracing::warn!(error = %e, "database unavailable"),
            Self::Conflict { resource, detail } => {
                tracing::debug!(resource = *resource, %detail, "rejected conflicting write")
            }
            Self::Validation(ValidationError::MissingFields { fields }) => {
                tracing::debug!(?fields, "rejected request with missing fields")
            }
            _ => {}
        }

        let body = Json(json!({ "message": self.message() }));
        (self.status(), body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::Conflict { resource, detail } => Self::Conflict { resource, detail },
            _ => Self::Database(e),
        }
    }
}
