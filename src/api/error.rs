//! API error taxonomy with envelope-shaped JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::types::Envelope;
use crate::dataset::DatasetError;
use crate::db::DatabaseError;

/// Request-level errors with HTTP status mapping. Rendered in the same
/// `{status_code, description, data}` envelope as success responses, with
/// the underlying message in `data`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Schema error: {0}")]
    Schema(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Persistence failed: {0}")]
    Persistence(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, description, detail) = match &self {
            ApiError::Validation(detail) => (StatusCode::BAD_REQUEST, "Bad Request", detail),
            ApiError::Schema(detail) => (StatusCode::BAD_REQUEST, "Bad Request", detail),
            ApiError::Parse(detail) => (StatusCode::BAD_REQUEST, "Bad Request", detail),
            ApiError::Persistence(detail) => {
                tracing::error!(detail, "Database write failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    detail,
                )
            }
        };

        let body = Envelope {
            status_code: status.as_u16(),
            description: description.to_string(),
            data: detail.clone(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        ApiError::Persistence(err.to_string())
    }
}

impl From<DatasetError> for ApiError {
    fn from(err: DatasetError) -> Self {
        match &err {
            DatasetError::MissingColumn => ApiError::Schema(err.to_string()),
            DatasetError::Parse(_) => ApiError::Parse(err.to_string()),
        }
    }
}
