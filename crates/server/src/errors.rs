use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use service::errors::ServiceError;

/// HTTP-facing error for the post endpoints. Each variant maps to one of the
/// documented JSON error bodies.
#[derive(Debug)]
pub enum ApiError {
    /// Unsupported `sort` or `direction` value on the list endpoint.
    InvalidQuery,
    /// Create payload with missing/invalid fields.
    Validation { missing_fields: Vec<String> },
    /// No post with the requested id.
    NotFound,
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation { missing_fields } => Self::Validation { missing_fields },
            ServiceError::InvalidQuery => Self::InvalidQuery,
            ServiceError::NotFound => Self::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidQuery => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Invalid sort or direction parameter"})),
            )
                .into_response(),
            ApiError::Validation { missing_fields } => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Invalid post data", "missing_fields": missing_fields})),
            )
                .into_response(),
            ApiError::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!({"error": "Post not found"}))).into_response()
            }
        }
    }
}
