//! Centralized error responses for the HTTP API.
//!
//! Every failing endpoint returns the same body shape, and the mapping from
//! the service error taxonomy to HTTP statuses lives in exactly one place.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::service::ServiceError;

/// Error body returned by every failing endpoint.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code
    #[schema(example = 404)]
    pub status: u16,
    /// Canonical reason phrase for the status
    #[schema(example = "Not Found")]
    pub error: String,
    /// Human-readable detail
    #[schema(example = "Student not found with id: 42")]
    pub message: String,
    /// Request path that produced the error
    #[schema(example = "/api/v1/students/42")]
    pub path: String,
    /// Time the error was produced
    pub timestamp: DateTime<Utc>,
}

/// A service failure mapped onto an HTTP response.
///
/// Handlers attach only the request path; status and message derive from
/// the `ServiceError` variant.
pub struct ApiError {
    status: StatusCode,
    message: String,
    path: String,
}

impl ApiError {
    pub fn new(err: ServiceError, path: impl Into<String>) -> Self {
        let path = path.into();

        let status = match &err {
            ServiceError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
            ServiceError::DuplicateEmail { .. } => StatusCode::CONFLICT,
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &err {
            // Storage detail stays in the log; clients get a generic line.
            ServiceError::Repository(db_err) => {
                error!(path = %path, error = %db_err, "unhandled repository error");
                "An unexpected error occurred".to_string()
            }
            other => {
                warn!(path = %path, error = %other, "request rejected");
                other.to_string()
            }
        };

        Self {
            status,
            message,
            path,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            status: self.status.as_u16(),
            error: self
                .status
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_string(),
            message: self.message,
            path: self.path,
            timestamp: Utc::now(),
        };

        (self.status, Json(body)).into_response()
    }
}
