//! JSON error envelope for HTTP responses.
//!
//! Every failure is rendered as `{"error": "<message>"}`. Service errors pick
//! their status from [`ErrorKind`]; unexpected failures are logged and
//! replaced by an opaque message.

use crate::error::ErrorKind;
use crate::task::domain::ParseEnumError;
use crate::task::services::TaskServiceError;
use crate::task_list::services::TaskListServiceError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Message returned for malformed parameters and unknown enum tokens.
pub const INVALID_PARAMETER: &str = "Invalid request parameter";

/// Message returned for unexpected failures.
pub const UNEXPECTED: &str = "Unexpected error occurred";

/// HTTP error response with status and client-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ApiError {
    /// Creates an error response.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 response for a failed field validation.
    #[must_use]
    pub fn field(field: &str, message: impl std::fmt::Display) -> Self {
        Self::new(StatusCode::BAD_REQUEST, format!("{field}: {message}"))
    }

    /// Creates a 400 response for an unparseable parameter.
    #[must_use]
    pub fn invalid_parameter() -> Self {
        Self::new(StatusCode::BAD_REQUEST, INVALID_PARAMETER)
    }

    /// Creates a 500 response with the opaque message.
    #[must_use]
    pub fn unexpected() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED)
    }

    /// Returns the HTTP status.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the client-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    fn from_kind(kind: ErrorKind, err: &dyn std::error::Error) -> Self {
        if !kind.is_client_error() {
            tracing::error!(%kind, error = %err, "request failed unexpectedly");
            return Self::unexpected();
        }
        tracing::debug!(%kind, error = %err, "request rejected");
        let status = if kind == ErrorKind::NotFound {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::BAD_REQUEST
        };
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: &self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Domain(invalid) => Self::field("name", invalid),
            other => Self::from_kind(other.kind(), &other),
        }
    }
}

impl From<TaskListServiceError> for ApiError {
    fn from(err: TaskListServiceError) -> Self {
        match err {
            TaskListServiceError::Domain(invalid) => Self::field("name", invalid),
            other => Self::from_kind(other.kind(), &other),
        }
    }
}

impl From<ParseEnumError> for ApiError {
    fn from(err: ParseEnumError) -> Self {
        tracing::debug!(error = %err, "rejected enum token");
        Self::invalid_parameter()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "rejected request body");
        Self::invalid_parameter()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection, "rejected path parameter");
        Self::invalid_parameter()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(error = %rejection, "rejected query string");
        Self::invalid_parameter()
    }
}
