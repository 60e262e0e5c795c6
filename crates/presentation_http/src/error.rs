//! API error handling
//!
//! Maps application errors onto HTTP status codes and the JSON error body
//! returned by every endpoint.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {error}")]
    Internal {
        /// Client-facing summary
        error: String,
        /// Provider or transport detail
        details: Option<String>,
    },
}

impl ApiError {
    /// Failure of the location search endpoint
    pub fn search_failed(err: &ApplicationError) -> Self {
        Self::Internal {
            error: "Search failed".to_string(),
            details: Some(err.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, error, details) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            Self::Internal { error, details } => {
                error!(%error, details = ?details, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    error,
                    details,
                )
            },
        };

        let body = ErrorResponse {
            error,
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            e if e.is_client_error() => Self::BadRequest(e.to_string()),
            e if e.is_not_found() => Self::NotFound(e.to_string()),
            ApplicationError::RoutingFailed(detail) => Self::Internal {
                error: "Route calculation failed".to_string(),
                details: Some(detail),
            },
            ApplicationError::ExternalService(detail) => Self::Internal {
                error: format!("Failed to calculate route: {detail}"),
                details: None,
            },
            e => Self::Internal {
                error: e.to_string(),
                details: None,
            },
        }
    }
}
