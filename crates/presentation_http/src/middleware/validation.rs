//! Request validation
//!
//! Provides a `ValidatedJson` extractor that validates request bodies using the validator crate.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Validation error type
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] JsonRejection),
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::JsonError(e) => e.body_text(),
            Self::ValidationFailed(msg) => msg.clone(),
        };

        let body = serde_json::json!({
            "error": message,
            "code": "validation_error"
        });

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Render field errors as `field: message`, sorted by field name
fn describe(errors: &ValidationErrors) -> String {
    let mut lines: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                let msg = err
                    .message
                    .as_ref()
                    .map_or_else(|| err.code.to_string(), ToString::to_string);
                format!("{field}: {msg}")
            })
        })
        .collect();
    lines.sort();
    lines.join("; ")
}

/// A JSON extractor that also validates the request body
///
/// Malformed JSON, missing fields and failed validation rules all
/// produce `400 Bad Request`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value
            .validate()
            .map_err(|e| ValidationError::ValidationFailed(describe(&e)))?;
        Ok(Self(value))
    }
}
