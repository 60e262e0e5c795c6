//! Location search handler

use axum::{Json, extract::State};
use domain::SearchResult;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Search request body
///
/// Short or missing queries are valid; only malformed bodies are rejected.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchLocationRequest {
    /// Partial place name; missing is treated as empty
    #[serde(default)]
    pub query: Option<String>,
}

/// Search response body
#[derive(Debug, Serialize)]
pub struct SearchLocationResponse {
    pub results: Vec<SearchResult>,
}

/// Handle an autocomplete search
#[instrument(skip(state, request))]
pub async fn search_location(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SearchLocationRequest>,
) -> Result<Json<SearchLocationResponse>, ApiError> {
    let query = request.query.unwrap_or_default();

    let results = state
        .search_service
        .search(&query)
        .await
        .map_err(|e| ApiError::search_failed(&e))?;

    Ok(Json(SearchLocationResponse { results }))
}
