//! Route finding handler

use axum::{Json, extract::State};
use domain::{RouteResult, RouteStep};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Route request body
///
/// Each side is either `"lat,lon"` or a free-form address.
#[derive(Debug, Deserialize, Validate)]
pub struct FindPathRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub start: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub end: String,
}

/// Route response body
#[derive(Debug, Serialize)]
pub struct FindPathResponse {
    pub success: bool,
    /// Polyline as `[latitude, longitude]` pairs
    pub route: Vec<[f64; 2]>,
    /// Total distance in kilometers
    pub distance: f64,
    /// Total duration in minutes
    pub duration: f64,
    pub instructions: Vec<RouteStep>,
}

impl From<RouteResult> for FindPathResponse {
    fn from(result: RouteResult) -> Self {
        Self {
            success: true,
            route: result.lat_lon_pairs(),
            distance: result.distance_km,
            duration: result.duration_min,
            instructions: result.steps,
        }
    }
}

/// Handle a route request
#[instrument(skip(state, request))]
pub async fn find_path(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<FindPathRequest>,
) -> Result<Json<FindPathResponse>, ApiError> {
    let result = state
        .route_service
        .find_route(&request.start, &request.end)
        .await?;

    Ok(Json(result.into()))
}
