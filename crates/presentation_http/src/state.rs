//! Application state shared across handlers

use std::sync::Arc;

use application::{LocationSearchService, RouteService};

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Free-text location search
    pub search_service: Arc<LocationSearchService>,
    /// Start/end resolution and route computation
    pub route_service: Arc<RouteService>,
}
