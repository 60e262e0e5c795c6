//! Application services - Use case implementations

mod location_search_service;
mod route_service;

pub use location_search_service::{DEFAULT_MAX_RESULTS, LocationSearchService, MIN_QUERY_CHARS};
pub use route_service::RouteService;
