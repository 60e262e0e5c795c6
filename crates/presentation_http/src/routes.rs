//! Route definitions

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use infrastructure::ServerConfig;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::warn;

use crate::{handlers, middleware::RequestIdLayer, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/search_location", post(handlers::search::search_location))
        .route("/find_path", post(handlers::route::find_path))
        .with_state(state)
}

/// Create the router wrapped in the server's middleware stack
///
/// Layers, outermost first: request ID, tracing, CORS, body size limit.
pub fn create_app(state: AppState, server: &ServerConfig) -> Router {
    create_router(state)
        .layer(RequestBodyLimitLayer::new(server.max_body_size_json_bytes))
        .layer(cors_layer(&server.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| {
            o.parse()
                .inspect_err(|_| warn!(origin = %o, "Ignoring invalid CORS origin"))
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}
