//! Cyberpath HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use application::{
    LocationSearchService, RouteService,
    ports::{GeocodingPort, RoutingPort},
};
use infrastructure::{AppConfig, NominatimGeocodingAdapter, OpenRouteServiceAdapter, init_tracing};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Config first so the log format is known before the subscriber exists
    let config_result = AppConfig::load();
    let config = config_result.as_ref().cloned().unwrap_or_default();

    init_tracing(config.server.log_format)?;

    if let Err(e) = &config_result {
        warn!("Failed to load config, using defaults: {e}");
    }

    info!("Cyberpath v{} starting...", env!("CARGO_PKG_VERSION"));

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        geocoder = %config.geocoding.base_url,
        router = %config.routing.base_url,
        profile = %config.routing.profile,
        "Configuration loaded"
    );

    if !config.routing.has_api_key() {
        warn!("CYBERPATH__ROUTING__API_KEY is not set; route requests will fail");
    }

    let geocoder: Arc<dyn GeocodingPort> = Arc::new(
        NominatimGeocodingAdapter::from_config(&config.geocoding)
            .context("Failed to initialize geocoding client")?,
    );
    let router: Arc<dyn RoutingPort> = Arc::new(
        OpenRouteServiceAdapter::from_config(&config.routing)
            .context("Failed to initialize routing client")?,
    );

    let state = AppState {
        search_service: Arc::new(
            LocationSearchService::new(Arc::clone(&geocoder))
                .with_max_results(config.geocoding.search_limit),
        ),
        route_service: Arc::new(RouteService::new(geocoder, router)),
    };

    let app = routes::create_app(state, &config.server);

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
}
