//! Routing adapter - Implements RoutingPort using integration_routing

use application::error::ApplicationError;
use application::ports::RoutingPort;
use async_trait::async_trait;
use domain::{GeoLocation, ProviderRoute, ProviderStep};
use integration_routing::{
    DirectionsFeature, OpenRouteServiceClient, RoutingClient, RoutingError,
};
use tracing::{error, instrument, warn};

use crate::config::RoutingAppConfig;

/// Adapter for driving directions via OpenRouteService
#[derive(Debug)]
pub struct OpenRouteServiceAdapter {
    client: OpenRouteServiceClient,
}

impl OpenRouteServiceAdapter {
    /// Create a new routing adapter around an existing client
    pub const fn new(client: OpenRouteServiceClient) -> Self {
        Self { client }
    }

    /// Create a routing adapter from application configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn from_config(config: &RoutingAppConfig) -> Result<Self, ApplicationError> {
        if !config.has_api_key() {
            warn!("No routing API key configured; directions requests will be rejected");
        }
        OpenRouteServiceClient::new(&config.to_routing_config())
            .map(Self::new)
            .map_err(map_error)
    }

    /// Flatten the first feature into a provider route
    ///
    /// Totals and steps come from the first segment; a feature without
    /// segments has zero totals and no steps.
    fn convert_feature(feature: DirectionsFeature) -> ProviderRoute {
        let segment = feature.properties.segments.into_iter().next().unwrap_or_default();

        ProviderRoute {
            geometry: feature.geometry.coordinates,
            distance_m: segment.distance,
            duration_s: segment.duration,
            steps: segment
                .steps
                .into_iter()
                .map(|step| ProviderStep {
                    instruction: step.instruction,
                    distance_m: step.distance,
                    duration_s: step.duration,
                })
                .collect(),
        }
    }
}

fn map_error(e: RoutingError) -> ApplicationError {
    match e.status() {
        Some(status) => ApplicationError::RoutingFailed(format!("HTTP {status}")),
        None => ApplicationError::ExternalService(e.to_string()),
    }
}

#[async_trait]
impl RoutingPort for OpenRouteServiceAdapter {
    #[instrument(skip(self, start, end), fields(start = %start, end = %end))]
    async fn driving_route(
        &self,
        start: &GeoLocation,
        end: &GeoLocation,
    ) -> Result<Option<ProviderRoute>, ApplicationError> {
        let response = self
            .client
            .directions(start.to_provider_order(), end.to_provider_order())
            .await
            .map_err(|e| {
                error!(error = %e, "Directions request failed");
                map_error(e)
            })?;

        Ok(response.into_first_feature().map(Self::convert_feature))
    }
}
