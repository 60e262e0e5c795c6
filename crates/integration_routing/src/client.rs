//! OpenRouteService directions client
//!
//! Requests driving routes with full turn-by-turn instructions from the
//! [OpenRouteService](https://openrouteservice.org) GeoJSON directions API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header::AUTHORIZATION};
use tracing::{debug, error, info, instrument};

use crate::config::RoutingConfig;
use crate::error::RoutingError;
use crate::models::{DirectionsRequest, DirectionsResponse};

/// Trait for directions clients
#[async_trait]
pub trait RoutingClient: Send + Sync {
    /// Request a route between two `[longitude, latitude]` points
    async fn directions(
        &self,
        start: [f64; 2],
        end: [f64; 2],
    ) -> Result<DirectionsResponse, RoutingError>;
}

/// OpenRouteService directions client
#[derive(Debug)]
pub struct OpenRouteServiceClient {
    client: Client,
    config: RoutingConfig,
}

impl OpenRouteServiceClient {
    /// Create a new OpenRouteService client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &RoutingConfig) -> Result<Self, RoutingError> {
        config.validate().map_err(RoutingError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RoutingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn parse_directions_response(body: &str) -> Result<DirectionsResponse, RoutingError> {
        serde_json::from_str(body).map_err(|e| RoutingError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl RoutingClient for OpenRouteServiceClient {
    #[instrument(skip(self), fields(profile = %self.config.profile))]
    async fn directions(
        &self,
        start: [f64; 2],
        end: [f64; 2],
    ) -> Result<DirectionsResponse, RoutingError> {
        let url = self.config.directions_url();
        let request = DirectionsRequest::between(start, end, &self.config.language);

        debug!(
            body = %serde_json::to_string(&request).unwrap_or_default(),
            "Sending directions request"
        );

        let mut builder = self.client.post(&url).json(&request);
        if let Some(key) = &self.config.api_key {
            builder = builder.header(AUTHORIZATION, key);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                RoutingError::Timeout {
                    timeout_secs: self.config.timeout_secs,
                }
            } else {
                RoutingError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = response.status();
        info!(%status, "Directions response received");

        let body = response
            .text()
            .await
            .map_err(|e| RoutingError::ParseError(e.to_string()))?;

        if !status.is_success() {
            error!(%status, %body, "Directions request rejected");
            return Err(RoutingError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        Self::parse_directions_response(&body)
    }
}
