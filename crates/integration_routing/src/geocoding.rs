//! Nominatim geocoding client
//!
//! Converts free-form place descriptions to coordinates using the
//! [Nominatim](https://nominatim.openstreetmap.org) API (OpenStreetMap).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::NominatimPlace;

/// Configuration for the Nominatim geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Base URL for the Nominatim API
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// User agent sent with every request, required by the usage policy
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "default_geocoding_timeout_secs")]
    pub timeout_secs: u64,

    /// Preferred result language (`accept-language`)
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_geocoding_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_user_agent() -> String {
    "cyber_path_finder".to_string()
}

const fn default_geocoding_timeout_secs() -> u64 {
    10
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_geocoding_timeout_secs(),
            language: default_language(),
        }
    }
}

impl NominatimConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }
}

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to geocoding service failed
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,
}

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Look up to `limit` places matching `query`, with address details
    async fn search(&self, query: &str, limit: u8) -> Result<Vec<NominatimPlace>, GeocodingError>;

    /// Resolve an address to its single best match
    async fn geocode(&self, address: &str) -> Result<Option<NominatimPlace>, GeocodingError>;
}

/// Nominatim-based geocoding client
#[derive(Debug)]
pub struct NominatimGeocodingClient {
    client: Client,
    config: NominatimConfig,
}

impl NominatimGeocodingClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    async fn query(&self, query: &str, limit: u8) -> Result<Vec<NominatimPlace>, GeocodingError> {
        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        let params = [
            ("q", query.to_string()),
            ("format", "json".to_string()),
            ("limit", limit.to_string()),
            ("addressdetails", "1".to_string()),
            ("accept-language", self.config.language.clone()),
        ];

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Geocoding provider returned an error");
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl GeocodingClient for NominatimGeocodingClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str, limit: u8) -> Result<Vec<NominatimPlace>, GeocodingError> {
        let places = self.query(query, limit).await?;
        debug!(count = places.len(), "Geocoding candidates received");
        Ok(places)
    }

    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Option<NominatimPlace>, GeocodingError> {
        let place = self.query(address, 1).await?.into_iter().next();
        match &place {
            Some(p) => debug!(lat = %p.lat, lon = %p.lon, "Geocoded address"),
            None => debug!("No geocoding match"),
        }
        Ok(place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominatim_config_default() {
        let config = NominatimConfig::default();
        assert_eq!(config.base_url, "https://nominatim.openstreetmap.org");
        assert_eq!(config.user_agent, "cyber_path_finder");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.language, "en");
    }

    #[test]
    fn test_nominatim_config_for_testing() {
        let config = NominatimConfig::for_testing();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.user_agent, "cyber_path_finder");
    }

    #[test]
    fn test_geocoding_error_display() {
        let err = GeocodingError::RequestFailed("HTTP 503".to_string());
        assert!(err.to_string().contains("503"));

        let err = GeocodingError::Timeout;
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_client_builds() {
        let client = NominatimGeocodingClient::new(&NominatimConfig::for_testing());
        assert!(client.is_ok());
    }

    #[test]
    fn test_nominatim_config_partial_deserialization() {
        let config: NominatimConfig =
            serde_json::from_str(r#"{"language": "de"}"#).unwrap();
        assert_eq!(config.language, "de");
        assert_eq!(config.base_url, "https://nominatim.openstreetmap.org");
    }
}
