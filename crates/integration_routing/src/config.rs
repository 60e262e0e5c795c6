//! Routing service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the OpenRouteService directions API
#[derive(Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Base URL for the OpenRouteService API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent in the `Authorization` header
    #[serde(default)]
    pub api_key: Option<String>,

    /// Routing profile, e.g. `driving-car`
    #[serde(default = "default_profile")]
    pub profile: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Language for turn-by-turn instructions
    #[serde(default = "default_language")]
    pub language: String,
}

impl std::fmt::Debug for RoutingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("profile", &self.profile)
            .field("timeout_secs", &self.timeout_secs)
            .field("language", &self.language)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.openrouteservice.org".to_string()
}

fn default_profile() -> String {
    "driving-car".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            profile: default_profile(),
            timeout_secs: default_timeout_secs(),
            language: default_language(),
        }
    }
}

impl RoutingConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Directions endpoint for the configured profile
    #[must_use]
    pub fn directions_url(&self) -> String {
        format!(
            "{}/v2/directions/{}/geojson",
            self.base_url.trim_end_matches('/'),
            self.profile
        )
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.profile.is_empty() {
            return Err("profile must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
