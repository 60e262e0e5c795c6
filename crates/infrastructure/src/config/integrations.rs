//! Provider configurations: geocoding (Nominatim) and routing (OpenRouteService).

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

// ==============================
// Geocoding Configuration
// ==============================

/// Geocoding service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingAppConfig {
    /// Nominatim API base URL
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// User agent sent to Nominatim
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum candidates returned by location search
    #[serde(default = "default_search_limit")]
    pub search_limit: u8,

    /// Preferred result language
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_geocoding_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_user_agent() -> String {
    "cyber_path_finder".to_string()
}

const fn default_timeout() -> u64 {
    10
}

const fn default_search_limit() -> u8 {
    5
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for GeocodingAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout(),
            search_limit: default_search_limit(),
            language: default_language(),
        }
    }
}

impl GeocodingAppConfig {
    /// Convert to `integration_routing::NominatimConfig`
    #[must_use]
    pub fn to_nominatim_config(&self) -> integration_routing::NominatimConfig {
        integration_routing::NominatimConfig {
            base_url: self.base_url.clone(),
            user_agent: self.user_agent.clone(),
            timeout_secs: self.timeout_secs,
            language: self.language.clone(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("geocoding.base_url must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("geocoding.timeout_secs must be greater than 0".to_string());
        }
        if !(1..=50).contains(&self.search_limit) {
            return Err("geocoding.search_limit must be between 1 and 50".to_string());
        }
        Ok(())
    }
}

// ==============================
// Routing Configuration
// ==============================

/// Routing service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingAppConfig {
    /// OpenRouteService API base URL
    #[serde(default = "default_routing_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Routing profile
    #[serde(default = "default_profile")]
    pub profile: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Language for turn-by-turn instructions
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_routing_base_url() -> String {
    "https://api.openrouteservice.org".to_string()
}

fn default_profile() -> String {
    "driving-car".to_string()
}

impl Default for RoutingAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_routing_base_url(),
            api_key: None,
            profile: default_profile(),
            timeout_secs: default_timeout(),
            language: default_language(),
        }
    }
}

impl RoutingAppConfig {
    /// Returns true if an API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().is_empty())
    }

    /// Convert to `integration_routing::RoutingConfig`
    #[must_use]
    pub fn to_routing_config(&self) -> integration_routing::RoutingConfig {
        integration_routing::RoutingConfig {
            base_url: self.base_url.clone(),
            api_key: self
                .api_key
                .as_ref()
                .map(|key| key.expose_secret().to_string())
                .filter(|key| !key.is_empty()),
            profile: self.profile.clone(),
            timeout_secs: self.timeout_secs,
            language: self.language.clone(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("routing.base_url must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("routing.timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocoding_defaults() {
        let config = GeocodingAppConfig::default();
        assert_eq!(config.search_limit, 5);
        assert!(config.validate().is_ok());

        let nominatim = config.to_nominatim_config();
        assert_eq!(nominatim.user_agent, "cyber_path_finder");
        assert_eq!(nominatim.timeout_secs, 10);
    }

    #[test]
    fn test_geocoding_search_limit_bounds() {
        let mut config = GeocodingAppConfig {
            search_limit: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.search_limit = 51;
        assert!(config.validate().is_err());

        config.search_limit = 50;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_routing_api_key_exposed_only_to_client_config() {
        let config = RoutingAppConfig {
            api_key: Some(SecretString::from("ors-secret".to_string())),
            ..Default::default()
        };
        assert!(config.has_api_key());
        assert!(!format!("{config:?}").contains("ors-secret"));
        assert_eq!(
            config.to_routing_config().api_key.as_deref(),
            Some("ors-secret")
        );
    }

    #[test]
    fn test_routing_empty_api_key_treated_as_missing() {
        let config = RoutingAppConfig {
            api_key: Some(SecretString::from(String::new())),
            ..Default::default()
        };
        assert!(!config.has_api_key());
        assert!(config.to_routing_config().api_key.is_none());
    }

    #[test]
    fn test_routing_api_key_not_serialized() {
        let config = RoutingAppConfig {
            api_key: Some(SecretString::from("ors-secret".to_string())),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("ors-secret"));
    }

    #[test]
    fn test_routing_zero_timeout_rejected() {
        let config = RoutingAppConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
