//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `integrations`: geocoding and routing providers

mod integrations;
mod server;

use serde::{Deserialize, Serialize};

pub use integrations::{GeocodingAppConfig, RoutingAppConfig};
pub use server::{LogFormat, ServerConfig};

/// Prefix for environment overrides, e.g. `CYBERPATH__SERVER__PORT`
pub const ENV_PREFIX: &str = "CYBERPATH";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Geocoding provider configuration
    #[serde(default)]
    pub geocoding: GeocodingAppConfig,

    /// Routing provider configuration
    #[serde(default)]
    pub routing: RoutingAppConfig,
}

impl AppConfig {
    /// Load configuration from an optional `config.toml` and the environment
    ///
    /// Environment variables take precedence, using `__` between path
    /// segments (e.g. `CYBERPATH__ROUTING__API_KEY`).
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(config::File::with_name("config").required(false))
    }

    fn load_with<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Validate all sections
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        self.geocoding.validate()?;
        self.routing.validate()
    }
}
