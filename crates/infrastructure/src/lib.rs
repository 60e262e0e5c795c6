//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the Nominatim and OpenRouteService adapters, configuration
//! loading and tracing setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, GeocodingAppConfig, LogFormat, RoutingAppConfig, ServerConfig};
pub use telemetry::{TelemetryError, init_tracing};
