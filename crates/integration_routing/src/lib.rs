//! External provider clients for Cyberpath
//!
//! Provides free-text place lookup via
//! [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org) and driving
//! directions via [OpenRouteService](https://openrouteservice.org).
//!
//! # Architecture
//!
//! Each provider sits behind a client trait. [`GeocodingClient`] is implemented
//! by [`NominatimGeocodingClient`], [`RoutingClient`] by
//! [`OpenRouteServiceClient`]. Both speak the providers' raw wire models; the
//! infrastructure layer maps them onto domain types.
//!
//! Coordinates cross this crate in provider order, `[longitude, latitude]`.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_routing::{OpenRouteServiceClient, RoutingClient, RoutingConfig};
//!
//! let config = RoutingConfig {
//!     api_key: Some("ors-key".to_string()),
//!     ..RoutingConfig::default()
//! };
//! let client = OpenRouteServiceClient::new(&config)?;
//!
//! let directions = client
//!     .directions([13.405, 52.520], [13.369, 52.525])
//!     .await?;
//! ```

mod client;
mod config;
mod error;
mod geocoding;
mod models;

pub use client::{OpenRouteServiceClient, RoutingClient};
pub use config::RoutingConfig;
pub use error::RoutingError;
pub use geocoding::{GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient};
pub use models::{
    DirectionsFeature, DirectionsGeometry, DirectionsProperties, DirectionsRequest,
    DirectionsResponse, DirectionsSegment, DirectionsStep, NominatimAddress, NominatimPlace,
};
