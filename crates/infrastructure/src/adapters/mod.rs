//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod geocoding_adapter;
mod routing_adapter;

pub use geocoding_adapter::NominatimGeocodingAdapter;
pub use routing_adapter::OpenRouteServiceAdapter;
