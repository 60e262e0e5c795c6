//! Geocoding adapter - Implements GeocodingPort using integration_routing

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::{AddressBreakdown, GeoLocation, PlaceCandidate};
use integration_routing::{
    GeocodingClient, GeocodingError, NominatimAddress, NominatimGeocodingClient, NominatimPlace,
};
use tracing::{debug, instrument, warn};

use crate::config::GeocodingAppConfig;

/// Adapter for place lookup via Nominatim
#[derive(Debug)]
pub struct NominatimGeocodingAdapter {
    client: NominatimGeocodingClient,
}

impl NominatimGeocodingAdapter {
    /// Create a new geocoding adapter around an existing client
    pub const fn new(client: NominatimGeocodingClient) -> Self {
        Self { client }
    }

    /// Create a geocoding adapter from application configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(config: &GeocodingAppConfig) -> Result<Self, ApplicationError> {
        NominatimGeocodingClient::new(&config.to_nominatim_config())
            .map(Self::new)
            .map_err(map_error)
    }

    /// Convert a raw Nominatim place to a domain candidate
    ///
    /// Places with unparseable or out-of-range coordinates yield `None`.
    fn convert_place(place: NominatimPlace) -> Option<PlaceCandidate> {
        let Some((lat, lon)) = place.coordinates() else {
            warn!(lat = %place.lat, lon = %place.lon, "Unparseable coordinates from geocoder");
            return None;
        };
        let location = GeoLocation::new(lat, lon).ok()?;

        Some(PlaceCandidate {
            display_name: place.display_name,
            location,
            place_type: place.place_type,
            importance: place.importance,
            address: Self::convert_address(place.address),
        })
    }

    fn convert_address(address: NominatimAddress) -> AddressBreakdown {
        AddressBreakdown {
            city: address.city,
            town: address.town,
            village: address.village,
            state: address.state,
            country: address.country,
        }
    }
}

fn map_error(e: GeocodingError) -> ApplicationError {
    ApplicationError::ExternalService(e.to_string())
}

#[async_trait]
impl GeocodingPort for NominatimGeocodingAdapter {
    #[instrument(skip(self))]
    async fn search(&self, query: &str, limit: u8) -> Result<Vec<PlaceCandidate>, ApplicationError> {
        let places = self.client.search(query, limit).await.map_err(map_error)?;

        let candidates: Vec<PlaceCandidate> =
            places.into_iter().filter_map(Self::convert_place).collect();
        debug!(count = candidates.len(), "Converted geocoding candidates");
        Ok(candidates)
    }

    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Option<GeoLocation>, ApplicationError> {
        let place = self.client.geocode(address).await.map_err(|e| {
            warn!(%address, error = %e, "Failed to geocode address");
            map_error(e)
        })?;

        Ok(place
            .and_then(Self::convert_place)
            .map(|candidate| candidate.location))
    }
}
