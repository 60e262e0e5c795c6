//! Geographic location value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean earth radius used for great-circle distances
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic location with latitude and longitude
///
/// Internally always stored as latitude/longitude. The routing provider speaks
/// `[longitude, latitude]` ("provider order"); use [`GeoLocation::from_provider_order`]
/// and [`GeoLocation::to_provider_order`] at that boundary and
/// [`GeoLocation::to_lat_lon`] when handing pairs to the client.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

/// Error type for invalid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCoordinates;

impl fmt::Display for InvalidCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180"
        )
    }
}

impl std::error::Error for InvalidCoordinates {}

impl GeoLocation {
    /// Create a new location with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinates);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a location without validation (for trusted sources)
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build a location from a routing-provider `[longitude, latitude]` pair
    ///
    /// Provider geometry is trusted and not range-checked.
    #[must_use]
    pub const fn from_provider_order(pair: [f64; 2]) -> Self {
        Self::new_unchecked(pair[1], pair[0])
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// `[longitude, latitude]`, the order the routing provider expects
    #[must_use]
    pub const fn to_provider_order(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// `[latitude, longitude]`, the order returned to clients
    #[must_use]
    pub const fn to_lat_lon(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }

    /// Calculate approximate distance to another location in kilometers
    ///
    /// Uses the Haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
    /// Results can differ from an ellipsoidal (WGS-84) geodesic by up to
    /// about 0.5%.
    #[must_use]
    pub fn distance_km(&self, other: &Self) -> f64 {
        let lat1_rad = self.latitude.to_radians();
        let lat2_rad = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (lat1_rad.cos() * lat2_rad.cos()).mul_add(
            (delta_lon / 2.0).sin().powi(2),
            (delta_lat / 2.0).sin().powi(2),
        );
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Total great-circle length of a polyline in kilometers
///
/// Sums the distance between every consecutive pair of points. Empty and
/// single-point paths have length zero.
#[must_use]
pub fn path_length_km(points: &[GeoLocation]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[0].distance_km(&pair[1]))
        .sum()
}
