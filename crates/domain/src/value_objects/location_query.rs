//! User-supplied location specifier
//!
//! A location is either a `"lat,lon"` coordinate pair or free text that
//! still needs geocoding.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::GeoLocation;
use crate::errors::DomainError;

/// A parsed location input
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    /// Explicit coordinates, no geocoding needed
    Coordinates(GeoLocation),
    /// Free-form address to be geocoded
    Address(String),
}

impl LocationQuery {
    /// Parse a raw location string
    ///
    /// Any input containing a comma is treated as a `"lat,lon"` pair; only the
    /// first two comma-separated fields are read. Everything else is an address.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLocationQuery`] for empty input or a
    /// non-numeric pair, and [`DomainError::InvalidCoordinates`] when the pair
    /// is out of range.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DomainError::InvalidLocationQuery(
                "location must not be empty".to_string(),
            ));
        }

        if !raw.contains(',') {
            return Ok(Self::Address(raw.to_string()));
        }

        let mut parts = raw.split(',').map(str::trim);
        let (Some(lat), Some(lon)) = (parts.next(), parts.next()) else {
            return Err(DomainError::InvalidLocationQuery(raw.to_string()));
        };

        let latitude: f64 = lat
            .parse()
            .map_err(|_| DomainError::InvalidLocationQuery(format!("'{lat}' is not a number")))?;
        let longitude: f64 = lon
            .parse()
            .map_err(|_| DomainError::InvalidLocationQuery(format!("'{lon}' is not a number")))?;

        GeoLocation::new(latitude, longitude)
            .map(Self::Coordinates)
            .map_err(|e| DomainError::InvalidCoordinates(e.to_string()))
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coordinates(loc) => write!(f, "{loc}"),
            Self::Address(address) => write!(f, "{address}"),
        }
    }
}

/// Which end of a route a location belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteSide {
    Start,
    End,
}

impl RouteSide {
    /// Capitalized label used in user-facing messages
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::End => "End",
        }
    }
}

impl fmt::Display for RouteSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
