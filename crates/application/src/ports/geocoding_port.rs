//! Geocoding port
//!
//! Translates free-text place descriptions into coordinates. The same port
//! backs both the location search endpoint and address resolution for routes.

use async_trait::async_trait;
use domain::{GeoLocation, PlaceCandidate};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for geocoding operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Search for up to `limit` candidates, including their address breakdown
    ///
    /// An empty result is not an error.
    async fn search(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<PlaceCandidate>, ApplicationError>;

    /// Resolve an address to its single best match, `None` if nothing matched
    async fn geocode(&self, address: &str) -> Result<Option<GeoLocation>, ApplicationError>;
}
