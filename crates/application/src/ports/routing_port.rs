//! Routing port
//!
//! Requests driving directions between two resolved points. Adapters are
//! responsible for sending coordinates in whatever order their provider uses.

use async_trait::async_trait;
use domain::{GeoLocation, ProviderRoute};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for driving directions
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Request a driving route from `start` to `end`
    ///
    /// Returns `Ok(None)` when the provider answered successfully but without a
    /// route, and [`ApplicationError::RoutingFailed`] when it rejected the request.
    async fn driving_route(
        &self,
        start: &GeoLocation,
        end: &GeoLocation,
    ) -> Result<Option<ProviderRoute>, ApplicationError>;
}
