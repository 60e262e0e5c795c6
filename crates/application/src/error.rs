//! Application-level errors

use domain::{DomainError, RouteSide};
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error, typically malformed input
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A free-text location could not be geocoded
    #[error("{0} location not found")]
    LocationNotFound(RouteSide),

    /// The routing provider answered but returned no usable route
    #[error("No route found")]
    NoRouteFound,

    /// The routing provider rejected the directions request
    #[error("Route calculation failed: {0}")]
    RoutingFailed(String),

    /// Transport or protocol failure talking to an external provider
    #[error("External service error: {0}")]
    ExternalService(String),
}

impl ApplicationError {
    /// Returns true if the error is the caller's fault rather than a provider's
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Domain(_))
    }

    /// Returns true if the requested thing does not exist
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::LocationNotFound(_) | Self::NoRouteFound)
    }
}
