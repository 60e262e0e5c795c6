//! Route service - resolves both ends of a trip and post-processes directions

use std::{fmt, sync::Arc};

use domain::{GeoLocation, LocationQuery, RouteResult, RouteSide};
use tracing::{debug, error, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{GeocodingPort, RoutingPort},
};

/// Service for driving-route computation
pub struct RouteService {
    geocoder: Arc<dyn GeocodingPort>,
    router: Arc<dyn RoutingPort>,
}

impl fmt::Debug for RouteService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteService").finish_non_exhaustive()
    }
}

impl RouteService {
    /// Create a new route service
    pub fn new(geocoder: Arc<dyn GeocodingPort>, router: Arc<dyn RoutingPort>) -> Self {
        Self { geocoder, router }
    }

    /// Resolve one end of the route to coordinates
    ///
    /// `"lat,lon"` input is parsed directly; anything else is geocoded.
    #[instrument(skip(self))]
    pub async fn resolve(
        &self,
        raw: &str,
        side: RouteSide,
    ) -> Result<GeoLocation, ApplicationError> {
        let query = LocationQuery::parse(raw)
            .inspect_err(|e| warn!(%side, input = %raw, error = %e, "Invalid location input"))?;
        debug!(%side, %query, "Parsed location input");

        match query {
            LocationQuery::Coordinates(location) => Ok(location),
            LocationQuery::Address(address) => {
                self.geocoder
                    .geocode(&address)
                    .await?
                    .ok_or_else(|| {
                        warn!(%side, %address, "Location not found");
                        ApplicationError::LocationNotFound(side)
                    })
            },
        }
    }

    /// Compute a post-processed driving route between two location inputs
    #[instrument(skip(self))]
    pub async fn find_route(&self, start: &str, end: &str) -> Result<RouteResult, ApplicationError> {
        info!(%start, %end, "Received route request");

        let from = self.resolve(start, RouteSide::Start).await?;
        let to = self.resolve(end, RouteSide::End).await?;

        info!(
            start = ?from.to_provider_order(),
            end = ?to.to_provider_order(),
            "Processed coordinates"
        );

        let Some(provider_route) = self.router.driving_route(&from, &to).await? else {
            error!("No route found in response");
            return Err(ApplicationError::NoRouteFound);
        };

        let route = RouteResult::from_provider_route(provider_route);

        info!(
            api_km = %format!("{:.3}", route.provider_distance_km),
            calculated_km = %format!("{:.3}", route.path_distance_km),
            final_km = %format!("{:.3}", route.distance_km),
            "Route distances"
        );
        debug!(
            steps = ?route
                .steps
                .iter()
                .map(|s| format!("{:.3}", s.distance))
                .collect::<Vec<_>>(),
            "Step distances (km)"
        );

        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use domain::{DomainError, ProviderRoute, ProviderStep};

    use super::*;
    use crate::ports::{MockGeocodingPort, MockRoutingPort};

    fn sample_route() -> ProviderRoute {
        ProviderRoute {
            geometry: vec![[-73.0, 40.0], [-73.0, 40.01], [-73.01, 40.01]],
            distance_m: 2500.0,
            duration_s: 300.0,
            steps: vec![
                ProviderStep {
                    instruction: "Head north".to_string(),
                    distance_m: 1500.0,
                    duration_s: 180.0,
                },
                ProviderStep {
                    instruction: "Turn left".to_string(),
                    distance_m: 40.0,
                    duration_s: 10.0,
                },
                ProviderStep {
                    instruction: "Arrive at destination".to_string(),
                    distance_m: 960.0,
                    duration_s: 110.0,
                },
            ],
        }
    }

    fn service(geocoder: MockGeocodingPort, router: MockRoutingPort) -> RouteService {
        RouteService::new(Arc::new(geocoder), Arc::new(router))
    }

    #[tokio::test]
    async fn coordinates_resolve_without_geocoding() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder.expect_geocode().never();

        let svc = service(geocoder, MockRoutingPort::new());
        let location = svc.resolve("40.0,-73.0", RouteSide::Start).await.unwrap();

        assert_eq!(location.to_provider_order(), [-73.0, 40.0]);
    }

    #[tokio::test]
    async fn address_is_geocoded() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder
            .expect_geocode()
            .withf(|address| address == "Times Square")
            .times(1)
            .returning(|_| Ok(Some(GeoLocation::new(40.758, -73.9855).unwrap())));

        let svc = service(geocoder, MockRoutingPort::new());
        let location = svc.resolve("Times Square", RouteSide::End).await.unwrap();

        assert!((location.latitude() - 40.758).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn unknown_address_names_side() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder.expect_geocode().returning(|_| Ok(None));

        let svc = service(geocoder, MockRoutingPort::new());
        let err = svc.resolve("Atlantis", RouteSide::End).await.unwrap_err();

        assert!(matches!(err, ApplicationError::LocationNotFound(RouteSide::End)));
    }

    #[tokio::test]
    async fn malformed_pair_is_rejected() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder.expect_geocode().never();

        let svc = service(geocoder, MockRoutingPort::new());
        let err = svc.resolve("north,west", RouteSide::Start).await.unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::InvalidLocationQuery(_))
        ));
    }

    #[tokio::test]
    async fn find_route_post_processes_directions() {
        let mut router = MockRoutingPort::new();
        router
            .expect_driving_route()
            .withf(|start, end| {
                start.to_provider_order() == [-73.0, 40.0] && end.to_provider_order() == [-73.01, 40.01]
            })
            .times(1)
            .returning(|_, _| Ok(Some(sample_route())));

        let svc = service(MockGeocodingPort::new(), router);
        let route = svc.find_route("40.0,-73.0", "40.01,-73.01").await.unwrap();

        assert_eq!(route.geometry.len(), 3);
        assert_eq!(route.lat_lon_pairs()[0], [40.0, -73.0]);
        assert_eq!(route.steps.len(), 2);
        assert_eq!(route.steps[0].instruction, "Head north and turn left");
        assert!((route.duration_min - 5.0).abs() < 1e-9);
        assert!(route.distance_km >= 2.5);

        let total: f64 = route.steps.iter().map(|s| s.distance).sum();
        assert!((total - route.distance_km).abs() < 1e-9);
    }

    #[tokio::test]
    async fn start_failure_skips_end_and_router() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder
            .expect_geocode()
            .withf(|address| address == "Nowhere")
            .times(1)
            .returning(|_| Ok(None));
        let mut router = MockRoutingPort::new();
        router.expect_driving_route().never();

        let svc = service(geocoder, router);
        let err = svc.find_route("Nowhere", "Somewhere").await.unwrap_err();

        assert!(matches!(err, ApplicationError::LocationNotFound(RouteSide::Start)));
    }

    #[tokio::test]
    async fn missing_route_is_not_found() {
        let mut router = MockRoutingPort::new();
        router.expect_driving_route().returning(|_, _| Ok(None));

        let svc = service(MockGeocodingPort::new(), router);
        let err = svc.find_route("1.0,2.0", "3.0,4.0").await.unwrap_err();

        assert!(matches!(err, ApplicationError::NoRouteFound));
    }

    #[tokio::test]
    async fn routing_failure_propagates() {
        let mut router = MockRoutingPort::new();
        router
            .expect_driving_route()
            .returning(|_, _| Err(ApplicationError::RoutingFailed("HTTP 403".to_string())));

        let svc = service(MockGeocodingPort::new(), router);
        let err = svc.find_route("1.0,2.0", "3.0,4.0").await.unwrap_err();

        assert!(matches!(err, ApplicationError::RoutingFailed(_)));
    }
}
