//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod location_query;

pub use geo_location::{EARTH_RADIUS_KM, GeoLocation, InvalidCoordinates, path_length_km};
pub use location_query::{LocationQuery, RouteSide};
