//! Wire models for the Nominatim and OpenRouteService APIs

use serde::{Deserialize, Serialize};

// --- Nominatim ---

/// A single place returned by Nominatim `/search`
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    /// Latitude as a decimal string
    pub lat: String,
    /// Longitude as a decimal string
    pub lon: String,
    /// Full human-readable address
    #[serde(default)]
    pub display_name: String,
    /// OSM place type, e.g. `city` or `house`
    #[serde(default, rename = "type")]
    pub place_type: Option<String>,
    /// Provider relevance score, 0..1
    #[serde(default)]
    pub importance: Option<f64>,
    /// Structured breakdown, present when `addressdetails=1`
    #[serde(default)]
    pub address: NominatimAddress,
}

impl NominatimPlace {
    /// Parse the string coordinates into `(latitude, longitude)`
    ///
    /// Returns `None` if either value is not a number.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat = self.lat.trim().parse().ok()?;
        let lon = self.lon.trim().parse().ok()?;
        Some((lat, lon))
    }
}

/// Address components of a Nominatim place
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NominatimAddress {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

// --- OpenRouteService ---

/// Body for `POST /v2/directions/{profile}/geojson`
#[derive(Debug, Clone, Serialize)]
pub struct DirectionsRequest {
    /// Waypoints in `[longitude, latitude]` order
    pub coordinates: Vec<[f64; 2]>,
    pub instructions: bool,
    pub preference: String,
    pub units: String,
    pub geometry: bool,
    pub geometry_simplify: bool,
    pub language: String,
}

impl DirectionsRequest {
    /// Driving request between two provider-order points
    #[must_use]
    pub fn between(start: [f64; 2], end: [f64; 2], language: &str) -> Self {
        Self {
            coordinates: vec![start, end],
            instructions: true,
            preference: "recommended".to_string(),
            units: "km".to_string(),
            geometry: true,
            geometry_simplify: false,
            language: language.to_string(),
        }
    }
}

/// GeoJSON feature collection returned by the directions endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub features: Vec<DirectionsFeature>,
}

impl DirectionsResponse {
    /// The primary route, if the provider found one
    #[must_use]
    pub fn into_first_feature(self) -> Option<DirectionsFeature> {
        self.features.into_iter().next()
    }
}

/// One route alternative
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsFeature {
    pub geometry: DirectionsGeometry,
    #[serde(default)]
    pub properties: DirectionsProperties,
}

/// LineString geometry, points in `[longitude, latitude]` order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectionsGeometry {
    #[serde(default)]
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectionsProperties {
    #[serde(default)]
    pub segments: Vec<DirectionsSegment>,
}

/// A leg between two waypoints
///
/// Distances are meters and durations seconds.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectionsSegment {
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub steps: Vec<DirectionsStep>,
}

/// A single turn-by-turn instruction
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectionsStep {
    #[serde(default)]
    pub instruction: String,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominatim_place_parsing() {
        let json = r#"[{
            "lat": "48.8566",
            "lon": "2.3522",
            "display_name": "Paris, Île-de-France, France",
            "type": "city",
            "importance": 0.94,
            "address": {"city": "Paris", "state": "Île-de-France", "country": "France"}
        }]"#;
        let places: Vec<NominatimPlace> = serde_json::from_str(json).unwrap();
        assert_eq!(places.len(), 1);

        let place = &places[0];
        assert_eq!(place.place_type.as_deref(), Some("city"));
        assert_eq!(place.address.city.as_deref(), Some("Paris"));
        assert!(place.address.town.is_none());

        let (lat, lon) = place.coordinates().unwrap();
        assert!((lat - 48.8566).abs() < 1e-9);
        assert!((lon - 2.3522).abs() < 1e-9);
    }

    #[test]
    fn test_nominatim_place_minimal() {
        let json = r#"{"lat": "1.5", "lon": "2.5"}"#;
        let place: NominatimPlace = serde_json::from_str(json).unwrap();
        assert!(place.display_name.is_empty());
        assert!(place.importance.is_none());
        assert!(place.address.country.is_none());
    }

    #[test]
    fn test_nominatim_bad_coordinates() {
        let json = r#"{"lat": "north", "lon": "2.5"}"#;
        let place: NominatimPlace = serde_json::from_str(json).unwrap();
        assert!(place.coordinates().is_none());
    }

    #[test]
    fn test_directions_request_body() {
        let request = DirectionsRequest::between([-73.0, 40.0], [-74.0, 41.0], "en");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["coordinates"][0][0], -73.0);
        assert_eq!(json["coordinates"][0][1], 40.0);
        assert_eq!(json["instructions"], true);
        assert_eq!(json["preference"], "recommended");
        assert_eq!(json["units"], "km");
        assert_eq!(json["geometry_simplify"], false);
        assert_eq!(json["language"], "en");
    }

    #[test]
    fn test_directions_response_parsing() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {"type": "LineString", "coordinates": [[8.68, 49.41], [8.69, 49.42]]},
                "properties": {
                    "segments": [{
                        "distance": 1520.4,
                        "duration": 240.0,
                        "steps": [
                            {"instruction": "Head north", "distance": 1500.0, "duration": 230.0, "type": 11},
                            {"instruction": "Arrive", "distance": 20.4, "duration": 10.0, "type": 10}
                        ]
                    }],
                    "summary": {"distance": 1520.4, "duration": 240.0}
                }
            }]
        }"#;
        let response: DirectionsResponse = serde_json::from_str(json).unwrap();
        let feature = response.into_first_feature().unwrap();

        assert_eq!(feature.geometry.coordinates.len(), 2);
        assert_eq!(feature.geometry.coordinates[0], [8.68, 49.41]);
        let segment = &feature.properties.segments[0];
        assert_eq!(segment.steps.len(), 2);
        assert_eq!(segment.steps[1].instruction, "Arrive");
    }

    #[test]
    fn test_directions_response_without_features() {
        let response: DirectionsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_first_feature().is_none());
    }

    #[test]
    fn test_feature_without_segments() {
        let json = r#"{"features": [{"geometry": {"coordinates": []}, "properties": {}}]}"#;
        let response: DirectionsResponse = serde_json::from_str(json).unwrap();
        let feature = response.into_first_feature().unwrap();
        assert!(feature.properties.segments.is_empty());
    }
}
