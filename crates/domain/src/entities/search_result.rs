//! Location search candidates and their client-facing formatting

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoLocation;

/// Structured address components reported by the geocoder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBreakdown {
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

impl AddressBreakdown {
    /// First non-empty settlement name: city, then town, then village
    #[must_use]
    pub fn settlement(&self) -> Option<&str> {
        [&self.city, &self.town, &self.village]
            .into_iter()
            .find_map(|part| non_empty(part.as_deref()))
    }

    /// State and country, skipping missing or empty parts
    #[must_use]
    pub fn region_parts(&self) -> Vec<&str> {
        [&self.state, &self.country]
            .into_iter()
            .filter_map(|part| non_empty(part.as_deref()))
            .collect()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// A raw geocoding match, independent of the provider's wire format
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceCandidate {
    /// Full display address
    pub display_name: String,
    /// Coordinates of the match
    pub location: GeoLocation,
    /// Provider place classification (e.g. "city", "house")
    pub place_type: Option<String>,
    /// Provider relevance score, usually 0..1
    pub importance: Option<f64>,
    /// Address component breakdown
    pub address: AddressBreakdown,
}

/// A formatted search result ready for the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Full display address
    pub name: String,
    /// Primary label, usually the settlement name
    pub main_text: String,
    /// Region context ("State, Country"), empty if unknown
    pub secondary_text: String,
    pub lat: f64,
    pub lng: f64,
    /// Provider place classification
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    /// Relevance score, 0 if the provider did not report one
    pub importance: f64,
}

impl From<PlaceCandidate> for SearchResult {
    fn from(candidate: PlaceCandidate) -> Self {
        let main_text = candidate.address.settlement().map_or_else(
            || {
                candidate
                    .display_name
                    .split(',')
                    .next()
                    .unwrap_or_default()
                    .to_string()
            },
            str::to_string,
        );
        let secondary_text = candidate.address.region_parts().join(", ");

        Self {
            main_text,
            secondary_text,
            lat: candidate.location.latitude(),
            lng: candidate.location.longitude(),
            place_type: candidate.place_type,
            importance: candidate.importance.unwrap_or(0.0),
            name: candidate.display_name,
        }
    }
}

/// Sort results by importance, highest first
///
/// The sort is stable: equally important results keep provider order.
pub fn rank_by_importance(results: &mut [SearchResult]) {
    results.sort_by(|a, b| b.importance.total_cmp(&a.importance));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(display_name: &str, address: AddressBreakdown) -> PlaceCandidate {
        PlaceCandidate {
            display_name: display_name.to_string(),
            location: GeoLocation::new(48.8566, 2.3522).unwrap(),
            place_type: Some("city".to_string()),
            importance: Some(0.9),
            address,
        }
    }

    fn result_with_importance(name: &str, importance: f64) -> SearchResult {
        SearchResult {
            name: name.to_string(),
            main_text: name.to_string(),
            secondary_text: String::new(),
            lat: 0.0,
            lng: 0.0,
            place_type: None,
            importance,
        }
    }

    #[test]
    fn city_becomes_main_text() {
        let result = SearchResult::from(candidate(
            "Paris, Île-de-France, France",
            AddressBreakdown {
                city: Some("Paris".to_string()),
                state: Some("Île-de-France".to_string()),
                country: Some("France".to_string()),
                ..Default::default()
            },
        ));
        assert_eq!(result.main_text, "Paris");
        assert_eq!(result.secondary_text, "Île-de-France, France");
        assert_eq!(result.name, "Paris, Île-de-France, France");
        assert!((result.lat - 48.8566).abs() < f64::EPSILON);
        assert!((result.lng - 2.3522).abs() < f64::EPSILON);
    }

    #[test]
    fn town_used_when_city_missing_or_empty() {
        let result = SearchResult::from(candidate(
            "Hamelin, Lower Saxony, Germany",
            AddressBreakdown {
                city: Some(String::new()),
                town: Some("Hamelin".to_string()),
                village: Some("Ignored".to_string()),
                ..Default::default()
            },
        ));
        assert_eq!(result.main_text, "Hamelin");
        assert_eq!(result.secondary_text, "");
    }

    #[test]
    fn village_used_as_last_settlement_option() {
        let address = AddressBreakdown {
            village: Some("Giethoorn".to_string()),
            country: Some("Netherlands".to_string()),
            ..Default::default()
        };
        assert_eq!(address.settlement(), Some("Giethoorn"));
        let result = SearchResult::from(candidate("Giethoorn, Netherlands", address));
        assert_eq!(result.secondary_text, "Netherlands");
    }

    #[test]
    fn falls_back_to_display_name_prefix() {
        let result = SearchResult::from(candidate(
            "Eiffel Tower, Avenue Anatole France, Paris",
            AddressBreakdown {
                state: Some("Île-de-France".to_string()),
                ..Default::default()
            },
        ));
        assert_eq!(result.main_text, "Eiffel Tower");
        assert_eq!(result.secondary_text, "Île-de-France");
    }

    #[test]
    fn display_name_without_comma_is_used_whole() {
        let result = SearchResult::from(candidate("Atlantis", AddressBreakdown::default()));
        assert_eq!(result.main_text, "Atlantis");
    }

    #[test]
    fn missing_importance_defaults_to_zero() {
        let mut c = candidate("Nowhere", AddressBreakdown::default());
        c.importance = None;
        let result = SearchResult::from(c);
        assert!(result.importance.abs() < f64::EPSILON);
    }

    #[test]
    fn ranking_is_descending_and_stable() {
        let mut results = vec![
            result_with_importance("a", 0.2),
            result_with_importance("b", 0.7),
            result_with_importance("c", 0.2),
            result_with_importance("d", 0.9),
        ];
        rank_by_importance(&mut results);
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn serializes_with_client_keys() {
        let result = SearchResult::from(candidate("Paris", AddressBreakdown::default()));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "city");
        assert_eq!(json["main_text"], "Paris");
        assert!(json.get("lng").is_some());
        assert!(json.get("place_type").is_none());
    }
}
