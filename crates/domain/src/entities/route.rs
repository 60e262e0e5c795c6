//! Driving routes and their post-processing
//!
//! [`ProviderRoute`] is what the routing provider returned, still in provider
//! units (meters, seconds) and provider coordinate order (`[lon, lat]`).
//! [`RouteResult::from_provider_route`] turns it into the client shape:
//!
//! 1. geometry is flipped to latitude/longitude,
//! 2. steps shorter than [`SHORT_STEP_KM`] are folded into the step before,
//! 3. the total distance is reconciled against the great-circle length of the
//!    geometry (the larger of the two wins),
//! 4. step distances are scaled so that they add up to that total.

use serde::{Deserialize, Serialize};

use crate::value_objects::{GeoLocation, path_length_km};

/// Steps shorter than this (in km) are merged into the preceding step
pub const SHORT_STEP_KM: f64 = 0.1;

const METERS_PER_KM: f64 = 1000.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// One turn-by-turn step as reported by the routing provider
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderStep {
    pub instruction: String,
    /// Distance in meters
    pub distance_m: f64,
    /// Duration in seconds
    pub duration_s: f64,
}

/// A route as reported by the routing provider
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRoute {
    /// Geometry in provider order (`[longitude, latitude]`)
    pub geometry: Vec<[f64; 2]>,
    /// Aggregate distance of the first segment in meters
    pub distance_m: f64,
    /// Aggregate duration of the first segment in seconds
    pub duration_s: f64,
    /// Steps of the first segment, in travel order
    pub steps: Vec<ProviderStep>,
}

/// A client-facing route instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub instruction: String,
    /// Distance in kilometers
    pub distance: f64,
    /// Duration in minutes
    pub duration: f64,
}

impl RouteStep {
    /// Fold a following step into this one
    ///
    /// An empty instruction leaves the text unchanged but its distance and
    /// duration are still added.
    fn absorb(&mut self, next: Self) {
        if !next.instruction.is_empty() {
            self.instruction = format!("{} and {}", self.instruction, next.instruction.to_lowercase());
        }
        self.distance += next.distance;
        self.duration += next.duration;
    }
}

impl From<&ProviderStep> for RouteStep {
    fn from(step: &ProviderStep) -> Self {
        Self {
            instruction: step.instruction.clone(),
            distance: step.distance_m / METERS_PER_KM,
            duration: step.duration_s / SECONDS_PER_MINUTE,
        }
    }
}

/// A fully post-processed driving route
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    /// Route geometry in travel order
    pub geometry: Vec<GeoLocation>,
    /// Reported total distance in km, never below the provider's figure
    pub distance_km: f64,
    /// Provider's total duration in minutes
    pub duration_min: f64,
    /// Merged and rescaled instructions
    pub steps: Vec<RouteStep>,
    /// Provider's own aggregate distance in km
    pub provider_distance_km: f64,
    /// Great-circle length of the geometry in km
    pub path_distance_km: f64,
}

impl RouteResult {
    /// Post-process a provider route into its client shape
    #[must_use]
    pub fn from_provider_route(route: ProviderRoute) -> Self {
        let geometry: Vec<GeoLocation> = route
            .geometry
            .iter()
            .copied()
            .map(GeoLocation::from_provider_order)
            .collect();

        let provider_distance_km = route.distance_m / METERS_PER_KM;
        let duration_min = route.duration_s / SECONDS_PER_MINUTE;
        let path_distance_km = path_length_km(&geometry);
        let distance_km = provider_distance_km.max(path_distance_km);

        let steps = rescale_steps(merge_short_steps(&route.steps), distance_km);

        Self {
            geometry,
            distance_km,
            duration_min,
            steps,
            provider_distance_km,
            path_distance_km,
        }
    }

    /// Geometry as `[latitude, longitude]` pairs
    #[must_use]
    pub fn lat_lon_pairs(&self) -> Vec<[f64; 2]> {
        self.geometry.iter().map(GeoLocation::to_lat_lon).collect()
    }
}

/// Convert provider steps to kilometers/minutes and merge negligible ones
///
/// A step under [`SHORT_STEP_KM`] is folded into the previously emitted step.
/// A short step with nothing before it is emitted on its own.
#[must_use]
pub fn merge_short_steps(steps: &[ProviderStep]) -> Vec<RouteStep> {
    steps.iter().map(RouteStep::from).fold(
        Vec::with_capacity(steps.len()),
        |mut merged: Vec<RouteStep>, step| {
            match merged.last_mut() {
                Some(previous) if step.distance < SHORT_STEP_KM => previous.absorb(step),
                _ => merged.push(step),
            }
            merged
        },
    )
}

/// Scale step distances so they sum to `total_km`
///
/// Steps are returned unchanged when their distances sum to zero.
#[must_use]
pub fn rescale_steps(steps: Vec<RouteStep>, total_km: f64) -> Vec<RouteStep> {
    let emitted_km: f64 = steps.iter().map(|s| s.distance).sum();
    if emitted_km <= 0.0 {
        return steps;
    }

    let factor = total_km / emitted_km;
    steps
        .into_iter()
        .map(|step| RouteStep {
            distance: step.distance * factor,
            ..step
        })
        .collect()
}
