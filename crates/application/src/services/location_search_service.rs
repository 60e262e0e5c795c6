//! Location search service - autocomplete-style place lookup

use std::{fmt, sync::Arc};

use domain::{SearchResult, rank_by_importance};
use tracing::{debug, error, instrument};

use crate::{error::ApplicationError, ports::GeocodingPort};

/// Queries shorter than this (in characters) are answered without a lookup
pub const MIN_QUERY_CHARS: usize = 3;

/// Default number of candidates requested from the geocoder
pub const DEFAULT_MAX_RESULTS: u8 = 5;

/// Service for free-text location search
pub struct LocationSearchService {
    geocoder: Arc<dyn GeocodingPort>,
    max_results: u8,
}

impl fmt::Debug for LocationSearchService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationSearchService")
            .field("max_results", &self.max_results)
            .finish_non_exhaustive()
    }
}

impl LocationSearchService {
    /// Create a new search service
    pub fn new(geocoder: Arc<dyn GeocodingPort>) -> Self {
        Self {
            geocoder,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Override the number of candidates requested per search
    #[must_use]
    pub const fn with_max_results(mut self, max_results: u8) -> Self {
        self.max_results = max_results;
        self
    }

    /// Search for places matching `query`, most important first
    ///
    /// Partial input below [`MIN_QUERY_CHARS`] yields an empty list without
    /// contacting the geocoder.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ApplicationError> {
        if query.chars().count() < MIN_QUERY_CHARS {
            debug!("Query too short, skipping geocoder");
            return Ok(Vec::new());
        }

        let candidates = self
            .geocoder
            .search(query, self.max_results)
            .await
            .inspect_err(|e| error!(%query, error = %e, "Search error"))?;

        let mut results: Vec<SearchResult> =
            candidates.into_iter().map(SearchResult::from).collect();
        rank_by_importance(&mut results);

        debug!(count = results.len(), "Search results formatted");
        Ok(results)
    }
}
