//! Domain entities - request-scoped search and route models

mod route;
mod search_result;

pub use route::{
    ProviderRoute, ProviderStep, RouteResult, RouteStep, SHORT_STEP_KM, merge_short_steps,
    rescale_steps,
};
pub use search_result::{AddressBreakdown, PlaceCandidate, SearchResult, rank_by_importance};
