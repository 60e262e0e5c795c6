//! HTTP middleware components
//!
//! Request correlation and validated JSON extraction.

pub mod request_id;
pub mod validation;

pub use request_id::{REQUEST_ID_HEADER, RequestIdLayer};
pub use validation::{ValidatedJson, ValidationError};
