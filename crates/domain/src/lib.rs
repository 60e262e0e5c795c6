//! Domain layer for Cyberpath
//!
//! Contains location parsing, search result formatting and route
//! post-processing. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
