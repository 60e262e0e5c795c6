//! Application layer - Use cases and orchestration
//!
//! Contains the location search and route use cases and the port
//! definitions they depend on.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
