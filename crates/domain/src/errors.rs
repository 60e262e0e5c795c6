//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates outside the valid latitude/longitude range
    #[error("{0}")]
    InvalidCoordinates(String),

    /// Location input that is neither a usable address nor a numeric pair
    #[error("Invalid location: {0}")]
    InvalidLocationQuery(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_location_query_message() {
        let err = DomainError::InvalidLocationQuery("'abc' is not a number".to_string());
        assert_eq!(err.to_string(), "Invalid location: 'abc' is not a number");
    }

    #[test]
    fn invalid_coordinates_message_is_passed_through() {
        let err = DomainError::InvalidCoordinates("latitude out of range".to_string());
        assert_eq!(err.to_string(), "latitude out of range");
    }
}
