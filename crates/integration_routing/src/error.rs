//! Routing error types

use thiserror::Error;

/// Errors that can occur while requesting directions
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Connection to the routing service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The routing service answered with a non-success status
    #[error("Request failed with HTTP {status}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Failed to parse response from the routing service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl RoutingError {
    /// HTTP status of a provider rejection, `None` for transport and parse failures
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_only_for_rejections() {
        let err = RoutingError::RequestFailed {
            status: 403,
            body: "{\"error\":\"Access to this API has been disallowed\"}".to_string(),
        };
        assert_eq!(err.status(), Some(403));
        assert!(RoutingError::ConnectionFailed("refused".to_string()).status().is_none());
        assert!(RoutingError::Timeout { timeout_secs: 10 }.status().is_none());
        assert!(RoutingError::ParseError("eof".to_string()).status().is_none());
    }

    #[test]
    fn test_error_display() {
        let err = RoutingError::RequestFailed {
            status: 403,
            body: "forbidden".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed with HTTP 403");

        let err = RoutingError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10"));
    }
}
