//! HTTP server configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line output
    #[default]
    Text,
    /// Structured JSON, one object per line
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins (empty = allow any origin)
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Graceful shutdown timeout in seconds
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout_secs: u64,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,

    /// Maximum body size for JSON requests in bytes (default: 1MB)
    #[serde(default = "default_max_body_json")]
    pub max_body_size_json_bytes: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    5000
}

const fn default_shutdown_timeout() -> u64 {
    30
}

const fn default_max_body_json() -> usize {
    1024 * 1024 // 1MB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
            shutdown_timeout_secs: default_shutdown_timeout(),
            log_format: LogFormat::default(),
            max_body_size_json_bytes: default_max_body_json(),
        }
    }
}

impl ServerConfig {
    /// Socket address string, `host:port`
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:5000");
        assert_eq!(config.shutdown_timeout_secs, 30);
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.max_body_size_json_bytes, 1_048_576);
        assert!(config.allowed_origins.is_empty());
    }

    #[test]
    fn test_log_format_parsing() {
        let config: ServerConfig = serde_json::from_str(r#"{"log_format": "json"}"#).unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_format.to_string(), "json");

        let result: Result<ServerConfig, _> = serde_json::from_str(r#"{"log_format": "xml"}"#);
        assert!(result.is_err());
    }
}
