//! Configuration management
//!
//! Settings are read from environment variables with built-in defaults.
//! `.env` loading is the binary's responsibility (dotenvy).

use serde::{Deserialize, Serialize};

/// Main configuration for devterm-web
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// HTTP client tool configuration
    #[serde(default)]
    pub http_tool: HttpToolConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind the HTTP server to
    #[serde(default = "default_api_host")]
    pub host: String,

    /// Port for the HTTP server
    #[serde(default = "default_api_port")]
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_api_host(),
            port: default_api_port(),
        }
    }
}

/// Settings for the outbound HTTP client tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpToolConfig {
    /// Request timeout in seconds
    #[serde(default = "default_http_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of response body characters returned
    #[serde(default = "default_http_max_body_chars")]
    pub max_body_chars: usize,
}

impl Default for HttpToolConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_http_timeout_secs(),
            max_body_chars: default_http_max_body_chars(),
        }
    }
}

fn default_api_host() -> String {
    "127.0.0.1".to_string()
}

fn default_api_port() -> u16 {
    5000
}

fn default_http_timeout_secs() -> u64 {
    30
}

fn default_http_max_body_chars() -> usize {
    2000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> crate::Result<Self> {
        Ok(Config {
            api: ApiConfig {
                host: std::env::var("API_HOST").unwrap_or_else(|_| default_api_host()),
                port: std::env::var("API_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or_else(default_api_port),
            },
            http_tool: HttpToolConfig {
                timeout_secs: std::env::var("HTTP_TOOL_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or_else(default_http_timeout_secs),
                max_body_chars: std::env::var("HTTP_TOOL_MAX_BODY_CHARS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or_else(default_http_max_body_chars),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.api.host, "127.0.0.1");
        assert_eq!(config.api.port, 5000);
        assert_eq!(config.http_tool.timeout_secs, 30);
        assert_eq!(config.http_tool.max_body_chars, 2000);
    }
}
