//! Connector configuration.

use serde::Deserialize;
use std::time::Duration;

/// Settings for reaching the gateway.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConnectorConfig {
    /// Base URL of the gateway, without a trailing path.
    pub gateway_url: String,

    /// Per-request timeout in milliseconds.
    pub request_timeout_ms: u64,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            gateway_url: "http://127.0.0.1:3000".to_string(),
            request_timeout_ms: 30_000,
        }
    }
}

impl ConnectorConfig {
    /// Create a config pointing at `gateway_url` with default timeouts.
    pub fn new(gateway_url: impl Into<String>) -> Self {
        Self {
            gateway_url: gateway_url.into(),
            ..Self::default()
        }
    }

    /// Set the per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_ms = timeout.as_millis() as u64;
        self
    }

    /// Per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.gateway_url.trim();
        if url.is_empty() {
            return Err(ConfigError::MissingGatewayUrl);
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(self.gateway_url.clone()));
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("gateway_url must be set")]
    MissingGatewayUrl,

    #[error("gateway_url must use http or https: {0}")]
    UnsupportedScheme(String),

    #[error("request_timeout_ms must be greater than 0")]
    ZeroTimeout,

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ConnectorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_url_rejected() {
        let config = ConnectorConfig::new("  ");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingGatewayUrl)
        ));
    }

    #[test]
    fn test_scheme_required() {
        let config = ConnectorConfig::new("127.0.0.1:3000");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config =
            ConnectorConfig::new("http://localhost:3000").with_request_timeout(Duration::ZERO);
        assert!(matches!(config.validate(), Err(ConfigError::ZeroTimeout)));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ConnectorConfig = toml::from_str(r#"gateway_url = "http://gw:8080""#).unwrap();
        assert_eq!(config.gateway_url, "http://gw:8080");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }
}
