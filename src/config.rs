//! Configuration for the dashboard client

use serde::Deserialize;

use crate::error::{DashboardError, Result};

/// Client configuration
///
/// Defaults match the inline `CONFIG` object the dashboard page used to
/// ship: API under `/api`, 30 second refresh, day-first date locale,
/// bearer token under the `access_token` storage key.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Prefix for every API endpoint
    pub api_base: String,

    /// Date formatting locale (day-first rendering for `es-ES`)
    pub locale: String,

    /// Dashboard auto-refresh interval in milliseconds
    pub refresh_interval_ms: u64,

    /// Local storage key holding the bearer token
    pub token_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            locale: "es-ES".to_string(),
            refresh_interval_ms: 30_000,
            token_key: "access_token".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON blob embedded in the page
    ///
    /// Unknown keys are ignored and missing keys fall back to defaults,
    /// so pages only override what they need.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_base.is_empty() {
            return Err(DashboardError::Config("api_base must not be empty".into()));
        }
        if self.api_base.ends_with('/') {
            return Err(DashboardError::Config(
                "api_base must not end with '/' (endpoints start with one)".into(),
            ));
        }
        if self.refresh_interval_ms == 0 {
            return Err(DashboardError::Config(
                "refresh_interval_ms must be positive".into(),
            ));
        }
        if self.token_key.is_empty() {
            return Err(DashboardError::Config("token_key must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.api_base, "/api");
        assert_eq!(config.refresh_interval_ms, 30_000);
        assert_eq!(config.token_key, "access_token");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_json_partial_override() {
        let config = Config::from_json(r#"{"api_base": "/v2/api", "refresh_interval_ms": 5000}"#)
            .expect("valid config");
        assert_eq!(config.api_base, "/v2/api");
        assert_eq!(config.refresh_interval_ms, 5000);
        // Untouched keys keep their defaults
        assert_eq!(config.locale, "es-ES");
    }

    #[test]
    fn test_config_rejects_trailing_slash() {
        let config = Config {
            api_base: "/api/".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DashboardError::Config(_))
        ));
    }

    #[test]
    fn test_config_rejects_zero_refresh() {
        let err = Config::from_json(r#"{"refresh_interval_ms": 0}"#).unwrap_err();
        assert!(err.to_string().contains("refresh_interval_ms"));
    }
}
