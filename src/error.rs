//! Error types for the dashboard client
//!
//! Uses thiserror for ergonomic error definitions.
//! All errors are non-panicking for production safety.

use thiserror::Error;

/// Custom Result type using our Error
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Dashboard client errors
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Authentication errors (missing/rejected bearer token)
    #[error("Authentication error: {0}")]
    Auth(String),

    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(String),

    /// Non-success HTTP status from the API
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Browser storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Charting bridge errors
    #[error("Chart error: {0}")]
    Chart(String),
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        DashboardError::Http(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::Status {
            status: 503,
            body: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err: DashboardError = json_err.into();
        assert!(matches!(err, DashboardError::Json(_)));
    }
}
