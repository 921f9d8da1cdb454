//! Custom error types for release-scout pipeline operations.

use thiserror::Error;

/// Main error type for release-scout operations.
///
/// Expected absences (no changelog section, no matching milestone, no
/// structured description in a PR body) are not errors: those surface as
/// `Option`/empty values so callers can fall back to degraded data.
#[derive(Error, Debug)]
pub enum ScoutError {
    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("API authentication failed: {0}")]
    AuthenticationError(String),

    // Network/API errors
    #[error("API rate limit exceeded: try again later")]
    RateLimited,

    #[error("API rate limit persisted after {0} retries")]
    RetriesExhausted(u32),

    #[error("Request failed with status {status}: {message}")]
    Transport { status: u16, message: String },

    #[error("Network request failed: {0}")]
    NetworkError(String),

    // Terminal not-found: every fallback stage came up empty
    #[error("{0} not found")]
    NotFound(String),

    // Output errors
    #[error("Failed to write output: {0}")]
    PersistenceError(String),

    // Parsing errors - automatic conversions via #[from]
    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),
}

/// Result type alias using ScoutError
pub type Result<T> = std::result::Result<T, ScoutError>;

impl ScoutError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a persistence error with context
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::PersistenceError(msg.into())
    }
}

// Implement From for reqwest errors (network/API). GitHub surfaces rate
// limiting as HTTP 403, which must stay distinguishable from other failures.
impl From<reqwest::Error> for ScoutError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            return Self::NetworkError(err.to_string());
        }

        if let Some(status) = err.status() {
            if status.as_u16() == 403 {
                return Self::RateLimited;
            }
            return Self::Transport {
                status: status.as_u16(),
                message: err.to_string(),
            };
        }

        Self::NetworkError(err.to_string())
    }
}

// Implement From for reqwest header errors (needs custom message)
impl From<reqwest::header::InvalidHeaderValue> for ScoutError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Self::AuthenticationError(format!("Invalid header value: {}", err))
    }
}

// File writing failures abort the run; they are not retried.
impl From<std::io::Error> for ScoutError {
    fn from(err: std::io::Error) -> Self {
        Self::PersistenceError(err.to_string())
    }
}

impl From<csv::Error> for ScoutError {
    fn from(err: csv::Error) -> Self {
        Self::PersistenceError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formats() {
        let err = ScoutError::invalid_config("missing token");
        assert_eq!(err.to_string(), "Invalid configuration: missing token");

        let err = ScoutError::RetriesExhausted(3);
        assert_eq!(
            err.to_string(),
            "API rate limit persisted after 3 retries"
        );
    }

    #[test]
    fn test_error_helpers() {
        let err = ScoutError::persistence("disk full");
        assert!(matches!(err, ScoutError::PersistenceError(_)));

        let err = ScoutError::NotFound("milestone 9.9.0".into());
        assert_eq!(err.to_string(), "milestone 9.9.0 not found");
    }

    #[test]
    fn test_io_error_maps_to_persistence() {
        let io_err = std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        );
        let err: ScoutError = io_err.into();
        assert!(matches!(err, ScoutError::PersistenceError(_)));
    }
}
