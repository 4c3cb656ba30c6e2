//! Storefront error types.

use std::time::Duration;

use thiserror::Error;

/// Errors surfaced to the view hosting the listing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShopError {
    /// The requested category is not in the catalog. Hosts treat this as a
    /// redirect to the not-found page rather than a feed failure.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Errors reported by a product source for a single page request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// HTTP error response.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Failed to parse the page body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The page did not arrive in time.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::ParseError(e.to_string())
    }
}

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML.
    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Failed to parse JSON.
    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// Parsed but semantically invalid.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::HttpError {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: unavailable");

        let err = FetchError::Timeout(Duration::from_millis(500));
        assert!(err.to_string().contains("500ms"));
    }

    #[test]
    fn test_json_error_converts_to_parse_error() {
        let err: FetchError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, FetchError::ParseError(_)));
    }
}
