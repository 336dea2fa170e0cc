//! Population error types

use thiserror::Error;

/// Failure to obtain population data.
///
/// Every variant is a network-or-parse failure as far as the view is
/// concerned; the variants only exist for logging.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Transport failed before a response arrived
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with a non-success status
    #[error("API returned status {0}")]
    Status(u16),

    /// The body was not the expected `{ "data": [...] }` document
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

/// Result type alias for population fetches
pub type FetchResult<T> = Result<T, FetchError>;

/// A trend length outside of 3, 5 and 10 years
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid trend window {0:?}: expected 3, 5 or 10 years")]
pub struct InvalidTrendWindow(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::Status(503);
        assert_eq!(err.to_string(), "API returned status 503");

        let err = InvalidTrendWindow("7".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid trend window \"7\": expected 3, 5 or 10 years"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FetchError = json_err.into();
        assert!(matches!(err, FetchError::Parse(_)));
    }
}
