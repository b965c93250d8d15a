//! Error types for the Spotify client.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when talking to the Spotify Web API.
#[derive(Error, Debug)]
pub enum SpotifyError {
    /// The API answered with a status other than 200.
    ///
    /// `body` is the parsed response body exactly as the API sent it
    /// (usually `{"error": {"status": .., "message": ..}}`).
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: Value },

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body was not JSON, or did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Invalid base URL
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SpotifyError {
    /// HTTP status of an API error, `None` for every other kind.
    pub fn status(&self) -> Option<u16> {
        match self {
            SpotifyError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error came from a non-200 API response.
    pub fn is_api(&self) -> bool {
        matches!(self, SpotifyError::Api { .. })
    }

    /// The raw error body of an API error.
    pub fn body(&self) -> Option<&Value> {
        match self {
            SpotifyError::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Typed view of the regular error envelope, if the body has one.
    pub fn error_object(&self) -> Option<ErrorObject> {
        let envelope = self.body()?.get("error")?;
        ErrorObject::deserialize(envelope).ok()
    }
}

/// The `error` object inside a Spotify error response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorObject {
    pub status: u16,
    #[serde(default)]
    pub message: String,
    /// Only present on player errors
    #[serde(default)]
    pub reason: Option<String>,
}

/// Result type for Spotify client operations.
pub type Result<T> = std::result::Result<T, SpotifyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_object_from_envelope() {
        let err = SpotifyError::Api {
            status: 404,
            body: json!({"error": {"status": 404, "message": "not found"}}),
        };

        assert!(err.is_api());
        assert_eq!(err.status(), Some(404));

        let object = err.error_object().expect("envelope should parse");
        assert_eq!(object.status, 404);
        assert_eq!(object.message, "not found");
        assert!(object.reason.is_none());
    }

    #[test]
    fn test_error_object_missing_for_odd_bodies() {
        let err = SpotifyError::Api {
            status: 502,
            body: json!(["unexpected"]),
        };
        assert!(err.error_object().is_none());

        let err = SpotifyError::Api {
            status: 500,
            body: Value::Null,
        };
        assert!(err.error_object().is_none());
    }

    #[test]
    fn test_non_api_errors_have_no_status() {
        let err = SpotifyError::InvalidUrl("nope".into());
        assert!(!err.is_api());
        assert_eq!(err.status(), None);
        assert!(err.body().is_none());
    }
}
