//! Error types for the PCP SDK.

use serde::{Deserialize, Serialize};

/// Result type for SDK operations.
pub type PcpResult<T> = Result<T, PcpError>;

/// Error types that can occur when talking to a pmwebapi endpoint.
#[derive(Debug, thiserror::Error)]
pub enum PcpError {
    /// A query builder precondition was violated. Detected locally, before
    /// any network call is made; never retried.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Malformed or type-mismatched JSON payload.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl PcpError {
    /// Create an API error from a status code and response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        // pmwebd sometimes wraps the message in a JSON object
        if let Ok(error_response) = serde_json::from_str::<ErrorResponse>(body) {
            Self::Api {
                status,
                message: error_response.error,
            }
        } else {
            Self::Api {
                status,
                message: body.to_string(),
            }
        }
    }
}

/// Structured error body from the service.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
