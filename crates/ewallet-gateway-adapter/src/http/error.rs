/*
[INPUT]:  Error sources (HTTP transport, gateway responses, serialization)
[OUTPUT]: Structured error types with status context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the gateway adapter
#[derive(Error, Debug)]
pub enum GatewayError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Gateway returned a non-2xx status with a normalized message
    #[error("gateway error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GatewayError {
    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        GatewayError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if error indicates a rejected or missing credential
    pub fn is_auth_error(&self) -> bool {
        matches!(self, GatewayError::Api { status: 401 | 403, .. })
    }

    /// Check if the requested resource does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::Api { status: 404, .. })
    }

    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            GatewayError::Http(_) | GatewayError::InvalidResponse(_) => true,
            GatewayError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;
