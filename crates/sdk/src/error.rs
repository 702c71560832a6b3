//! Error types for the marketplace SDK.

use serde::{Deserialize, Serialize};

/// Result type for SDK operations.
pub type MarketResult<T> = Result<T, MarketError>;

/// Errors that can occur when talking to the marketplace.
#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Response body could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl MarketError {
    /// Create an API error from a status code and response body.
    ///
    /// Uses the `error` field of a JSON body when there is one, otherwise a
    /// generic message naming the status code.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .map(|e| e.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status code {}", status));

        Self::Api { status, message }
    }

    /// Human-readable description, without the variant prefix.
    pub fn describe(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Http(e) => {
                let mut message = e.to_string();
                let mut source = std::error::Error::source(e);
                while let Some(cause) = source {
                    message.push_str(": ");
                    message.push_str(&cause.to_string());
                    source = cause.source();
                }
                message
            }
            Self::Json(e) => format!("Malformed response from marketplace: {}", e),
            Self::Config(message) => message.clone(),
            Self::InvalidUrl(e) => format!("Invalid URL: {}", e),
        }
    }
}

/// Error body returned by the marketplace API.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
