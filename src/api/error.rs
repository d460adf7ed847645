//! Error types for catalog API calls.
//!
//! Transport, status and decode failures stay distinct here so the client and
//! its logs can tell them apart. Controllers collapse all of them into a
//! single human-readable message.

use thiserror::Error;

/// Errors that can occur while talking to the catalog API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The endpoint URL could not be built from the configured base URL.
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("Connection failed for '{endpoint}': {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The request did not finish within the configured timeout.
    #[error("Request to '{endpoint}' timed out after {seconds}s")]
    Timeout { endpoint: String, seconds: u64 },

    /// The API answered with a non-2xx status.
    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    /// The body did not match the expected schema.
    #[error("Failed to decode response from '{endpoint}': {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// The source has no endpoint for this operation.
    #[error("Unsupported operation: {operation}")]
    Unsupported { operation: &'static str },
}

impl ApiError {
    /// Short machine-friendly tag for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Client(_) => "client",
            ApiError::InvalidUrl { .. } => "invalid_url",
            ApiError::Transport { .. } => "transport",
            ApiError::Timeout { .. } => "timeout",
            ApiError::Status { .. } => "status",
            ApiError::Decode { .. } => "decode",
            ApiError::Unsupported { .. } => "unsupported",
        }
    }
}
