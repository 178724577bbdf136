//! Error types for the backend API client

use thiserror::Error;

/// Errors that can occur when calling the booking backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response was received
    #[error("Request failed: {0}")]
    Request(String),

    /// Response body could not be decoded into the expected type
    #[error("Response decoding failed: {0}")]
    Decode(String),

    /// Missing or invalid bearer token on a protected endpoint
    #[error("Unauthorized - missing or invalid token")]
    Unauthorized,

    /// Backend returned a non-success status
    #[error("API error (status {status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body from the backend
        body: String,
    },

    /// Token vault read failed
    #[error("Token vault error: {0}")]
    Vault(String),

    /// Base URL missing from the environment
    #[error("Missing WELLSPRING_API_URL environment variable")]
    MissingBaseUrl,

    /// The underlying HTTP client could not be constructed
    #[error("Client construction failed: {0}")]
    Construction(String),
}

impl ApiError {
    /// Returns `true` if the failure happened before the backend answered
    /// (connect error, timeout, DNS), as opposed to a backend rejection.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Request(_))
    }
}
