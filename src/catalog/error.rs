//! Catalog retrieval error types
//!
//! Every variant is a "fetch failure" from the browser's point of view:
//! a non-success status, a transport problem, or a body that does not
//! decode into the expected records.

use thiserror::Error;

/// Catalog-specific errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The configured endpoint is not an absolute http(s) URL
    #[error("Invalid catalog endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientError(#[source] reqwest::Error),

    /// The request never produced a response (DNS, connect, TLS, read)
    #[error("Request to {url} failed: {source}")]
    TransportError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("Request to {url} returned {status}")]
    StatusError {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body is not the expected JSON shape
    #[error("Could not decode response from {url}: {source}")]
    DecodeError {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
