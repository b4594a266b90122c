//! Error types for the HubSpot File Manager client
//!
//! The resource layer never translates failures: transport errors surface as
//! [`Error`], while non-2xx responses come back inside
//! [`Response`](crate::http::Response). Callers who prefer an `Err` for
//! error statuses can opt in with
//! [`Response::error_for_status`](crate::http::Response::error_for_status).

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for operations that can fail with a client error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the HubSpot File Manager client.
#[derive(Debug, Error)]
pub enum Error {
    /// A local file could not be opened for an upload or replace.
    ///
    /// Raised before anything is handed to the transport.
    #[error("Failed to open '{}' for upload: {source}", path.display())]
    FileOpen {
        /// Path the caller asked to upload
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Network or connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request timeout.
    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    /// HTTP client configuration or request building error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid HTTP header name.
    #[error("Invalid HTTP header name: {0}")]
    InvalidHeaderName(String),

    /// Invalid HTTP header value.
    #[error("Invalid HTTP header value: {0}")]
    InvalidHeaderValue(String),

    /// No credentials were configured.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failed to decode an API response.
    #[error("Failed to parse API response: {0}")]
    ResponseValidation(String),

    /// The API answered with a non-2xx status.
    ///
    /// Only produced by [`Response::error_for_status`](crate::http::Response::error_for_status).
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message reported by HubSpot, or the raw body
        message: String,
        /// HubSpot correlation id, useful when contacting support
        correlation_id: Option<String>,
    },
}

impl Error {
    /// Build an [`Error::Api`] from a status code and response body.
    ///
    /// HubSpot error bodies look like
    /// `{"status":"error","message":"...","correlationId":"..."}`; anything
    /// else is kept verbatim as the message.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ApiErrorResponse>(body) {
            Ok(api_error) => Error::Api {
                status,
                message: api_error.message,
                correlation_id: api_error.correlation_id,
            },
            Err(_) => Error::Api {
                status,
                message: body.to_string(),
                correlation_id: None,
            },
        }
    }

    /// Whether this error came from a request timing out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout(_))
    }

    /// Whether this error came from the network layer.
    pub fn is_connection(&self) -> bool {
        matches!(self, Error::Connection(_) | Error::Timeout(_))
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The request URL is dropped from the message; it may carry the `hapikey`.
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_builder() {
            Error::HttpClient(err.to_string())
        } else {
            Error::Connection(err.to_string())
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    message: String,
    #[serde(rename = "correlationId", default)]
    correlation_id: Option<String>,
}
