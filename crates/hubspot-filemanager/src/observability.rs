//! Structured logging for HTTP traffic
//!
//! All requests sent by the default provider are logged through this layer so
//! the fields stay consistent. Only the endpoint path is recorded; the
//! `hapikey` query parameter is appended after the metadata is captured and
//! never reaches the logs.

use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// HTTP request metadata for structured logging
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Endpoint path
    pub path: String,
    /// Body encoding ("none", "json" or "multipart")
    pub body_kind: &'static str,
}

impl RequestMetadata {
    /// Create new request metadata
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            body_kind: "none",
        }
    }

    /// Set the body encoding
    pub fn with_body_kind(mut self, body_kind: &'static str) -> Self {
        self.body_kind = body_kind;
        self
    }

    /// Log request being sent
    pub fn log_request(&self) {
        debug!(
            method = %self.method,
            path = %self.path,
            body = self.body_kind,
            "Sending HTTP request"
        );
    }
}

/// HTTP response metadata for structured logging
#[derive(Debug, Clone)]
pub struct ResponseMetadata {
    /// HTTP status code
    pub status: u16,
    /// Response body size in bytes
    pub body_size: usize,
    /// Time elapsed for the request
    pub elapsed: Duration,
}

impl ResponseMetadata {
    /// Create new response metadata
    pub fn new(status: u16, body_size: usize, elapsed: Duration) -> Self {
        Self {
            status,
            body_size,
            elapsed,
        }
    }

    /// Log a completed exchange. Error statuses are logged at `warn`.
    pub fn log_response(&self, request: &RequestMetadata) {
        if self.status >= 400 {
            warn!(
                method = %request.method,
                path = %request.path,
                status = self.status,
                elapsed_ms = self.elapsed.as_millis(),
                body_size = self.body_size,
                "HTTP request returned error status"
            );
        } else {
            info!(
                method = %request.method,
                path = %request.path,
                status = self.status,
                elapsed_ms = self.elapsed.as_millis(),
                body_size = self.body_size,
                "HTTP request succeeded"
            );
        }
    }
}

/// Log a request that never produced a response
pub fn log_failure(request: &RequestMetadata, elapsed: Duration, error: &str) {
    warn!(
        method = %request.method,
        path = %request.path,
        elapsed_ms = elapsed.as_millis(),
        error = %error,
        "HTTP request failed"
    );
}

/// Timer for measuring request duration
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    /// Start a new timer
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
