//! HTTP response handling

use crate::error::{Error, Result};
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Response returned by every File Manager operation.
///
/// The resource layer hands this back untouched, including for 4xx/5xx
/// statuses. Use [`error_for_status`](Self::error_for_status) to turn error
/// statuses into an [`Error`].
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
    elapsed: Duration,
}

impl Response {
    /// Create a new response.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
            elapsed: Duration::ZERO,
        }
    }

    /// Record how long the round-trip took.
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    /// Get the status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consume the response and return the raw body bytes.
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Time elapsed for the request/response cycle.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Get the body as a string.
    pub fn text(&self) -> Result<String> {
        String::from_utf8(self.body.clone()).map_err(|e| Error::ResponseValidation(e.to_string()))
    }

    /// Parse the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(Error::Serialization)
    }

    /// Check if the response is successful (2xx status).
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Check if the response is an error (4xx or 5xx status).
    pub fn is_error(&self) -> bool {
        self.status.is_client_error() || self.status.is_server_error()
    }

    /// Return `Err(Error::Api { .. })` for 4xx/5xx statuses, otherwise `self`.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_error() {
            let body = String::from_utf8_lossy(&self.body);
            return Err(Error::from_response(self.status.as_u16(), &body));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn response(status: u16, body: &str) -> Response {
        Response::new(
            StatusCode::from_u16(status).unwrap(),
            HeaderMap::new(),
            body.as_bytes().to_vec(),
        )
    }

    #[test]
    fn test_json_decoding() {
        let resp = response(200, r#"{"id": 42, "name": "docs"}"#);
        let value: serde_json::Value = resp.json().unwrap();
        assert_eq!(value["id"], 42);
        assert_eq!(resp.text().unwrap(), r#"{"id": 42, "name": "docs"}"#);
    }

    #[test]
    fn test_json_decoding_failure() {
        let resp = response(200, "not json");
        let err = resp.json::<serde_json::Value>().unwrap_err();
        assert_matches!(err, Error::Serialization(_));
    }

    #[test]
    fn test_invalid_utf8_text() {
        let resp = Response::new(StatusCode::OK, HeaderMap::new(), vec![0xff, 0xfe]);
        assert_matches!(resp.text(), Err(Error::ResponseValidation(_)));
    }

    #[test]
    fn test_error_for_status_passes_success() {
        let resp = response(204, "");
        assert!(resp.is_success());
        let resp = resp.error_for_status().unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn test_error_for_status_converts_errors() {
        let resp = response(
            404,
            r#"{"status":"error","message":"File not found","correlationId":"c-1"}"#,
        );
        assert!(resp.is_error());

        let err = resp.error_for_status().unwrap_err();
        assert_matches!(err, Error::Api { status: 404, ref message, .. } if message == "File not found");
    }
}
