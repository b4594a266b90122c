//! HTTP provider trait for executing request descriptions
//!
//! Resources build an [`EndpointRequest`] and hand it to an `HttpProvider`.
//! The provider owns everything below that line: authentication, body
//! encoding, timeouts and the network call itself.

use crate::{
    error::Result,
    http::{EndpointRequest, Response},
};
use async_trait::async_trait;
use std::fmt;

/// Provider trait for sending requests to the File Manager API.
///
/// [`HubSpotHttpProvider`](crate::http::HubSpotHttpProvider) is the default
/// implementation. Tests and embedders can supply their own through
/// [`Client::from_provider`](crate::Client::from_provider).
#[async_trait]
pub trait HttpProvider: Send + Sync + fmt::Debug {
    /// Execute a request and return the raw response.
    ///
    /// Implementations must not retry and must not turn error statuses into
    /// `Err`: a 4xx/5xx answer is still `Ok(Response)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be encoded or the network call
    /// fails (connection, timeout).
    async fn execute(&self, request: EndpointRequest) -> Result<Response>;

    /// Get the provider name for debugging/logging.
    fn provider_name(&self) -> &'static str;

    /// Get the base URL for this provider (for debugging).
    fn base_url(&self) -> &str;
}
