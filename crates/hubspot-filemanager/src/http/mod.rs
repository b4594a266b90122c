//! HTTP layer
//!
//! Request descriptions, the provider seam that executes them, the default
//! reqwest-backed provider, and the response wrapper.

pub use hubspot_provider::{HubSpotHttpProvider, HubSpotHttpProviderBuilder};
pub use provider::HttpProvider;
pub use request::{EndpointRequest, MultipartField, MultipartValue, RequestBody, UploadFile};
pub use response::Response;

pub mod hubspot_provider;
pub mod provider;
mod request;
mod response;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
