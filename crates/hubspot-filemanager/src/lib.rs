//! # HubSpot File Manager
//!
//! Rust client for the HubSpot File Manager v2 API:
//! - Upload, replace, list, archive, delete and move files
//! - Create, list, update, delete, get and move folders
//! - API key (`hapikey`) or bearer token authentication
//! - Pluggable transport through [`http::HttpProvider`]
//!
//! Every operation maps to exactly one HTTP request and hands back the raw
//! [`Response`]. Status codes are not interpreted; use
//! [`Response::error_for_status`] when a non-2xx reply should become an error.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hubspot_filemanager::Client;
//! use hubspot_filemanager::types::{FileListParams, UploadParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder().api_key("your-api-key").build()?;
//!
//!     let uploaded = client
//!         .files()
//!         .upload("logo.png", UploadParams::new().folder_path("/brand"))
//!         .await?
//!         .error_for_status()?;
//!     println!("{}", uploaded.text()?);
//!
//!     let listing: serde_json::Value = client
//!         .files()
//!         .list(FileListParams::new().limit(10))
//!         .await?
//!         .json()?;
//!     println!("{listing:#}");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use http::{EndpointRequest, Response, UploadFile};
pub use resources::Files;
pub use types::*;

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod observability;
pub mod resources;
pub mod types;

pub use async_trait::async_trait;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use hubspot_filemanager::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Client, ClientConfig, Error, Result,
        http::{EndpointRequest, HttpProvider, Response, UploadFile},
        types::{
            FileListParams, FolderListParams, MoveFileParams, MoveFolderParams, ResourceId,
            UpdateFolderParams, UploadParams,
        },
    };
}

/// Crate version, taken from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.hubapi.com";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_constants() {
        assert_eq!(DEFAULT_BASE_URL, "https://api.hubapi.com");
    }
}
