//! Parameter types for File Manager operations
//!
//! Each operation that takes caller data has its own struct. Optional fields
//! are skipped when unset, and every struct carries an `extra` map for keys
//! this crate does not model; those are forwarded untouched.

pub use files::{FileListParams, MoveFileParams, UploadParams};
pub use folders::{FolderListParams, MoveFolderParams, NewFolder, UpdateFolderParams};

mod files;
mod folders;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Passthrough key/value data forwarded to the API as-is.
pub type ExtraParams = serde_json::Map<String, serde_json::Value>;

/// Identifier of a remote file or folder.
///
/// HubSpot uses numeric ids, but the value is opaque to this crate: it is
/// rendered into paths with `Display` and serialized as a JSON number or
/// string. No validation is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    /// Numeric id
    Numeric(i64),
    /// Numeric id above `i64::MAX`
    Unsigned(u64),
    /// Any other id
    Named(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Numeric(id) => write!(f, "{}", id),
            ResourceId::Unsigned(id) => write!(f, "{}", id),
            ResourceId::Named(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ResourceId {
    fn from(id: i64) -> Self {
        ResourceId::Numeric(id)
    }
}

impl From<i32> for ResourceId {
    fn from(id: i32) -> Self {
        ResourceId::Numeric(id.into())
    }
}

impl From<u32> for ResourceId {
    fn from(id: u32) -> Self {
        ResourceId::Numeric(id.into())
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        match i64::try_from(id) {
            Ok(id) => ResourceId::Numeric(id),
            Err(_) => ResourceId::Unsigned(id),
        }
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        ResourceId::Named(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        ResourceId::Named(id)
    }
}

impl From<&ResourceId> for ResourceId {
    fn from(id: &ResourceId) -> Self {
        id.clone()
    }
}
