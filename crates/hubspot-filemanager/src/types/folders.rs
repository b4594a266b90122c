//! Folder parameter types

use super::{ExtraParams, ResourceId};
use serde::Serialize;

/// Body of [`Files::create_folder`](crate::resources::Files::create_folder).
///
/// Always serializes to exactly `{"name": ..., "parent_folder_id": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewFolder {
    /// Folder name
    pub name: String,
    /// Folder to create it in
    pub parent_folder_id: ResourceId,
}

/// Filters for [`Files::list_folders`](crate::resources::Files::list_folders).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FolderListParams {
    /// Maximum number of folders to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Number of folders to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// Only folders with this name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Only direct children of this folder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_folder_id: Option<ResourceId>,

    /// Any other filter, forwarded as-is
    #[serde(flatten)]
    pub extra: ExtraParams,
}

impl FolderListParams {
    /// Create new list params with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limit
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the offset
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Filter by name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filter by parent folder
    pub fn parent_folder_id(mut self, parent_folder_id: impl Into<ResourceId>) -> Self {
        self.parent_folder_id = Some(parent_folder_id.into());
        self
    }

    /// Set an arbitrary parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Changes for [`Files::update_folder`](crate::resources::Files::update_folder).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateFolderParams {
    /// New folder name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New parent folder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_folder_id: Option<ResourceId>,

    /// Any other field, forwarded as-is
    #[serde(flatten)]
    pub extra: ExtraParams,
}

impl UpdateFolderParams {
    /// Create new update params with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Rename the folder
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Re-parent the folder
    pub fn parent_folder_id(mut self, parent_folder_id: impl Into<ResourceId>) -> Self {
        self.parent_folder_id = Some(parent_folder_id.into());
        self
    }

    /// Set an arbitrary field
    pub fn param(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Destination for [`Files::move_folder`](crate::resources::Files::move_folder).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MoveFolderParams {
    /// Path of the new parent folder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_path: Option<String>,

    /// Id of the new parent folder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_folder_id: Option<ResourceId>,

    /// New folder name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Any other parameter, forwarded as-is
    #[serde(flatten)]
    pub extra: ExtraParams,
}

impl MoveFolderParams {
    /// Create new move params with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Move under the folder at this path
    pub fn folder_path(mut self, path: impl Into<String>) -> Self {
        self.folder_path = Some(path.into());
        self
    }

    /// Move under the folder with this id
    pub fn parent_folder_id(mut self, parent_folder_id: impl Into<ResourceId>) -> Self {
        self.parent_folder_id = Some(parent_folder_id.into());
        self
    }

    /// Rename the folder
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set an arbitrary parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
