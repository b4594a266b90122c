//! File parameter types

use super::{ExtraParams, ResourceId};
use serde::Serialize;

/// Options for [`Files::upload`](crate::resources::Files::upload).
///
/// Unset list fields are still sent as explicit null markers; the transport
/// leaves them out of the encoded body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadParams {
    /// Replace an existing file with the same name. Sent as the `overwrite`
    /// query parameter; defaults to `false`.
    pub overwrite: Option<bool>,

    /// Names to give the uploaded files (`file_names` form field).
    pub file_names: Option<Vec<String>>,

    /// Folder paths to upload into (`folder_paths` form field).
    pub folder_paths: Option<Vec<String>>,
}

impl UploadParams {
    /// Create new upload params with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overwrite flag
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = Some(overwrite);
        self
    }

    /// Add a file name
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_names.get_or_insert_with(Vec::new).push(name.into());
        self
    }

    /// Add a folder path
    pub fn folder_path(mut self, path: impl Into<String>) -> Self {
        self.folder_paths.get_or_insert_with(Vec::new).push(path.into());
        self
    }

    /// Effective value of the `overwrite` query parameter.
    pub fn overwrite_or_default(&self) -> bool {
        self.overwrite.unwrap_or(false)
    }
}

/// Filters for [`Files::list`](crate::resources::Files::list).
///
/// Only fields that are set are sent; `FileListParams::new()` serializes to
/// `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FileListParams {
    /// Maximum number of files to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Number of files to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// Only files in this folder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<ResourceId>,

    /// Only files with this name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Only files with this extension
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    /// Only files of this type (`IMG`, `DOCUMENT`, ...)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,

    /// Include or exclude archived files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    /// Any other filter, forwarded as-is
    #[serde(flatten)]
    pub extra: ExtraParams,
}

impl FileListParams {
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

    /// Filter by folder
    pub fn folder_id(mut self, folder_id: impl Into<ResourceId>) -> Self {
        self.folder_id = Some(folder_id.into());
        self
    }

    /// Filter by name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filter by extension
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Filter by file type
    pub fn file_type(mut self, file_type: impl Into<String>) -> Self {
        self.file_type = Some(file_type.into());
        self
    }

    /// Filter by archived state
    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = Some(archived);
        self
    }

    /// Set an arbitrary parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Destination for [`Files::move_file`](crate::resources::Files::move_file).
///
/// The API expects either `folder_path` or `folder_id`, not both. Both are
/// forwarded if set and the server decides.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MoveFileParams {
    /// Path of the folder to move the file into
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_path: Option<String>,

    /// Id of the folder to move the file into
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<ResourceId>,

    /// New name for the file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Any other parameter, forwarded as-is
    #[serde(flatten)]
    pub extra: ExtraParams,
}

impl MoveFileParams {
    /// Create new move params with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Move into the folder at this path
    pub fn folder_path(mut self, path: impl Into<String>) -> Self {
        self.folder_path = Some(path.into());
        self
    }

    /// Move into the folder with this id
    pub fn folder_id(mut self, folder_id: impl Into<ResourceId>) -> Self {
        self.folder_id = Some(folder_id.into());
        self
    }

    /// Rename the file
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set an arbitrary parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Whether both `folder_path` and `folder_id` are set.
    pub fn has_conflicting_destination(&self) -> bool {
        self.folder_path.is_some() && self.folder_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upload_params_builder() {
        let params = UploadParams::new()
            .overwrite(true)
            .file_name("a.png")
            .file_name("b.png")
            .folder_path("/images");

        assert!(params.overwrite_or_default());
        assert_eq!(
            params.file_names,
            Some(vec!["a.png".to_string(), "b.png".to_string()])
        );
        assert_eq!(params.folder_paths, Some(vec!["/images".to_string()]));
        assert!(!UploadParams::new().overwrite_or_default());
    }

    #[test]
    fn test_empty_list_params_serialize_to_empty_object() {
        assert_eq!(serde_json::to_value(FileListParams::new()).unwrap(), json!({}));
    }

    #[test]
    fn test_list_params_serialization() {
        let params = FileListParams::new()
            .limit(10)
            .folder_id(3)
            .file_type("IMG")
            .param("alt_key", "hero");

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"limit": 10, "folder_id": 3, "type": "IMG", "alt_key": "hero"})
        );
    }

    #[test]
    fn test_move_params_conflict_detection() {
        let params = MoveFileParams::new().folder_path("/a").folder_id(9);
        assert!(params.has_conflicting_destination());
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"folder_path": "/a", "folder_id": 9})
        );

        assert!(!MoveFileParams::new().folder_id(9).name("x.png").has_conflicting_destination());
    }
}
