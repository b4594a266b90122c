//! File Manager resource for uploading and managing files and folders
//!
//! Every operation maps to exactly one HTTP call. The `*_request` functions
//! build the [`EndpointRequest`] for an operation without sending it; the
//! async methods build the same request and pass it to
//! [`Client::execute`](crate::Client::execute), returning the response
//! untouched.

use crate::http::{EndpointRequest, MultipartField, Response, UploadFile};
use crate::types::{
    FileListParams, FolderListParams, MoveFileParams, MoveFolderParams, NewFolder, ResourceId,
    UpdateFolderParams, UploadParams,
};
use crate::{Client, error::Result};
use std::path::Path;
use tracing::{debug, warn};

/// Base path of the files endpoints.
pub const FILES_PATH: &str = "/filemanager/api/v2/files";

/// Base path of the folders endpoints.
pub const FOLDERS_PATH: &str = "/filemanager/api/v2/folders";

/// Files and folders resource.
///
/// Borrowed from a [`Client`] with [`Client::files`]; it holds no state of
/// its own.
///
/// # Example
///
/// ```rust,no_run
/// # use hubspot_filemanager::Client;
/// # use hubspot_filemanager::types::{FileListParams, MoveFileParams, UploadParams};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::try_new("pat-na1-...")?;
///
/// // Upload a file into a folder
/// let response = client
///     .files()
///     .upload("logo.png", UploadParams::new().folder_path("/brand"))
///     .await?;
/// println!("Upload status: {}", response.status());
///
/// // List files
/// let listing: serde_json::Value = client
///     .files()
///     .list(FileListParams::new().limit(20))
///     .await?
///     .json()?;
///
/// // Move a file
/// client
///     .files()
///     .move_file(1234, MoveFileParams::new().folder_id(42))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Files<'a> {
    client: &'a Client,
}

impl<'a> Files<'a> {
    /// Create a new Files resource
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Upload a local file.
    ///
    /// The file is opened before anything is sent, so a bad path fails with
    /// [`Error::FileOpen`](crate::Error::FileOpen) without touching the
    /// network. The handle is closed once the call completes or fails.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use hubspot_filemanager::Client;
    /// # use hubspot_filemanager::types::UploadParams;
    /// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let response = client
    ///     .files()
    ///     .upload("report.pdf", UploadParams::new().overwrite(true))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn upload(&self, path: impl AsRef<Path>, params: UploadParams) -> Result<Response> {
        let file = UploadFile::open(path).await?;
        self.upload_file(file, params).await
    }

    /// Upload an already-opened file or in-memory content.
    #[tracing::instrument(skip_all, fields(file_name = %file.file_name(), size = file.len()))]
    pub async fn upload_file(&self, file: UploadFile, params: UploadParams) -> Result<Response> {
        debug!(overwrite = params.overwrite_or_default(), "Uploading file");
        self.client.execute(Self::upload_request(file, &params)).await
    }

    /// Get metadata for all files matching the filters.
    #[tracing::instrument(skip_all)]
    pub async fn list(&self, params: FileListParams) -> Result<Response> {
        debug!("Listing files");
        self.client.execute(Self::list_request(&params)?).await
    }

    /// Replace the content of an existing file with a local file.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn replace(
        &self,
        file_id: impl Into<ResourceId>,
        path: impl AsRef<Path>,
    ) -> Result<Response> {
        let file = UploadFile::open(path).await?;
        self.replace_file(file_id, file).await
    }

    /// Replace the content of an existing file with an already-opened file.
    #[tracing::instrument(skip_all, fields(file_name = %file.file_name(), size = file.len()))]
    pub async fn replace_file(
        &self,
        file_id: impl Into<ResourceId>,
        file: UploadFile,
    ) -> Result<Response> {
        let file_id = file_id.into();
        debug!(%file_id, "Replacing file");
        self.client.execute(Self::replace_request(&file_id, file)).await
    }

    /// Get metadata for a single file.
    #[tracing::instrument(skip_all)]
    pub async fn meta(&self, file_id: impl Into<ResourceId>) -> Result<Response> {
        let file_id = file_id.into();
        debug!(%file_id, "Fetching file metadata");
        self.client.execute(Self::meta_request(&file_id)).await
    }

    /// Archive a file.
    #[tracing::instrument(skip_all)]
    pub async fn archive(&self, file_id: impl Into<ResourceId>) -> Result<Response> {
        let file_id = file_id.into();
        debug!(%file_id, "Archiving file");
        self.client.execute(Self::archive_request(&file_id)).await
    }

    /// Delete a file.
    #[tracing::instrument(skip_all)]
    pub async fn delete(&self, file_id: impl Into<ResourceId>) -> Result<Response> {
        let file_id = file_id.into();
        debug!(%file_id, "Deleting file");
        self.client.execute(Self::delete_request(&file_id)).await
    }

    /// Move a file to another folder, optionally renaming it.
    ///
    /// Use `folder_path` or `folder_id`, not both. Setting both is not
    /// rejected here; it is logged and left to the server.
    #[tracing::instrument(skip_all)]
    pub async fn move_file(
        &self,
        file_id: impl Into<ResourceId>,
        params: MoveFileParams,
    ) -> Result<Response> {
        let file_id = file_id.into();
        if params.has_conflicting_destination() {
            warn!(%file_id, "Both folder_path and folder_id set when moving file");
        }
        debug!(%file_id, "Moving file");
        self.client
            .execute(Self::move_file_request(&file_id, &params)?)
            .await
    }

    /// Create a folder.
    #[tracing::instrument(skip_all)]
    pub async fn create_folder(
        &self,
        name: impl Into<String>,
        parent_folder_id: impl Into<ResourceId>,
    ) -> Result<Response> {
        let folder = NewFolder {
            name: name.into(),
            parent_folder_id: parent_folder_id.into(),
        };
        debug!(name = %folder.name, parent_folder_id = %folder.parent_folder_id, "Creating folder");
        self.client
            .execute(Self::create_folder_request(&folder)?)
            .await
    }

    /// Get metadata for all folders matching the filters.
    #[tracing::instrument(skip_all)]
    pub async fn list_folders(&self, params: FolderListParams) -> Result<Response> {
        debug!("Listing folders");
        self.client
            .execute(Self::list_folders_request(&params)?)
            .await
    }

    /// Update a folder.
    #[tracing::instrument(skip_all)]
    pub async fn update_folder(
        &self,
        folder_id: impl Into<ResourceId>,
        params: UpdateFolderParams,
    ) -> Result<Response> {
        let folder_id = folder_id.into();
        debug!(%folder_id, "Updating folder");
        self.client
            .execute(Self::update_folder_request(&folder_id, &params)?)
            .await
    }

    /// Delete a folder.
    #[tracing::instrument(skip_all)]
    pub async fn delete_folder(&self, folder_id: impl Into<ResourceId>) -> Result<Response> {
        let folder_id = folder_id.into();
        debug!(%folder_id, "Deleting folder");
        self.client
            .execute(Self::delete_folder_request(&folder_id))
            .await
    }

    /// Get a folder by id.
    #[tracing::instrument(skip_all)]
    pub async fn get_folder(&self, folder_id: impl Into<ResourceId>) -> Result<Response> {
        let folder_id = folder_id.into();
        debug!(%folder_id, "Fetching folder");
        self.client
            .execute(Self::get_folder_request(&folder_id))
            .await
    }

    /// Move a folder.
    #[tracing::instrument(skip_all)]
    pub async fn move_folder(
        &self,
        folder_id: impl Into<ResourceId>,
        params: MoveFolderParams,
    ) -> Result<Response> {
        let folder_id = folder_id.into();
        debug!(%folder_id, "Moving folder");
        self.client
            .execute(Self::move_folder_request(&folder_id, &params)?)
            .await
    }

    /// `POST /filemanager/api/v2/files?overwrite=..` with a multipart body.
    ///
    /// `file_names` and `folder_paths` are always present in the field list,
    /// as null markers when unset.
    pub fn upload_request(file: UploadFile, params: &UploadParams) -> EndpointRequest {
        let mut fields = vec![MultipartField::file("files", file)];
        push_list_field(&mut fields, "file_names", params.file_names.as_deref());
        push_list_field(&mut fields, "folder_paths", params.folder_paths.as_deref());

        EndpointRequest::post(FILES_PATH)
            .query("overwrite", params.overwrite_or_default())
            .multipart(fields)
    }

    /// `GET /filemanager/api/v2/files` with the filters as a JSON body.
    pub fn list_request(params: &FileListParams) -> Result<EndpointRequest> {
        EndpointRequest::get(FILES_PATH).json(params)
    }

    /// `POST /filemanager/api/v2/files/{file_id}` with the new content.
    pub fn replace_request(file_id: &ResourceId, file: UploadFile) -> EndpointRequest {
        EndpointRequest::post(file_path(file_id)).multipart(vec![MultipartField::file("files", file)])
    }

    /// `GET /filemanager/api/v2/files/{file_id}`.
    pub fn meta_request(file_id: &ResourceId) -> EndpointRequest {
        EndpointRequest::get(file_path(file_id))
    }

    /// `POST /filemanager/api/v2/files/{file_id}/archive`.
    pub fn archive_request(file_id: &ResourceId) -> EndpointRequest {
        EndpointRequest::post(format!("{}/archive", file_path(file_id)))
    }

    /// `DELETE /filemanager/api/v2/files/{file_id}`.
    pub fn delete_request(file_id: &ResourceId) -> EndpointRequest {
        EndpointRequest::delete(file_path(file_id))
    }

    /// `POST /filemanager/api/v2/files/{file_id}/move-file` with a JSON body.
    pub fn move_file_request(
        file_id: &ResourceId,
        params: &MoveFileParams,
    ) -> Result<EndpointRequest> {
        EndpointRequest::post(format!("{}/move-file", file_path(file_id))).json(params)
    }

    /// `POST /filemanager/api/v2/folders` with `{name, parent_folder_id}`.
    pub fn create_folder_request(folder: &NewFolder) -> Result<EndpointRequest> {
        EndpointRequest::post(FOLDERS_PATH).json(folder)
    }

    /// `GET /filemanager/api/v2/folders` with the filters as a JSON body.
    pub fn list_folders_request(params: &FolderListParams) -> Result<EndpointRequest> {
        EndpointRequest::get(FOLDERS_PATH).json(params)
    }

    /// `PUT /filemanager/api/v2/folders/{folder_id}` with a JSON body.
    pub fn update_folder_request(
        folder_id: &ResourceId,
        params: &UpdateFolderParams,
    ) -> Result<EndpointRequest> {
        EndpointRequest::put(folder_path(folder_id)).json(params)
    }

    /// `DELETE /filemanager/api/v2/folders/{folder_id}`.
    pub fn delete_folder_request(folder_id: &ResourceId) -> EndpointRequest {
        EndpointRequest::delete(folder_path(folder_id))
    }

    /// `GET /filemanager/api/v2/folders/{folder_id}`.
    pub fn get_folder_request(folder_id: &ResourceId) -> EndpointRequest {
        EndpointRequest::get(folder_path(folder_id))
    }

    /// `POST /filemanager/api/v2/folders/{folder_id}/move-folder` with a JSON body.
    pub fn move_folder_request(
        folder_id: &ResourceId,
        params: &MoveFolderParams,
    ) -> Result<EndpointRequest> {
        EndpointRequest::post(format!("{}/move-folder", folder_path(folder_id))).json(params)
    }
}

fn file_path(file_id: &ResourceId) -> String {
    format!("{}/{}", FILES_PATH, file_id)
}

fn folder_path(folder_id: &ResourceId) -> String {
    format!("{}/{}", FOLDERS_PATH, folder_id)
}

/// One text part per value, or a single null marker when unset or empty.
fn push_list_field(fields: &mut Vec<MultipartField>, name: &str, values: Option<&[String]>) {
    match values {
        Some(values) if !values.is_empty() => {
            fields.extend(values.iter().map(|value| MultipartField::text(name, value.as_str())));
        }
        _ => fields.push(MultipartField::null(name)),
    }
}
