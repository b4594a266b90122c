//! Request descriptions handed to the transport
//!
//! Resources never talk to the network directly. They describe the call as an
//! [`EndpointRequest`] (verb, path, query pairs, body) and pass it to
//! [`Client::execute`](crate::Client::execute). Every request is built fresh
//! for a single call and consumed by the provider that sends it.

use crate::error::{Error, Result};
use bytes::Bytes;
use http::Method;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// A single API call described as plain data.
#[derive(Debug)]
pub struct EndpointRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: RequestBody,
}

impl EndpointRequest {
    /// Create a request with no query string and no body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    /// Shorthand for a `GET` request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Shorthand for a `POST` request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Shorthand for a `PUT` request.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Shorthand for a `DELETE` request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a query parameter. Order is preserved on the wire.
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if `body` cannot be represented as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Attach a `multipart/form-data` body.
    pub fn multipart(mut self, fields: Vec<MultipartField>) -> Self {
        self.body = RequestBody::Multipart(fields);
        self
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Endpoint path, relative to the API base URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters in insertion order.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// First value of the named query parameter.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Request body.
    pub fn body(&self) -> &RequestBody {
        &self.body
    }

    /// JSON body, if this request carries one.
    pub fn json_body(&self) -> Option<&serde_json::Value> {
        match &self.body {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Multipart fields, if this request carries a multipart body.
    pub fn multipart_fields(&self) -> Option<&[MultipartField]> {
        match &self.body {
            RequestBody::Multipart(fields) => Some(fields),
            _ => None,
        }
    }

    /// All values sent under the named multipart field.
    pub fn multipart_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MultipartValue> {
        self.multipart_fields()
            .unwrap_or_default()
            .iter()
            .filter(move |field| field.name == name)
            .map(|field| &field.value)
    }

    /// Split the request into its parts for sending.
    pub fn into_parts(self) -> (Method, String, Vec<(String, String)>, RequestBody) {
        (self.method, self.path, self.query, self.body)
    }
}

/// Body of an [`EndpointRequest`].
#[derive(Debug, Default)]
pub enum RequestBody {
    /// No body.
    #[default]
    Empty,
    /// JSON document, sent with `content-type: application/json`.
    Json(serde_json::Value),
    /// `multipart/form-data` fields, in order.
    Multipart(Vec<MultipartField>),
}

impl RequestBody {
    /// Whether the request has no body.
    pub fn is_empty(&self) -> bool {
        matches!(self, RequestBody::Empty)
    }
}

/// One named field of a multipart body.
#[derive(Debug)]
pub struct MultipartField {
    /// Form field name
    pub name: String,
    /// Field content
    pub value: MultipartValue,
}

impl MultipartField {
    /// Text field.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: MultipartValue::Text(value.into()),
        }
    }

    /// Binary file field.
    pub fn file(name: impl Into<String>, file: UploadFile) -> Self {
        Self {
            name: name.into(),
            value: MultipartValue::File(file),
        }
    }

    /// Field explicitly left unset. Providers omit it from the encoded body.
    pub fn null(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: MultipartValue::Null,
        }
    }
}

/// Content of a multipart field.
#[derive(Debug)]
pub enum MultipartValue {
    /// Plain text value.
    Text(String),
    /// Binary file content.
    File(UploadFile),
    /// Not set by the caller.
    Null,
}

impl MultipartValue {
    /// Whether the value is the unset marker.
    pub fn is_null(&self) -> bool {
        matches!(self, MultipartValue::Null)
    }

    /// Text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MultipartValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// File content, if this is a file value.
    pub fn as_file(&self) -> Option<&UploadFile> {
        match self {
            MultipartValue::File(file) => Some(file),
            _ => None,
        }
    }
}

/// A readable byte source for an upload, plus the file name sent with it.
///
/// File-backed sources are opened when the `UploadFile` is created, so a
/// missing path fails before any request exists. The handle is owned by the
/// request and closed when the request is dropped, whether the call
/// succeeded or not.
pub struct UploadFile {
    file_name: String,
    len: u64,
    source: UploadSource,
}

enum UploadSource {
    File(tokio::fs::File),
    Bytes(Bytes),
}

impl UploadFile {
    /// Open a local file for upload.
    ///
    /// The multipart file name defaults to the last path component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileOpen`] if the path does not exist, cannot be read,
    /// or is a directory.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let open_error = |source| Error::FileOpen {
            path: path.to_path_buf(),
            source,
        };

        let file = tokio::fs::File::open(path).await.map_err(open_error)?;
        let metadata = file.metadata().await.map_err(open_error)?;
        if metadata.is_dir() {
            return Err(open_error(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "path is a directory",
            )));
        }

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());

        Ok(Self {
            file_name,
            len: metadata.len(),
            source: UploadSource::File(file),
        })
    }

    /// Wrap an already-opened file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file's metadata cannot be read.
    pub async fn from_file(file: tokio::fs::File, file_name: impl Into<String>) -> Result<Self> {
        let len = file.metadata().await?.len();
        Ok(Self {
            file_name: file_name.into(),
            len,
            source: UploadSource::File(file),
        })
    }

    /// Upload in-memory content.
    pub fn from_bytes(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        let content = content.into();
        Self {
            file_name: file_name.into(),
            len: content.len() as u64,
            source: UploadSource::Bytes(content),
        }
    }

    /// Override the file name sent in the multipart part.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// File name sent in the multipart part.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Content length in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Whether the content is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the content is backed by an open file handle.
    pub fn is_file_backed(&self) -> bool {
        matches!(self.source, UploadSource::File(_))
    }

    /// Turn the source into a streaming request body.
    pub(crate) fn into_body(self) -> (String, u64, reqwest::Body) {
        let body = match self.source {
            UploadSource::File(file) => {
                reqwest::Body::wrap_stream(tokio_util::io::ReaderStream::new(file))
            }
            UploadSource::Bytes(bytes) => reqwest::Body::from(bytes),
        };
        (self.file_name, self.len, body)
    }
}

impl fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match self.source {
            UploadSource::File(_) => "file",
            UploadSource::Bytes(_) => "bytes",
        };
        f.debug_struct("UploadFile")
            .field("file_name", &self.file_name)
            .field("len", &self.len)
            .field("source", &source)
            .finish()
    }
}
