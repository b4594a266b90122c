//! Common test utilities and helpers

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use hubspot_filemanager::{
    Client, EndpointRequest, Response, Result,
    http::{HeaderMap, HttpProvider, Method, MultipartValue, StatusCode},
};

/// Create a test API key
#[allow(dead_code)]
pub fn test_api_key() -> String {
    "demo-hapikey-0123456789".to_string()
}

/// Multipart part as seen by the provider
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedPart {
    /// Text value
    Text(String),
    /// File part, by file name
    File(String),
    /// Null marker
    Null,
}

/// Snapshot of one request handed to the provider
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub json: Option<serde_json::Value>,
    pub parts: Option<Vec<(String, RecordedPart)>>,
}

impl RecordedRequest {
    fn capture(request: &EndpointRequest) -> Self {
        let parts = request.multipart_fields().map(|fields| {
            fields
                .iter()
                .map(|field| {
                    let part = match &field.value {
                        MultipartValue::Text(text) => RecordedPart::Text(text.clone()),
                        MultipartValue::File(file) => {
                            RecordedPart::File(file.file_name().to_string())
                        }
                        MultipartValue::Null => RecordedPart::Null,
                    };
                    (field.name.clone(), part)
                })
                .collect()
        });

        Self {
            method: request.method().clone(),
            path: request.path().to_string(),
            query: request.query_pairs().to_vec(),
            json: request.json_body().cloned(),
            parts,
        }
    }

    /// Names of the multipart parts, in order
    #[allow(dead_code)]
    pub fn part_names(&self) -> Vec<&str> {
        self.parts
            .iter()
            .flatten()
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Provider that records every request and answers with a canned response
#[allow(dead_code)]
#[derive(Debug)]
pub struct RecordingProvider {
    status: StatusCode,
    body: String,
    requests: Mutex<Vec<RecordedRequest>>,
}

#[allow(dead_code)]
impl RecordingProvider {
    /// Answer every request with 200 and `{}`
    pub fn new() -> Self {
        Self::with_response(StatusCode::OK, "{}")
    }

    /// Answer every request with the given status and body
    pub fn with_response(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// All requests seen so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single request seen so far
    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl HttpProvider for RecordingProvider {
    async fn execute(&self, request: EndpointRequest) -> Result<Response> {
        self.requests
            .lock()
            .unwrap()
            .push(RecordedRequest::capture(&request));
        Ok(Response::new(
            self.status,
            HeaderMap::new(),
            self.body.clone().into_bytes(),
        ))
    }

    fn provider_name(&self) -> &'static str {
        "recording"
    }

    fn base_url(&self) -> &str {
        "http://recording.invalid/"
    }
}

/// Client wired to a fresh recording provider
#[allow(dead_code)]
pub fn recording_client() -> (Client, Arc<RecordingProvider>) {
    let provider = Arc::new(RecordingProvider::new());
    let client = Client::from_provider(provider.clone());
    (client, provider)
}
