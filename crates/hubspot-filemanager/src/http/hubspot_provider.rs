//! Default HubSpot HTTP provider
//!
//! Sends [`EndpointRequest`]s to the HubSpot API with `reqwest`, adding
//! authentication and encoding JSON and multipart bodies.

use super::{EndpointRequest, HttpProvider, MultipartField, MultipartValue, RequestBody, Response};
use crate::error::{Error, Result};
use crate::observability::{RequestMetadata, RequestTimer, ResponseMetadata, log_failure};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use secrecy::{ExposeSecret, SecretString};
use std::{sync::Arc, time::Duration};
use url::Url;

/// Query parameter carrying a HubSpot developer API key.
pub const API_KEY_PARAM: &str = "hapikey";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP provider for the HubSpot API.
///
/// # Architecture
///
/// - Uses `reqwest` for HTTP client
/// - Supports API key (`?hapikey=`) and OAuth / private app access token
///   (`Authorization: Bearer`) authentication; the API key wins if both are set
/// - Streams file parts of multipart bodies straight from their handles
/// - Never retries and never converts error statuses into `Err`
///
/// # Example
///
/// ```rust,no_run
/// use hubspot_filemanager::http::HubSpotHttpProvider;
/// use std::sync::Arc;
///
/// let provider = Arc::new(HubSpotHttpProvider::builder()
///     .access_token("pat-na1-...")
///     .build()
///     .unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct HubSpotHttpProvider {
    pub(crate) inner: Arc<ProviderInner>,
}

#[derive(Debug)]
pub(crate) struct ProviderInner {
    /// HTTP client for making requests
    pub(crate) http_client: reqwest::Client,
    /// Base URL for the API
    pub(crate) base_url: Url,
    /// Developer API key (hapikey query parameter)
    pub(crate) api_key: Option<SecretString>,
    /// Access token (Authorization: Bearer header)
    pub(crate) access_token: Option<SecretString>,
    /// Request timeout, reported in `Error::Timeout`
    pub(crate) timeout: Duration,
    /// Custom headers to include with every request
    pub(crate) default_headers: http::HeaderMap,
}

impl HubSpotHttpProvider {
    /// Create a new builder for configuring the provider.
    pub fn builder() -> HubSpotHttpProviderBuilder {
        HubSpotHttpProviderBuilder::default()
    }

    /// Log a failed exchange and convert the reqwest error.
    ///
    /// The URL is stripped first since it carries the `hapikey`.
    fn transport_error(
        &self,
        metadata: &RequestMetadata,
        timer: &RequestTimer,
        err: reqwest::Error,
    ) -> Error {
        let err = err.without_url();
        log_failure(metadata, timer.elapsed(), &err.to_string());
        if err.is_timeout() {
            Error::Timeout(self.inner.timeout)
        } else {
            err.into()
        }
    }

    /// Resolve the endpoint path and query pairs into a full URL.
    ///
    /// The path is joined below the base URL's own path, so a base such as
    /// `https://gateway.example.com/hubspot` keeps its prefix. The API key,
    /// if any, is appended last.
    fn build_url(&self, path: &str, query: &[(String, String)]) -> Result<Url> {
        let relative = path.trim_start_matches('/');
        let mut url = self.inner.base_url.join(relative).map_err(|e| {
            Error::InvalidUrl(format!("Failed to construct URL from path '{}': {}", path, e))
        })?;

        if !query.is_empty() || self.inner.api_key.is_some() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
            if let Some(api_key) = &self.inner.api_key {
                pairs.append_pair(API_KEY_PARAM, api_key.expose_secret());
            }
        }

        Ok(url)
    }

    fn build_request(
        &self,
        method: http::Method,
        url: Url,
        body: RequestBody,
    ) -> Result<reqwest::RequestBuilder> {
        let mut builder = self
            .inner
            .http_client
            .request(method, url)
            .headers(self.inner.default_headers.clone());

        if self.inner.api_key.is_none()
            && let Some(token) = &self.inner.access_token
        {
            builder = builder.bearer_auth(token.expose_secret());
        }

        Ok(match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(fields) => builder.multipart(build_form(fields)?),
        })
    }
}

/// Encode multipart fields into a form, dropping unset fields.
fn build_form(fields: Vec<MultipartField>) -> Result<Form> {
    let mut form = Form::new();
    for MultipartField { name, value } in fields {
        form = match value {
            MultipartValue::Null => continue,
            MultipartValue::Text(text) => form.text(name, text),
            MultipartValue::File(upload) => {
                let (file_name, len, body) = upload.into_body();
                let part = Part::stream_with_length(body, len)
                    .file_name(file_name)
                    .mime_str("application/octet-stream")?;
                form.part(name, part)
            }
        };
    }
    Ok(form)
}

fn body_kind(body: &RequestBody) -> &'static str {
    match body {
        RequestBody::Empty => "none",
        RequestBody::Json(_) => "json",
        RequestBody::Multipart(_) => "multipart",
    }
}

#[async_trait]
impl HttpProvider for HubSpotHttpProvider {
    async fn execute(&self, request: EndpointRequest) -> Result<Response> {
        let (method, path, query, body) = request.into_parts();
        let metadata = RequestMetadata::new(method.as_str(), &path).with_body_kind(body_kind(&body));

        let url = self.build_url(&path, &query)?;
        let builder = self.build_request(method, url, body)?;

        metadata.log_request();
        let timer = RequestTimer::start();

        let resp = match builder.send().await {
            Ok(resp) => resp,
            Err(e) => return Err(self.transport_error(&metadata, &timer, e)),
        };

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = match resp.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => return Err(self.transport_error(&metadata, &timer, e)),
        };

        let elapsed = timer.elapsed();
        ResponseMetadata::new(status.as_u16(), body.len(), elapsed).log_response(&metadata);

        Ok(Response::new(status, headers, body).with_elapsed(elapsed))
    }

    fn provider_name(&self) -> &'static str {
        "hubspot"
    }

    fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }
}

/// Builder for creating a `HubSpotHttpProvider` with custom configuration.
///
/// # Example
///
/// ```rust,no_run
/// use hubspot_filemanager::http::HubSpotHttpProvider;
///
/// let provider = HubSpotHttpProvider::builder()
///     .api_key("demo")
///     .timeout(std::time::Duration::from_secs(120))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct HubSpotHttpProviderBuilder {
    api_key: Option<SecretString>,
    access_token: Option<SecretString>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    proxy: Option<String>,
    default_headers: http::HeaderMap,
}

impl HubSpotHttpProviderBuilder {
    /// Set the developer API key, sent as the `hapikey` query parameter.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::new(api_key.into().into_boxed_str()));
        self
    }

    /// Set the OAuth or private app access token, sent as a bearer token.
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(SecretString::new(access_token.into().into_boxed_str()));
        self
    }

    pub(crate) fn api_key_secret(mut self, api_key: Option<SecretString>) -> Self {
        self.api_key = api_key;
        self
    }

    pub(crate) fn access_token_secret(mut self, access_token: Option<SecretString>) -> Self {
        self.access_token = access_token;
        self
    }

    /// Set the base URL for the API.
    ///
    /// Defaults to `https://api.hubapi.com`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    ///
    /// Defaults to 10 seconds.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Route all traffic through an HTTP proxy.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Add a custom header to include with every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key = key_str
            .parse::<http::HeaderName>()
            .map_err(|_| Error::InvalidHeaderName(key_str.clone()))?;
        let value = value_str
            .parse::<http::HeaderValue>()
            .map_err(|_| Error::InvalidHeaderValue(value_str.clone()))?;

        self.default_headers.insert(key, value);
        Ok(self)
    }

    pub(crate) fn headers(mut self, headers: http::HeaderMap) -> Self {
        for (key, value) in headers.iter() {
            self.default_headers.insert(key.clone(), value.clone());
        }
        self
    }

    /// Build the provider with the configured settings.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Neither API key nor access token is provided
    /// - The base URL is empty, unparsable, or not http/https
    /// - The proxy URL is invalid or the HTTP client cannot be created
    pub fn build(mut self) -> Result<HubSpotHttpProvider> {
        if self.api_key.is_none() && self.access_token.is_none() {
            #[cfg(feature = "env")]
            {
                use std::env;
                self.api_key = env::var("HUBSPOT_API_KEY")
                    .ok()
                    .map(|s| SecretString::new(s.into_boxed_str()));
                self.access_token = env::var("HUBSPOT_ACCESS_TOKEN")
                    .ok()
                    .map(|s| SecretString::new(s.into_boxed_str()));
            }

            if self.api_key.is_none() && self.access_token.is_none() {
                return Err(Error::Authentication(
                    "No API key or access token provided. Set HUBSPOT_API_KEY or HUBSPOT_ACCESS_TOKEN, or provide credentials explicitly.".to_string(),
                ));
            }
        }

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        let mut client_builder = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT))
            .user_agent(format!("hubspot-filemanager-rust/{}", crate::VERSION));

        if let Some(proxy) = &self.proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| Error::InvalidUrl(format!("Invalid proxy '{}': {}", proxy, e)))?;
            client_builder = client_builder.proxy(proxy);
        }

        let http_client = client_builder
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        let base_url_string = self
            .base_url
            .unwrap_or_else(|| crate::DEFAULT_BASE_URL.to_string());

        if base_url_string.trim().is_empty() {
            return Err(Error::InvalidUrl("Base URL cannot be empty".to_string()));
        }

        let mut base_url: Url = base_url_string
            .parse()
            .map_err(|e| Error::InvalidUrl(format!("{}", e)))?;

        match base_url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(Error::InvalidUrl(format!(
                    "Invalid URL scheme '{}'. Only 'http' and 'https' are supported.",
                    scheme
                )));
            }
        }

        if !base_url.path().ends_with('/') {
            let prefixed = format!("{}/", base_url.path());
            base_url.set_path(&prefixed);
        }

        let inner = Arc::new(ProviderInner {
            http_client,
            base_url,
            api_key: self.api_key,
            access_token: self.access_token,
            timeout,
            default_headers: self.default_headers,
        });

        Ok(HubSpotHttpProvider { inner })
    }
}
