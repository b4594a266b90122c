//! Main client implementation for the HubSpot File Manager API

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;

use crate::{
    config::ClientConfig,
    error::{Error, Result},
    http::{EndpointRequest, HttpProvider, HubSpotHttpProvider, Response},
    resources::Files,
};

/// Main client for interacting with the HubSpot File Manager API.
///
/// The client is a cheap handle around shared, immutable state: cloning it
/// shares the same provider and connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use hubspot_filemanager::Client;
///
/// let client = Client::try_new("pat-na1-...").unwrap();
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    /// HTTP provider for making requests (handles auth, encoding, transport)
    provider: Arc<dyn HttpProvider>,
}

impl Client {
    /// Create a new client with an access token.
    ///
    /// # Panics
    ///
    /// This convenience method panics if the client cannot be built with the
    /// default configuration. Use [`Client::try_new()`] for fallible
    /// construction.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::try_new(access_token).expect("Failed to build client with provided access token")
    }

    /// Create a new client with an access token (fallible version).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be configured.
    pub fn try_new(access_token: impl Into<String>) -> Result<Self> {
        Self::builder().access_token(access_token).build()
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client with a custom HTTP provider.
    ///
    /// Every request built by the resources is sent through `provider`.
    pub fn from_provider(provider: Arc<dyn HttpProvider>) -> Self {
        Self {
            inner: Arc::new(ClientInner { provider }),
        }
    }

    /// Create a client from a configuration object.
    ///
    /// # Errors
    ///
    /// Returns an error if no credentials are available, the base URL or
    /// proxy is invalid, or the HTTP client cannot be built.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let mut provider_builder = HubSpotHttpProvider::builder()
            .api_key_secret(config.api_key)
            .access_token_secret(config.access_token)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .headers(config.default_headers);

        if let Some(base_url) = config.base_url {
            provider_builder = provider_builder.base_url(base_url);
        }
        if let Some(proxy) = config.proxy {
            provider_builder = provider_builder.proxy(proxy);
        }

        let provider = Arc::new(provider_builder.build()?);
        Ok(Self::from_provider(provider))
    }

    /// Create a client from `HUBSPOT_*` environment variables.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_env`] and [`Client::from_config`].
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    /// Access the files and folders endpoints.
    pub fn files(&self) -> Files<'_> {
        Files::new(self)
    }

    /// Send a request through the configured provider.
    ///
    /// The response is returned as received; error statuses are not
    /// converted into `Err`.
    pub async fn execute(&self, request: EndpointRequest) -> Result<Response> {
        self.inner.provider.execute(request).await
    }

    /// Get the base URL for the API
    pub fn base_url(&self) -> &str {
        self.inner.provider.base_url()
    }

    /// Get the provider name (for debugging)
    pub fn provider_name(&self) -> &'static str {
        self.inner.provider.provider_name()
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("provider", &self.inner.provider)
            .finish()
    }
}

/// Builder for creating a configured Client.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Set the developer API key (sent as `hapikey`).
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(SecretString::new(api_key.into().into_boxed_str()));
        self
    }

    /// Set the OAuth or private app access token.
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.config.access_token = Some(SecretString::new(access_token.into().into_boxed_str()));
        self
    }

    /// Set the base URL for the API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Route all traffic through an HTTP proxy.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.proxy = Some(proxy.into());
        self
    }

    /// Add a custom default header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid according to HTTP specifications.
    pub fn default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key: http::HeaderName = key_str
            .parse()
            .map_err(|_| Error::InvalidHeaderName(key_str.clone()))?;
        let value: http::HeaderValue = value_str
            .parse()
            .map_err(|_| Error::InvalidHeaderValue(value_str.clone()))?;

        self.config.default_headers.insert(key, value);
        Ok(self)
    }

    /// Start from an existing configuration; later builder calls override it.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = self.config.merge(config);
        self
    }

    /// Build the client with the configured options.
    ///
    /// # Errors
    ///
    /// See [`Client::from_config`].
    pub fn build(self) -> Result<Client> {
        Client::from_config(self.config)
    }
}
