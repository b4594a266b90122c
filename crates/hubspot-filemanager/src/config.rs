//! Configuration for the HubSpot File Manager client

use crate::http::hubspot_provider::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT};
use http::HeaderMap;
use secrecy::SecretString;
use std::time::Duration;

/// Configuration for the client.
///
/// Credentials are kept as [`SecretString`] so they never show up in `Debug`
/// output or logs.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Developer API key, sent as the `hapikey` query parameter
    pub api_key: Option<SecretString>,

    /// OAuth or private app access token, sent as `Authorization: Bearer`
    pub access_token: Option<SecretString>,

    /// Base URL for the API (default `https://api.hubapi.com`)
    pub base_url: Option<String>,

    /// Request timeout (default 30 seconds)
    pub timeout: Duration,

    /// Connect timeout (default 10 seconds)
    pub connect_timeout: Duration,

    /// Custom headers to include with every request
    pub default_headers: HeaderMap,

    /// HTTP proxy URL
    pub proxy: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            access_token: None,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            default_headers: HeaderMap::new(),
            proxy: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with an API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(SecretString::new(api_key.into().into_boxed_str())),
            ..Default::default()
        }
    }

    /// Create a new configuration with an access token.
    pub fn with_access_token(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(SecretString::new(access_token.into().into_boxed_str())),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first, if present.
    /// This will look for:
    /// - `HUBSPOT_API_KEY` or `HUBSPOT_ACCESS_TOKEN` for authentication
    /// - `HUBSPOT_BASE_URL` for the API base URL
    /// - `HUBSPOT_TIMEOUT` for request timeout (in seconds)
    /// - `HUBSPOT_PROXY` for HTTP proxy
    ///
    /// Unparsable numeric values are ignored and the default is kept.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self, crate::error::Error> {
        use std::env;

        // A missing .env file is the normal case.
        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Ok(api_key) = env::var("HUBSPOT_API_KEY") {
            config.api_key = Some(SecretString::new(api_key.into_boxed_str()));
        } else if let Ok(access_token) = env::var("HUBSPOT_ACCESS_TOKEN") {
            config.access_token = Some(SecretString::new(access_token.into_boxed_str()));
        }

        if let Ok(base_url) = env::var("HUBSPOT_BASE_URL") {
            config.base_url = Some(base_url);
        }

        if let Ok(timeout_str) = env::var("HUBSPOT_TIMEOUT")
            && let Ok(timeout_secs) = timeout_str.parse::<u64>()
        {
            config.timeout = Duration::from_secs(timeout_secs);
        }

        if let Ok(proxy) = env::var("HUBSPOT_PROXY") {
            config.proxy = Some(proxy);
        }

        Ok(config)
    }

    /// Merge this configuration with another, with the other taking precedence.
    ///
    /// Durations only override when they differ from the defaults.
    pub fn merge(mut self, other: ClientConfig) -> Self {
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.access_token.is_some() {
            self.access_token = other.access_token;
        }
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.timeout != DEFAULT_TIMEOUT {
            self.timeout = other.timeout;
        }
        if other.connect_timeout != DEFAULT_CONNECT_TIMEOUT {
            self.connect_timeout = other.connect_timeout;
        }
        for (key, value) in other.default_headers.iter() {
            self.default_headers.insert(key.clone(), value.clone());
        }
        if other.proxy.is_some() {
            self.proxy = other.proxy;
        }

        self
    }
}
