//! Request executor
//!
//! Every call is exactly one HTTP round trip:
//! - Authenticated JSON request construction
//! - Response body parsing
//! - Non-2xx statuses mapped to `Error::HttpStatus`
//!
//! There is no retry, caching or rate limiting at this layer.

use crate::auth::{AuthConfig, Authenticator};
use crate::error::{Error, Result};
use crate::types::{JsonValue, Method, StringMap};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Content type sent with every request
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL all request paths are joined onto
    pub base_url: String,
    /// Transport timeout, applied only when the client builds its own transport
    pub timeout: Option<Duration>,
    /// Default headers for all requests
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout: None,
            default_headers: StringMap::new(),
            user_agent: format!("go-http/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the transport timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters
    pub query: StringMap,
    /// Request headers
    pub headers: StringMap,
    /// Request body (JSON)
    pub body: Option<JsonValue>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }
}

/// Authenticated JSON request executor
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    config: HttpClientConfig,
    authenticator: Authenticator,
}

impl HttpClient {
    /// Create a client that owns a freshly built transport
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Self::with_client(config, client)
    }

    /// Create a client on top of a caller-supplied transport
    pub fn with_client(config: HttpClientConfig, client: Client) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;
        Ok(Self {
            client,
            base_url,
            config,
            authenticator: Authenticator::default(),
        })
    }

    /// Create a client with authentication
    pub fn with_auth(config: HttpClientConfig, auth_config: AuthConfig) -> Result<Self> {
        let mut client = Self::new(config)?;
        client.set_authenticator(auth_config);
        Ok(client)
    }

    /// Set the authenticator
    pub fn set_authenticator(&mut self, auth_config: AuthConfig) {
        self.authenticator = Authenticator::new(auth_config);
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Base URL with trailing slashes removed
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Make a GET request
    pub async fn get(&self, segments: &[&str]) -> Result<JsonValue> {
        self.request(Method::GET, segments, RequestConfig::default())
            .await
    }

    /// Make a GET request with config
    pub async fn get_with_config(
        &self,
        segments: &[&str],
        config: RequestConfig,
    ) -> Result<JsonValue> {
        self.request(Method::GET, segments, config).await
    }

    /// Make a POST request
    pub async fn post(&self, segments: &[&str], body: JsonValue) -> Result<JsonValue> {
        self.request(Method::POST, segments, RequestConfig::default().json(body))
            .await
    }

    /// Make a PUT request
    pub async fn put(&self, segments: &[&str], body: JsonValue) -> Result<JsonValue> {
        self.request(Method::PUT, segments, RequestConfig::default().json(body))
            .await
    }

    /// Make a DELETE request
    pub async fn delete(&self, segments: &[&str]) -> Result<JsonValue> {
        self.request(Method::DELETE, segments, RequestConfig::default())
            .await
    }

    /// Make a request and decode the JSON response
    pub async fn request(
        &self,
        method: Method,
        segments: &[&str],
        config: RequestConfig,
    ) -> Result<JsonValue> {
        let url = self.build_url(segments)?;

        let mut req = self
            .client
            .request(method.into(), url.clone())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        for (key, value) in &config.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        if let Some(ref body) = config.body {
            req = req.body(serde_json::to_string(body)?);
        }

        req = self.authenticator.apply(req);

        debug!("{} {}", method, url);
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!("{} {} failed with {}", method, url, status.as_u16());
            return Err(Error::http_status(status.as_u16(), body));
        }

        decode_body(&body).map_err(|e| {
            Error::decode(format!("invalid JSON in response to {method} {url}: {e}"))
        })
    }

    /// Join path segments onto the base URL, percent-encoding each one
    pub fn build_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::config(format!("base URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("config", &self.config)
            .field("auth", self.authenticator.config())
            .finish_non_exhaustive()
    }
}

/// Parse the base URL, stripping trailing slashes once
fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(Error::missing_field("base_url"));
    }
    Ok(Url::parse(trimmed)?)
}

/// An empty body decodes to `null`; anything else must be valid JSON
fn decode_body(body: &str) -> std::result::Result<JsonValue, serde_json::Error> {
    if body.is_empty() {
        return Ok(JsonValue::Null);
    }
    serde_json::from_str(body)
}
