//! Account API client

use super::types::{RpcRequest, RpcResponse};
use crate::auth::AuthConfig;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::types::JsonValue;
use serde_json::json;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Default base URL of the account API
pub const DEFAULT_API_URL: &str = "https://go.vumi.org/api/v1/go";

/// Client for the account JSON-RPC API
#[derive(Debug)]
pub struct AccountApiClient {
    http: HttpClient,
    next_id: AtomicU64,
}

impl AccountApiClient {
    /// Create a client against the default API URL
    pub fn new(auth_token: impl Into<String>) -> Result<Self> {
        Self::with_url(auth_token, DEFAULT_API_URL)
    }

    /// Create a client against a custom API URL
    pub fn with_url(auth_token: impl Into<String>, api_url: impl Into<String>) -> Result<Self> {
        let config = HttpClientConfig::builder().base_url(api_url).build();
        let http = HttpClient::with_auth(config, AuthConfig::bearer(auth_token))?;
        Ok(Self::from_http(http))
    }

    /// Create a client on top of a caller-supplied transport
    pub fn with_client(
        auth_token: impl Into<String>,
        api_url: impl Into<String>,
        client: reqwest::Client,
    ) -> Result<Self> {
        let config = HttpClientConfig::builder().base_url(api_url).build();
        let mut http = HttpClient::with_client(config, client)?;
        http.set_authenticator(AuthConfig::bearer(auth_token));
        Ok(Self::from_http(http))
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let token = config.require_auth_token()?;
        let http_config = config.http_config(config.api_url.as_deref().unwrap_or(DEFAULT_API_URL));
        let http = HttpClient::with_auth(http_config, AuthConfig::bearer(token))?;
        Ok(Self::from_http(http))
    }

    fn from_http(http: HttpClient) -> Self {
        Self {
            http,
            next_id: AtomicU64::new(1),
        }
    }

    /// Base URL requests are sent to
    pub fn api_url(&self) -> &str {
        self.http.base_url()
    }

    /// Invoke a remote method with positional parameters
    pub async fn call(&self, method: &str, params: Vec<JsonValue>) -> Result<JsonValue> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(id, method, params);
        debug!("account rpc #{} {}", id, method);

        let body = self.http.post(&[""], serde_json::to_value(&request)?).await?;
        let response: RpcResponse = serde_json::from_value(body)
            .map_err(|e| Error::decode(format!("malformed JSON-RPC response: {e}")))?;
        response.into_result()
    }

    /// List the account's campaigns
    pub async fn campaigns(&self) -> Result<JsonValue> {
        self.call("campaigns", vec![]).await
    }

    /// List the conversations of a campaign
    pub async fn conversations(&self, campaign_key: &str) -> Result<JsonValue> {
        self.call("conversations", vec![json!(campaign_key)]).await
    }

    /// Update a conversation
    pub async fn update_conversation(
        &self,
        campaign_key: &str,
        conversation_key: &str,
        data: JsonValue,
    ) -> Result<JsonValue> {
        self.call(
            "update_conversation",
            vec![json!(campaign_key), json!(conversation_key), data],
        )
        .await
    }

    /// List routing table entries of a campaign
    pub async fn routing_entries(&self, campaign_key: &str) -> Result<JsonValue> {
        self.call("routing_entries", vec![json!(campaign_key)])
            .await
    }

    /// Get the routing table of a campaign
    pub async fn routing_table(&self, campaign_key: &str) -> Result<JsonValue> {
        self.call("routing_table", vec![json!(campaign_key)]).await
    }

    /// Replace the routing table of a campaign
    pub async fn update_routing_table(
        &self,
        campaign_key: &str,
        routing_table: JsonValue,
    ) -> Result<JsonValue> {
        self.call(
            "update_routing_table",
            vec![json!(campaign_key), routing_table],
        )
        .await
    }
}
