//! Sender backed by a conversation's HTTP API

use super::Sender;
use crate::auth::AuthConfig;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::types::JsonValue;
use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

/// Default base URL of the message sending API
pub const DEFAULT_SEND_URL: &str = "https://go.vumi.org/api/v1/go/http_api_nostream";

/// Conversation-scoped credentials for sending messages
#[derive(Clone, PartialEq, Eq)]
pub struct SenderCredentials {
    /// Account the conversation belongs to
    pub account_key: String,
    /// Conversation to send through
    pub conversation_key: String,
    /// Secret token from the conversation config
    pub conversation_token: String,
}

impl SenderCredentials {
    /// Create a new set of credentials
    pub fn new(
        account_key: impl Into<String>,
        conversation_key: impl Into<String>,
        conversation_token: impl Into<String>,
    ) -> Self {
        Self {
            account_key: account_key.into(),
            conversation_key: conversation_key.into(),
            conversation_token: conversation_token.into(),
        }
    }

    fn auth(&self) -> AuthConfig {
        AuthConfig::basic(&self.account_key, &self.conversation_token)
    }
}

impl std::fmt::Debug for SenderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SenderCredentials")
            .field("account_key", &self.account_key)
            .field("conversation_key", &self.conversation_key)
            .field("conversation_token", &"<redacted>")
            .finish()
    }
}

/// Sends messages with `PUT {base}/{conversation_key}/messages.json`
#[derive(Debug, Clone)]
pub struct HttpApiSender {
    http: HttpClient,
    conversation_key: String,
}

impl HttpApiSender {
    /// Create a sender against the default API URL
    pub fn new(credentials: SenderCredentials) -> Result<Self> {
        Self::with_url(DEFAULT_SEND_URL, credentials)
    }

    /// Create a sender against a custom API URL
    pub fn with_url(api_url: impl Into<String>, credentials: SenderCredentials) -> Result<Self> {
        let config = HttpClientConfig::builder().base_url(api_url).build();
        let http = HttpClient::with_auth(config, credentials.auth())?;
        Ok(Self {
            http,
            conversation_key: credentials.conversation_key,
        })
    }

    /// Create a sender on top of a caller-supplied transport
    pub fn with_client(
        api_url: impl Into<String>,
        credentials: SenderCredentials,
        client: reqwest::Client,
    ) -> Result<Self> {
        let config = HttpClientConfig::builder().base_url(api_url).build();
        let mut http = HttpClient::with_client(config, client)?;
        http.set_authenticator(credentials.auth());
        Ok(Self {
            http,
            conversation_key: credentials.conversation_key,
        })
    }

    /// Create a sender from loaded configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let credentials = config.sender_credentials()?;
        let http_config = config.http_config(config.send_url.as_deref().unwrap_or(DEFAULT_SEND_URL));
        let http = HttpClient::with_auth(http_config, credentials.auth())?;
        Ok(Self {
            http,
            conversation_key: credentials.conversation_key,
        })
    }

    /// Base URL requests are sent to
    pub fn api_url(&self) -> &str {
        self.http.base_url()
    }

    /// Conversation messages are sent through
    pub fn conversation_key(&self) -> &str {
        &self.conversation_key
    }
}

#[async_trait]
impl Sender for HttpApiSender {
    async fn send(&self, to_addr: &str, content: &str) -> Result<JsonValue> {
        let body = json!({"content": content, "to_addr": to_addr});
        debug!("sending message to {} via {}", to_addr, self.conversation_key);

        self.http
            .put(&[self.conversation_key.as_str(), "messages.json"], body)
            .await
            .map_err(|e| classify_send_error(e, to_addr, content))
    }
}

/// Map a rejected send to `Error::OptedOut` when the platform says the
/// recipient opted out; every other error passes through unchanged.
fn classify_send_error(error: Error, to_addr: &str, content: &str) -> Error {
    let Error::HttpStatus { status: 400, body } = &error else {
        return error;
    };
    let Ok(response) = serde_json::from_str::<JsonValue>(body) else {
        return error;
    };

    let succeeded = response
        .get("success")
        .and_then(JsonValue::as_bool)
        .unwrap_or(false);
    let reason = response.get("reason").and_then(JsonValue::as_str);

    match reason {
        Some(reason) if !succeeded && reason.contains("opted out") => Error::OptedOut {
            to_addr: to_addr.to_string(),
            content: content.to_string(),
            reason: reason.to_string(),
        },
        _ => error,
    }
}
