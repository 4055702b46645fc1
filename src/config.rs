//! Client configuration
//!
//! Credentials and endpoints can come from a YAML file, from `GO_HTTP_*`
//! environment variables, or both (environment wins):
//!
//! ```yaml
//! api_url: http://go.vumi.org/api/v1/go
//! auth_token: secret
//! send_url: https://go.vumi.org/api/v1/go/http_api_nostream
//! account_key: acc
//! conversation_key: conv
//! conversation_token: conv-secret
//! timeout_secs: 30
//! ```

use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::send::SenderCredentials;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Prefix of the environment variables read by [`ClientConfig::with_env_overrides`]
pub const ENV_PREFIX: &str = "GO_HTTP_";

/// Settings shared by every API client
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Base URL of the contacts and account APIs
    pub api_url: Option<String>,
    /// Bearer token for the contacts and account APIs
    pub auth_token: Option<String>,
    /// Base URL of the message sending API
    pub send_url: Option<String>,
    /// Account key for message sending
    pub account_key: Option<String>,
    /// Conversation to send messages through
    pub conversation_key: Option<String>,
    /// Conversation token for message sending
    pub conversation_token: Option<String>,
    /// Transport timeout in seconds (none by default)
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Override fields from `GO_HTTP_*` environment variables
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Override fields from a variable lookup (`GO_HTTP_AUTH_TOKEN`, ...)
    #[must_use]
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |field: &str| {
            lookup(&format!("{ENV_PREFIX}{}", field.to_uppercase())).filter(|v| !v.is_empty())
        };

        if let Some(v) = var("api_url") {
            self.api_url = Some(v);
        }
        if let Some(v) = var("auth_token") {
            self.auth_token = Some(v);
        }
        if let Some(v) = var("send_url") {
            self.send_url = Some(v);
        }
        if let Some(v) = var("account_key") {
            self.account_key = Some(v);
        }
        if let Some(v) = var("conversation_key") {
            self.conversation_key = Some(v);
        }
        if let Some(v) = var("conversation_token") {
            self.conversation_token = Some(v);
        }
        if let Some(v) = var("timeout_secs").and_then(|v| v.parse().ok()) {
            self.timeout_secs = Some(v);
        }
        self
    }

    /// Bearer token, or an error naming the missing field
    pub fn require_auth_token(&self) -> Result<&str> {
        require(self.auth_token.as_deref(), "auth_token")
    }

    /// Conversation-scoped credentials for message sending
    pub fn sender_credentials(&self) -> Result<SenderCredentials> {
        Ok(SenderCredentials::new(
            require(self.account_key.as_deref(), "account_key")?,
            require(self.conversation_key.as_deref(), "conversation_key")?,
            require(self.conversation_token.as_deref(), "conversation_token")?,
        ))
    }

    /// HTTP client settings for `base_url`
    pub fn http_config(&self, base_url: &str) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder().base_url(base_url);
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("auth_token", &redact(&self.auth_token))
            .field("send_url", &self.send_url)
            .field("account_key", &self.account_key)
            .field("conversation_key", &self.conversation_key)
            .field("conversation_token", &redact(&self.conversation_token))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn require<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::missing_field(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_from_yaml_str() {
        let config = ClientConfig::from_yaml_str(
            r"
api_url: http://example.com/go
auth_token: secret
timeout_secs: 5
",
        )
        .unwrap();

        assert_eq!(config.api_url.as_deref(), Some("http://example.com/go"));
        assert_eq!(config.require_auth_token().unwrap(), "secret");
        assert_eq!(config.timeout_secs, Some(5));
        assert!(config.send_url.is_none());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(ClientConfig::from_yaml_str("  \n").unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ClientConfig::from_yaml_str("api_token: oops").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "account_key: acc").unwrap();
        writeln!(file, "conversation_key: conv").unwrap();
        writeln!(file, "conversation_token: tok").unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        let creds = config.sender_credentials().unwrap();
        assert_eq!(creds, SenderCredentials::new("acc", "conv", "tok"));
    }

    #[test]
    fn test_from_missing_file() {
        let err = ClientConfig::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("GO_HTTP_AUTH_TOKEN", "from-env"),
            ("GO_HTTP_API_URL", ""),
            ("GO_HTTP_TIMEOUT_SECS", "12"),
        ]
        .into_iter()
        .collect();

        let config = ClientConfig {
            api_url: Some("http://file/go".to_string()),
            auth_token: Some("from-file".to_string()),
            ..Default::default()
        }
        .with_overrides_from(|name| env.get(name).map(ToString::to_string));

        assert_eq!(config.auth_token.as_deref(), Some("from-env"));
        // Empty variables do not clear file values
        assert_eq!(config.api_url.as_deref(), Some("http://file/go"));
        assert_eq!(config.timeout_secs, Some(12));
    }

    #[test]
    fn test_missing_credentials() {
        let config = ClientConfig::default();
        assert!(matches!(
            config.require_auth_token().unwrap_err(),
            Error::MissingConfigField { field } if field == "auth_token"
        ));

        let config = ClientConfig {
            account_key: Some("acc".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.sender_credentials().unwrap_err(),
            Error::MissingConfigField { field } if field == "conversation_key"
        ));
    }

    #[test]
    fn test_http_config_timeout() {
        let config = ClientConfig {
            timeout_secs: Some(3),
            ..Default::default()
        };
        let http = config.http_config("http://example.com");
        assert_eq!(http.base_url, "http://example.com");
        assert_eq!(http.timeout, Some(Duration::from_secs(3)));

        assert!(ClientConfig::default().http_config("http://x").timeout.is_none());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = ClientConfig {
            auth_token: Some("s3cret".to_string()),
            conversation_token: Some("t0ken".to_string()),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("s3cret"));
        assert!(!debug.contains("t0ken"));
    }
}
