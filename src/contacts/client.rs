//! Contacts and groups client

use crate::auth::AuthConfig;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::pagination::CursorPager;
use crate::types::{JsonValue, Record};

/// Default base URL of the contacts API
pub const DEFAULT_API_URL: &str = "http://go.vumi.org/api/v1/go";

/// Contacts collection name
pub const CONTACTS: &str = "contacts";

/// Groups collection name
pub const GROUPS: &str = "groups";

/// Client for the contacts and groups API (bearer-token authenticated)
#[derive(Debug, Clone)]
pub struct ContactsApiClient {
    http: HttpClient,
}

impl ContactsApiClient {
    /// Create a client against the default API URL
    pub fn new(auth_token: impl Into<String>) -> Result<Self> {
        Self::with_url(auth_token, DEFAULT_API_URL)
    }

    /// Create a client against a custom API URL
    pub fn with_url(auth_token: impl Into<String>, api_url: impl Into<String>) -> Result<Self> {
        let config = HttpClientConfig::builder().base_url(api_url).build();
        let http = HttpClient::with_auth(config, AuthConfig::bearer(auth_token))?;
        Ok(Self { http })
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
        Ok(Self { http })
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let token = config.require_auth_token()?;
        let http_config = config.http_config(config.api_url.as_deref().unwrap_or(DEFAULT_API_URL));
        let http = HttpClient::with_auth(http_config, AuthConfig::bearer(token))?;
        Ok(Self { http })
    }

    /// Base URL requests are sent to
    pub fn api_url(&self) -> &str {
        self.http.base_url()
    }

    // ========================================================================
    // Contacts
    // ========================================================================

    /// Iterate over all contacts, optionally resuming at `start_cursor`.
    ///
    /// Pages are fetched lazily as the returned pager is advanced.
    pub fn contacts(&self, start_cursor: Option<&str>) -> CursorPager<'_> {
        CursorPager::new(&self.http, CONTACTS, start_cursor.map(str::to_owned))
    }

    /// Create a contact
    pub async fn create_contact(&self, contact_data: JsonValue) -> Result<Record> {
        self.http.post(&[CONTACTS], contact_data).await
    }

    /// Get a contact by key
    pub async fn get_contact(&self, contact_key: &str) -> Result<Record> {
        self.http.get(&[CONTACTS, contact_key]).await
    }

    /// Get the first contact whose `field` equals `value`.
    ///
    /// Fails with `Error::Lookup` when nothing matches.
    pub async fn get_contact_from_field(&self, field: &str, value: &str) -> Result<Record> {
        let config = RequestConfig::new().query("query", format!("{field}={value}"));
        let body = self.http.get_with_config(&[CONTACTS], config).await?;

        let matches = body
            .get("data")
            .and_then(JsonValue::as_array)
            .ok_or_else(|| Error::decode("contact query response has no `data` list"))?;

        matches
            .first()
            .cloned()
            .ok_or_else(|| Error::lookup(field, value))
    }

    /// Update fields of a contact
    pub async fn update_contact(&self, contact_key: &str, update_data: JsonValue) -> Result<Record> {
        self.http.put(&[CONTACTS, contact_key], update_data).await
    }

    /// Delete a contact, returning the deleted record
    pub async fn delete_contact(&self, contact_key: &str) -> Result<Record> {
        self.http.delete(&[CONTACTS, contact_key]).await
    }

    // ========================================================================
    // Groups
    // ========================================================================

    /// Iterate over all groups, optionally resuming at `start_cursor`
    pub fn groups(&self, start_cursor: Option<&str>) -> CursorPager<'_> {
        CursorPager::new(&self.http, GROUPS, start_cursor.map(str::to_owned))
    }

    /// Create a group
    pub async fn create_group(&self, group_data: JsonValue) -> Result<Record> {
        self.http.post(&[GROUPS], group_data).await
    }

    /// Get a group by key
    pub async fn get_group(&self, group_key: &str) -> Result<Record> {
        self.http.get(&[GROUPS, group_key]).await
    }

    /// Update fields of a group
    pub async fn update_group(&self, group_key: &str, update_data: JsonValue) -> Result<Record> {
        self.http.put(&[GROUPS, group_key], update_data).await
    }

    /// Delete a group, returning the deleted record
    pub async fn delete_group(&self, group_key: &str) -> Result<Record> {
        self.http.delete(&[GROUPS, group_key]).await
    }
}
