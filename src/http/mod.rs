//! HTTP client module
//!
//! Provides the request executor shared by every resource client.
//!
//! # Features
//!
//! - **JSON in, JSON out**: bodies are serialized and responses decoded here
//! - **Authentication**: bearer or basic credentials via the auth module
//! - **Status mapping**: non-2xx responses become `Error::HttpStatus`
//! - **Injectable transport**: callers may supply their own `reqwest::Client`

mod client;

pub use client::{
    HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig, JSON_CONTENT_TYPE,
};
