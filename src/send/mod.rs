//! Message sending module
//!
//! - `HttpApiSender` - sends through a conversation's HTTP API endpoint
//! - `LoggingSender` - logs messages instead of sending them
//!
//! Both implement the [`Sender`] trait so callers can swap one for the other.

mod http_api;
mod logging;

pub use http_api::{HttpApiSender, SenderCredentials, DEFAULT_SEND_URL};
pub use logging::LoggingSender;

use crate::error::Result;
use crate::types::JsonValue;
use async_trait::async_trait;

/// Something that can send a text message to an address
#[async_trait]
pub trait Sender: Send + Sync {
    /// Send `content` to `to_addr`, returning the platform's response
    async fn send(&self, to_addr: &str, content: &str) -> Result<JsonValue>;
}
