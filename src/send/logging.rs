//! Sender that only logs

use super::Sender;
use crate::error::Result;
use crate::types::{JsonValue, LogLevel};
use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error, info, trace, warn};

/// Logs each message through `tracing` and sends nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSender {
    level: LogLevel,
}

impl LoggingSender {
    /// Create a sender logging at `level`
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Level messages are logged at
    pub fn level(&self) -> LogLevel {
        self.level
    }
}

#[async_trait]
impl Sender for LoggingSender {
    async fn send(&self, to_addr: &str, content: &str) -> Result<JsonValue> {
        match self.level {
            LogLevel::Trace => trace!(to_addr, content, "Message sent"),
            LogLevel::Debug => debug!(to_addr, content, "Message sent"),
            LogLevel::Info => info!(to_addr, content, "Message sent"),
            LogLevel::Warn => warn!(to_addr, content, "Message sent"),
            LogLevel::Error => error!(to_addr, content, "Message sent"),
        }
        Ok(json!({"to_addr": to_addr, "content": content}))
    }
}
