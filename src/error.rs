//! Error types for go-http
//!
//! This module defines the error taxonomy for the whole client.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Nothing is retried or swallowed: every variant reaches the caller.

use thiserror::Error;

/// The main error type for go-http
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Transport / HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    // ============================================================================
    // Decoding Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // API Errors
    // ============================================================================
    #[error("Paged request failed at cursor {cursor:?}: {error}")]
    Paged {
        cursor: Option<String>,
        #[source]
        error: Box<Error>,
    },

    #[error("No contact found with {field}={value}")]
    Lookup { field: String, value: String },

    #[error("Recipient {to_addr} has opted out: {reason}")]
    OptedOut {
        to_addr: String,
        content: String,
        reason: String,
    },

    #[error("JSON-RPC fault {fault} ({fault_code}): {fault_string}")]
    JsonRpc {
        fault: String,
        fault_code: i64,
        fault_string: String,
    },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Wrap an error raised while fetching the page at `cursor`
    pub fn paged(cursor: Option<String>, error: Error) -> Self {
        Self::Paged {
            cursor,
            error: Box::new(error),
        }
    }

    /// Create a lookup failure
    pub fn lookup(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Lookup {
            field: field.into(),
            value: value.into(),
        }
    }

    /// HTTP status carried by this error, looking through paged failures
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            Error::Paged { error, .. } => error.status(),
            _ => None,
        }
    }

    /// Cursor to pass back as `start_cursor` to resume a failed listing.
    ///
    /// Returns `None` for errors that did not come from a paginated request,
    /// and `Some(None)` when the very first page failed without a start cursor.
    pub fn resume_cursor(&self) -> Option<Option<&str>> {
        match self {
            Error::Paged { cursor, .. } => Some(cursor.as_deref()),
            _ => None,
        }
    }

    /// Check if this error is an HTTP 404
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Result type alias for go-http
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
