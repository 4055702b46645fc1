// Allow common clippy pedantic lints
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]

//! # go-http
//!
//! Async client library for the Vumi Go HTTP APIs.
//!
//! ## Features
//!
//! - **Contacts and groups**: create, get, update and delete records, look
//!   contacts up by field
//! - **Cursor pagination**: lazy, resumable listings; a failed page reports
//!   the cursor to resume from
//! - **Message sending**: conversation-scoped HTTP API sender, plus a
//!   logging sender for dry runs
//! - **Account API**: JSON-RPC access to campaigns, conversations and
//!   routing tables
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use go_http::{ContactsApiClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ContactsApiClient::new("auth-token")?;
//!
//!     let contact = client
//!         .create_contact(serde_json::json!({"msisdn": "+15556483"}))
//!         .await?;
//!
//!     let mut contacts = client.contacts(None);
//!     while let Some(contact) = contacts.next().await {
//!         match contact {
//!             Ok(contact) => println!("{contact}"),
//!             Err(e) => {
//!                 // Restart later from e.resume_cursor()
//!                 return Err(e);
//!             }
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┬──────────────────┬──────────────────┐
//! │ ContactsApiClient│  HttpApiSender   │ AccountApiClient │
//! │ contacts, groups │  LoggingSender   │   JSON-RPC 2.0   │
//! ├──────────────────┴──────────────────┴──────────────────┤
//! │      CursorPager (lazy, resumable cursor listings)     │
//! ├────────────────────────────────────────────────────────┤
//! │  HttpClient (URL building, auth, JSON decode, status)  │
//! └────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication
pub mod auth;

/// HTTP request executor
pub mod http;

/// Cursor pagination
pub mod pagination;

/// Contacts and groups API
pub mod contacts;

/// Message sending
pub mod send;

/// Account JSON-RPC API
pub mod account;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use account::AccountApiClient;
pub use config::ClientConfig;
pub use contacts::ContactsApiClient;
pub use pagination::CursorPager;
pub use send::{HttpApiSender, LoggingSender, Sender, SenderCredentials};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
