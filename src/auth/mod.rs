//! Authentication module
//!
//! Supports: Bearer (contacts, groups and account APIs) and HTTP Basic
//! (conversation-scoped message sending).
//!
//! Tokens are supplied by the caller; nothing here acquires or refreshes them.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::AuthConfig;
