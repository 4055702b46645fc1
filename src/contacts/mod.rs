//! Contacts API module
//!
//! CRUD over contacts and groups, plus lazy cursor-paginated listing.
//!
//! # Endpoints
//!
//! - `GET {base}/contacts[?cursor=C]` - list (see [`crate::pagination`])
//! - `POST {base}/contacts` - create
//! - `GET|PUT|DELETE {base}/contacts/{key}` - read, update, delete
//! - `GET {base}/contacts?query=field=value` - lookup by field
//! - `POST {base}/groups`, `GET|PUT|DELETE {base}/groups/{key}`

mod client;

pub use client::{ContactsApiClient, CONTACTS, DEFAULT_API_URL, GROUPS};

#[cfg(test)]
mod tests;
