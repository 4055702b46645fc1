//! CLI module
//!
//! Command-line interface over the API clients.
//!
//! # Commands
//!
//! - `contacts` - List, get, find, create, update and delete contacts
//! - `groups` - List, get, create, update and delete groups
//! - `send` - Send a message through a conversation
//! - `account` - Query campaigns, conversations and routing tables

mod commands;
mod runner;

pub use commands::{AccountCommand, Cli, Commands, ContactsCommand, GroupsCommand, OutputFormat};
pub use runner::Runner;
