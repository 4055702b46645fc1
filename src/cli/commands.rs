//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line client for the Vumi Go HTTP APIs
#[derive(Parser, Debug)]
#[command(name = "go-http")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the contacts and account APIs
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Bearer token for the contacts and account APIs
    #[arg(long, global = true)]
    pub auth_token: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage contacts
    Contacts {
        #[command(subcommand)]
        action: ContactsCommand,
    },

    /// Manage groups
    Groups {
        #[command(subcommand)]
        action: GroupsCommand,
    },

    /// Send a message through a conversation
    Send {
        /// Recipient address
        to_addr: String,

        /// Message content
        content: String,

        /// Log the message instead of sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// Query the account API
    Account {
        #[command(subcommand)]
        action: AccountCommand,
    },
}

/// Contact operations
#[derive(Subcommand, Debug)]
pub enum ContactsCommand {
    /// List contacts, page by page
    List {
        /// Cursor to resume a previous listing from
        #[arg(long)]
        start_cursor: Option<String>,

        /// Stop after this many contacts
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Get a contact by key
    Get {
        /// Contact key
        key: String,
    },

    /// Find the first contact whose field matches a value
    Find {
        /// Field to search on (e.g. msisdn)
        field: String,

        /// Value the field must match
        value: String,
    },

    /// Create a contact from a JSON object
    Create {
        /// Contact fields as JSON
        json: String,
    },

    /// Update a contact from a JSON object
    Update {
        /// Contact key
        key: String,

        /// Fields to modify as JSON
        json: String,
    },

    /// Delete a contact
    Delete {
        /// Contact key
        key: String,
    },
}

/// Group operations
#[derive(Subcommand, Debug)]
pub enum GroupsCommand {
    /// List groups, page by page
    List {
        /// Cursor to resume a previous listing from
        #[arg(long)]
        start_cursor: Option<String>,

        /// Stop after this many groups
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Get a group by key
    Get {
        /// Group key
        key: String,
    },

    /// Create a group from a JSON object
    Create {
        /// Group fields as JSON
        json: String,
    },

    /// Update a group from a JSON object
    Update {
        /// Group key
        key: String,

        /// Fields to modify as JSON
        json: String,
    },

    /// Delete a group
    Delete {
        /// Group key
        key: String,
    },
}

/// Account operations
#[derive(Subcommand, Debug)]
pub enum AccountCommand {
    /// List campaigns
    Campaigns,

    /// List conversations of a campaign
    Conversations {
        /// Campaign key
        campaign_key: String,
    },

    /// Show the routing table of a campaign
    RoutingTable {
        /// Campaign key
        campaign_key: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Indented JSON
    Pretty,
}
