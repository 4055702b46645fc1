//! Pagination types

use crate::error::{Error, Result};
use crate::types::{JsonValue, Record};
use serde::Deserialize;

/// One decoded page of a collection
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page {
    /// Records in server order
    #[serde(rename = "data")]
    pub items: Vec<Record>,
    /// Cursor of the following page; `None` ends the collection
    #[serde(rename = "cursor", default)]
    pub next_cursor: Option<String>,
}

impl Page {
    /// Decode a page from a list response body
    pub fn from_value(value: JsonValue) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::decode(format!("malformed page: {e}")))
    }

    /// Check if this is the final page
    pub fn is_last(&self) -> bool {
        self.next_cursor.is_none()
    }
}

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available at this cursor
    Continue {
        /// Cursor to send with the next request
        cursor: String,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Create a continuation at the given cursor
    pub fn at(cursor: impl Into<String>) -> Self {
        Self::Continue {
            cursor: cursor.into(),
        }
    }

    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Cursor for the next page request (`None` for the first page)
    pub cursor: Option<String>,
    /// Pages fetched successfully so far
    pub pages_fetched: u32,
    /// Total records fetched so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state that starts at a previously returned cursor
    pub fn starting_at(cursor: Option<String>) -> Self {
        Self {
            cursor,
            ..Default::default()
        }
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Set cursor
    pub fn set_cursor(&mut self, cursor: String) {
        self.cursor = Some(cursor);
    }

    /// Record a successfully fetched page of `count` items
    pub fn add_page(&mut self, count: usize) {
        self.pages_fetched += 1;
        self.total_fetched += count as u64;
    }
}
