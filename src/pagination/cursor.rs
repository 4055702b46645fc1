//! Cursor pagination strategy

use super::types::{NextPage, Page, PaginationState};
use crate::types::StringMap;

/// Cursor-based pagination (`?cursor=abc123`)
///
/// The cursor is opaque: it is copied from one response into the next
/// request and never inspected.
#[derive(Debug, Clone)]
pub struct CursorPaginator {
    /// Query parameter name for cursor
    pub cursor_param: String,
}

impl Default for CursorPaginator {
    fn default() -> Self {
        Self::new("cursor")
    }
}

impl CursorPaginator {
    /// Create a new cursor paginator
    pub fn new(cursor_param: impl Into<String>) -> Self {
        Self {
            cursor_param: cursor_param.into(),
        }
    }

    /// Query parameters for the request described by `state`
    pub fn params(&self, state: &PaginationState) -> StringMap {
        let mut params = StringMap::new();
        if let Some(cursor) = &state.cursor {
            params.insert(self.cursor_param.clone(), cursor.clone());
        }
        params
    }

    /// Advance `state` past a successfully fetched page.
    ///
    /// An empty page only ends pagination when its cursor is absent.
    pub fn process_page(&self, page: &Page, state: &mut PaginationState) -> NextPage {
        state.add_page(page.items.len());

        match &page.next_cursor {
            Some(cursor) => {
                state.set_cursor(cursor.clone());
                NextPage::at(cursor.clone())
            }
            None => {
                state.mark_done();
                NextPage::Done
            }
        }
    }
}
