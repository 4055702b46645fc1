//! Pagination module
//!
//! Cursor-based pagination over collection resources.
//!
//! # Overview
//!
//! List endpoints answer with `{"data": [...], "cursor": <string-or-null>}`.
//! `CursorPaginator` turns one decoded page into the parameters of the next
//! request, and `CursorPager` drives it lazily: a page is fetched only when
//! the consumer asks for an item the buffer cannot supply.
//!
//! A failed page ends the iteration with `Error::Paged`, which carries the
//! cursor of the failed request so the listing can be resumed later.

mod cursor;
mod pager;
mod types;

pub use cursor::CursorPaginator;
pub use pager::{CursorPager, RecordStream};
pub use types::{NextPage, Page, PaginationState};
