//! Lazy cursor-driven iteration over a collection

use super::cursor::CursorPaginator;
use super::types::{Page, PaginationState};
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::types::{OptionStringExt, Record};
use futures::Stream;
use std::collections::VecDeque;
use std::pin::Pin;
use tracing::debug;

/// Boxed stream of records produced by a pager
pub type RecordStream<'a> = Pin<Box<dyn Stream<Item = Result<Record>> + Send + 'a>>;

/// Pull-based iterator over every record of a collection.
///
/// Nothing is fetched until the first call to [`CursorPager::next`], and a
/// page is only requested once the previous one has been fully consumed.
/// Dropping the pager stops the iteration without further requests.
///
/// ```rust,ignore
/// let mut pager = contacts.contacts(None);
/// while let Some(contact) = pager.next().await {
///     match contact {
///         Ok(contact) => println!("{contact}"),
///         Err(e) => {
///             // resume later with contacts.contacts(cursor)
///             let cursor = e.resume_cursor().flatten().map(str::to_owned);
///             break;
///         }
///     }
/// }
/// ```
#[derive(Debug)]
pub struct CursorPager<'a> {
    client: &'a HttpClient,
    collection: String,
    paginator: CursorPaginator,
    state: PaginationState,
    buffer: VecDeque<Record>,
}

impl<'a> CursorPager<'a> {
    /// Create a pager over `collection`, optionally resuming at `start_cursor`.
    ///
    /// An empty start cursor is treated as no cursor.
    pub fn new(
        client: &'a HttpClient,
        collection: impl Into<String>,
        start_cursor: Option<String>,
    ) -> Self {
        Self {
            client,
            collection: collection.into(),
            paginator: CursorPaginator::default(),
            state: PaginationState::starting_at(start_cursor.none_if_empty()),
            buffer: VecDeque::new(),
        }
    }

    /// Use a custom paginator
    #[must_use]
    pub fn with_paginator(mut self, paginator: CursorPaginator) -> Self {
        self.paginator = paginator;
        self
    }

    /// Cursor the next page request will use
    pub fn cursor(&self) -> Option<&str> {
        self.state.cursor.as_deref()
    }

    /// Current pagination state
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Check if the pager has yielded its last record
    pub fn is_done(&self) -> bool {
        self.state.done && self.buffer.is_empty()
    }

    /// Get the next record, fetching a page if the buffer is empty.
    ///
    /// Returns `None` once the collection is exhausted. A failed page fetch is
    /// returned once as `Error::Paged` and ends the iteration.
    pub async fn next(&mut self) -> Option<Result<Record>> {
        loop {
            if let Some(record) = self.buffer.pop_front() {
                return Some(Ok(record));
            }
            if self.state.done {
                return None;
            }

            match self.fetch_page().await {
                Ok(page) => {
                    let next = self.paginator.process_page(&page, &mut self.state);
                    debug!(
                        "{}: page {} returned {} records, next: {:?}",
                        self.collection,
                        self.state.pages_fetched,
                        page.items.len(),
                        next
                    );
                    self.buffer.extend(page.items);
                }
                Err(error) => {
                    self.state.mark_done();
                    return Some(Err(Error::paged(self.state.cursor.clone(), error)));
                }
            }
        }
    }

    /// Convert into a boxed `Stream` of records
    pub fn into_stream(self) -> RecordStream<'a> {
        Box::pin(futures::stream::unfold(self, |mut pager| async move {
            pager.next().await.map(|item| (item, pager))
        }))
    }

    /// Collect every remaining record, stopping at the first failure
    pub async fn collect_all(mut self) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        while let Some(record) = self.next().await {
            records.push(record?);
        }
        Ok(records)
    }

    async fn fetch_page(&self) -> Result<Page> {
        let mut config = RequestConfig::new();
        for (key, value) in self.paginator.params(&self.state) {
            config = config.query(key, value);
        }

        let body = self
            .client
            .get_with_config(&[self.collection.as_str()], config)
            .await?;
        Page::from_value(body)
    }
}

