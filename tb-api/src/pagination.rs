//! Backward-in-time entry pagination.
//!
//! The service pages a journal's feed with an epoch-millisecond `last`
//! cursor and reports how many entries remain beyond each page.
//! [`EntryStream`] wraps that protocol into a lazy pull-based sequence:
//! one page is fetched at a time, entries are yielded in server order
//! (newest first), and a caller-supplied limit stops the walk without the
//! caller ever touching a cursor.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use futures::stream::Stream;
use tracing::warn;

use tb_core::error::TbResult;
use tb_models::Entry;

use crate::client::TinybeansClient;

/// Caller-supplied stopping condition for an entry walk.
#[derive(Debug, Clone, Copy)]
pub enum EntryLimit {
    /// Stop after yielding this many entries.
    Count(usize),
    /// Stop at the first entry timestamped at or before the cutoff; only
    /// entries strictly newer than the cutoff are yielded.
    NewerThan(DateTime<Utc>),
}

/// Lazy, forward-only walk over a journal's entries, newest first.
///
/// Pages are fetched strictly sequentially and only when the previous
/// page's entries have been consumed. Any transport or mapping failure
/// ends the walk with an error; entries already yielded stay valid.
/// Dropping the stream issues no further requests.
pub struct EntryStream {
    client: TinybeansClient,
    journal_id: i64,
    fetch_size: u32,
    /// `last` cursor for the next page request, epoch milliseconds.
    cursor: i64,
    /// Server-reported entries remaining beyond the last page. Starts at a
    /// sentinel above zero so the first request always goes out.
    remaining: i64,
    limit: Option<EntryLimit>,
    yielded: usize,
    buffer: VecDeque<Entry>,
    finished: bool,
}

impl EntryStream {
    pub(crate) fn new(
        client: TinybeansClient,
        journal_id: i64,
        last: Option<i64>,
        limit: Option<EntryLimit>,
        fetch_size: u32,
    ) -> Self {
        Self {
            client,
            journal_id,
            fetch_size,
            cursor: last.unwrap_or_else(|| Utc::now().timestamp_millis()),
            remaining: 1,
            limit,
            yielded: 0,
            buffer: VecDeque::new(),
            finished: false,
        }
    }

    /// Pull the next entry, fetching the next page when the current one is
    /// exhausted. Returns `Ok(None)` once the walk is over.
    pub async fn try_next(&mut self) -> TbResult<Option<Entry>> {
        loop {
            if let Some(entry) = self.buffer.pop_front() {
                return Ok(Some(entry));
            }
            if self.finished || self.remaining <= 0 || self.count_exhausted() {
                self.finished = true;
                return Ok(None);
            }
            self.fetch_page().await?;
        }
    }

    /// Collect the rest of the walk into a vector.
    pub async fn try_collect(mut self) -> TbResult<Vec<Entry>> {
        let mut entries = Vec::new();
        while let Some(entry) = self.try_next().await? {
            entries.push(entry);
        }
        Ok(entries)
    }

    /// Adapt the walk to a `futures::Stream` of `TbResult<Entry>`.
    pub fn into_stream(self) -> impl Stream<Item = TbResult<Entry>> {
        futures::stream::try_unfold(self, |mut walk| async move {
            let item = walk.try_next().await?;
            Ok(item.map(|entry| (entry, walk)))
        })
    }

    /// A count limit needs no entry to decide; checking it before fetching
    /// avoids a wasted request when the limit lands on a page boundary.
    fn count_exhausted(&self) -> bool {
        matches!(self.limit, Some(EntryLimit::Count(n)) if self.yielded >= n)
    }

    /// Whether the walk stops at this entry, before yielding it.
    fn limit_reached(&self, entry: &Entry) -> bool {
        match self.limit {
            Some(EntryLimit::Count(n)) => self.yielded >= n,
            Some(EntryLimit::NewerThan(cutoff)) => entry.timestamp <= cutoff,
            None => false,
        }
    }

    async fn fetch_page(&mut self) -> TbResult<()> {
        let page = self
            .client
            .entries_page(self.journal_id, self.cursor, self.fetch_size)
            .await?;
        self.remaining = page.num_entries_remaining;

        if page.entries.is_empty() {
            if self.remaining > 0 {
                // Server promised more but sent nothing; end the walk
                // rather than spin on the same cursor.
                warn!(
                    "journal {}: empty page with {} entries reported remaining",
                    self.journal_id, self.remaining
                );
            }
            self.finished = true;
            return Ok(());
        }

        for entry in page.entries {
            if self.limit_reached(&entry) {
                // Stop condition hit mid-page: drop this entry and the
                // rest of the page, and request nothing further.
                self.finished = true;
                return Ok(());
            }
            self.cursor = entry.timestamp_millis();
            self.yielded += 1;
            self.buffer.push_back(entry);
        }
        Ok(())
    }
}
