//! Journal entry endpoints.

use tb_core::constants;
use tb_core::error::TbResult;
use tb_models::Child;

use crate::client::TinybeansClient;
use crate::pagination::{EntryLimit, EntryStream};
use crate::response::EntriesPage;

impl TinybeansClient {
    /// Fetch one page of a journal's entry feed, walking backward from the
    /// `last` cursor (epoch milliseconds).
    pub(crate) async fn entries_page(
        &self,
        journal_id: i64,
        last: i64,
        fetch_size: u32,
    ) -> TbResult<EntriesPage> {
        let query = vec![
            self.client_id_param(),
            ("fetchSize".to_string(), fetch_size.to_string()),
            ("last".to_string(), last.to_string()),
        ];
        let response = self
            .get(&format!("journals/{journal_id}/entries"), query)
            .await?;
        let body = Self::check_status(response)?;
        Self::parse(body)
    }

    /// Walk a child's journal entries backward in time.
    ///
    /// `last` is an optional starting cursor in epoch milliseconds,
    /// defaulting to now; `limit` bounds the walk by entry count or by a
    /// cutoff timestamp (see [`EntryLimit`]). The returned stream fetches
    /// pages of [`ENTRIES_FETCH_SIZE`](constants::ENTRIES_FETCH_SIZE) lazily
    /// as it is consumed; dropping it stops pagination.
    ///
    /// # Panics
    ///
    /// Panics if `child` has no journal back-reference, i.e. it was never
    /// part of a constructed `Journal`.
    pub fn get_entries(
        &self,
        child: &Child,
        last: Option<i64>,
        limit: Option<EntryLimit>,
    ) -> EntryStream {
        EntryStream::new(
            self.clone(),
            child.journal().id,
            last,
            limit,
            constants::ENTRIES_FETCH_SIZE,
        )
    }
}
