//! Journal export endpoint.

use chrono::NaiveDate;

use tb_core::constants;
use tb_core::error::TbResult;
use tb_models::Journal;

use crate::client::TinybeansClient;
use crate::response::ExportResponse;

impl TinybeansClient {
    /// Ask the service to prepare an export of a journal between two dates
    /// (inclusive, date-only boundaries).
    ///
    /// Returns `Ok(true)` when the server acknowledges with status `"ok"`,
    /// `Ok(false)` for any other acknowledged status; non-2xx responses
    /// and transport failures propagate as errors.
    pub async fn request_export(
        &self,
        journal: &Journal,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> TbResult<bool> {
        let query = vec![
            (
                "startDate".to_string(),
                start_date.format(constants::DATE_FORMAT).to_string(),
            ),
            (
                "endDate".to_string(),
                end_date.format(constants::DATE_FORMAT).to_string(),
            ),
        ];

        let response = self
            .post(&format!("journals/{}/export", journal.id()), query, None)
            .await?;
        let body = Self::check_status(response)?;
        let parsed: ExportResponse = Self::parse(body)?;
        Ok(parsed.status == "ok")
    }
}
