//! Export command.

use chrono::NaiveDate;
use console::style;

use tb_core::config::ConfigHandle;
use tb_core::constants;
use tb_core::error::{TbError, TbResult};

pub async fn run(
    config: ConfigHandle,
    journal_id: i64,
    start: String,
    end: String,
) -> TbResult<()> {
    let start_date = parse_date(&start)?;
    let end_date = parse_date(&end)?;

    let client = super::create_client(&config).await;
    super::authenticate(&client, &config).await?;

    let followings = client.get_followings().await?;
    let journal = followings
        .iter()
        .map(|f| &f.journal)
        .find(|j| j.id() == journal_id)
        .ok_or_else(|| TbError::NotFound(format!("no journal with id {journal_id} in followings")))?;

    if client.request_export(journal, start_date, end_date).await? {
        println!(
            "  {} Export of \"{}\" requested for {start} to {end}.",
            style("OK").green().bold(),
            journal.title()
        );
    } else {
        println!(
            "  {} Export request for \"{}\" was not accepted.",
            style("FAILED").red().bold(),
            journal.title()
        );
    }

    Ok(())
}

fn parse_date(s: &str) -> TbResult<NaiveDate> {
    NaiveDate::parse_from_str(s, constants::DATE_FORMAT)
        .map_err(|e| TbError::Validation(format!("bad date {s}: {e}")))
}
