//! Entries command.

use chrono::NaiveDate;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};

use tb_api::EntryLimit;
use tb_core::config::ConfigHandle;
use tb_core::constants;
use tb_core::error::{TbError, TbResult};

use crate::OutputFormat;

pub async fn run(
    config: ConfigHandle,
    child_id: i64,
    limit: Option<usize>,
    since: Option<String>,
    last: Option<i64>,
    format: OutputFormat,
) -> TbResult<()> {
    let client = super::create_client(&config).await;
    super::authenticate(&client, &config).await?;

    let children = client.children().await?;
    let child = children
        .iter()
        .find(|c| c.id == child_id)
        .ok_or_else(|| TbError::NotFound(format!("no child with id {child_id} in followings")))?;

    let entry_limit = match (limit, since) {
        (Some(n), _) => Some(EntryLimit::Count(n)),
        (None, Some(date)) => {
            let cutoff = NaiveDate::parse_from_str(&date, constants::DATE_FORMAT)
                .map_err(|e| TbError::Validation(format!("bad --since date {date}: {e}")))?
                .and_hms_opt(0, 0, 0)
                .ok_or_else(|| TbError::Validation(format!("bad --since date {date}")))?
                .and_utc();
            Some(EntryLimit::NewerThan(cutoff))
        }
        (None, None) => None,
    };

    let mut walk = client.get_entries(child, last, entry_limit);

    match format {
        OutputFormat::Json => {
            let mut json = Vec::new();
            while let Some(entry) = walk.try_next().await? {
                json.push(serde_json::json!({
                    "id": entry.id,
                    "uuid": entry.uuid,
                    "timestamp": entry.timestamp.to_rfc3339(),
                    "type": entry.entry_type,
                    "caption": entry.caption,
                    "url": entry.url().ok(),
                }));
            }
            println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        }
        OutputFormat::Text => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["When", "Type", "Caption", "URL"]);

            let mut count = 0usize;
            while let Some(entry) = walk.try_next().await? {
                count += 1;
                table.add_row(vec![
                    entry.timestamp.format("%Y-%m-%d %H:%M").to_string(),
                    entry.entry_type.clone(),
                    truncate(&entry.caption, 60),
                    entry.url().unwrap_or("-").to_string(),
                ]);
            }

            if count == 0 {
                println!("No entries for {}.", child.name());
            } else {
                println!("{table}");
                println!("\n{} entr(ies) for {}", count, child.name());
            }
        }
    }

    Ok(())
}

/// Truncate a string to a maximum length, appending an ellipsis if truncated.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}
