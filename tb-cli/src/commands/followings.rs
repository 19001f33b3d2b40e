//! Followings command.

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};

use tb_core::config::ConfigHandle;
use tb_core::error::TbResult;

use crate::OutputFormat;

pub async fn run(config: ConfigHandle, format: OutputFormat) -> TbResult<()> {
    let client = super::create_client(&config).await;
    super::authenticate(&client, &config).await?;

    let followings = client.get_followings().await?;

    match format {
        OutputFormat::Json => {
            let json: Vec<_> = followings
                .iter()
                .map(|f| {
                    serde_json::json!({
                        "id": f.id,
                        "relationship": f.relationship.label,
                        "is_parent": f.relationship.is_parent(),
                        "journal_id": f.journal.id(),
                        "journal_title": f.journal.title(),
                        "children": f.journal.children.len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        }
        OutputFormat::Text => {
            if followings.is_empty() {
                println!("No followings.");
                return Ok(());
            }
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["ID", "Relationship", "Journal", "Journal ID", "Children"]);

            for f in &followings {
                table.add_row(vec![
                    f.id.to_string(),
                    f.relationship.label.clone(),
                    f.journal.title().to_string(),
                    f.journal.id().to_string(),
                    f.journal.children.len().to_string(),
                ]);
            }

            println!("{table}");
            println!("\n{} following(s)", followings.len());
        }
    }

    Ok(())
}
