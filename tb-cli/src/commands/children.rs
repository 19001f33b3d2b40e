//! Children command.

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};

use tb_core::config::ConfigHandle;
use tb_core::error::TbResult;

use crate::OutputFormat;

pub async fn run(config: ConfigHandle, format: OutputFormat) -> TbResult<()> {
    let client = super::create_client(&config).await;
    super::authenticate(&client, &config).await?;

    let children = client.children().await?;

    match format {
        OutputFormat::Json => {
            let json: Vec<_> = children
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "id": c.id,
                        "name": c.name(),
                        "gender": c.gender,
                        "dob": c.dob.to_string(),
                        "journal_id": c.journal().id,
                        "journal_title": c.journal().title,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        }
        OutputFormat::Text => {
            if children.is_empty() {
                println!("No children in followed journals.");
                return Ok(());
            }
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["ID", "Name", "Gender", "Born", "Journal"]);

            for c in &children {
                table.add_row(vec![
                    c.id.to_string(),
                    c.name(),
                    c.gender.clone(),
                    c.dob.to_string(),
                    c.journal().title.clone(),
                ]);
            }

            println!("{table}");
            println!("\n{} child(ren)", children.len());
        }
    }

    Ok(())
}
