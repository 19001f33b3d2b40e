//! Login command.

use console::style;

use tb_core::config::ConfigHandle;
use tb_core::error::TbResult;

pub async fn run(config: ConfigHandle, username: Option<String>, save: bool) -> TbResult<()> {
    let client = super::create_client(&config).await;
    let (username, password) = super::resolve_credentials(&config, username).await?;

    let user = client.login(&username, &password).await?;
    println!(
        "  {} Logged in as {} {} ({})",
        style("OK").green().bold(),
        user.first_name,
        user.last_name,
        user.username
    );

    if save {
        {
            let mut cfg = config.write().await;
            cfg.credentials.username = username;
            cfg.credentials.password = password;
        }
        config.save().await?;
        println!("  {} Credentials saved to config.", style("OK").green().bold());
    }

    Ok(())
}
