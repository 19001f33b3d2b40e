//! CLI command implementations.

pub mod children;
pub mod entries;
pub mod export;
pub mod followings;
pub mod login;

use tb_api::TinybeansClient;
use tb_core::config::ConfigHandle;
use tb_core::error::{TbError, TbResult};

/// Environment variable carrying the account username.
pub const ENV_LOGIN: &str = "TINYBEANS_LOGIN";
/// Environment variable carrying the account password.
pub const ENV_PASSWORD: &str = "TINYBEANS_PASSWORD";

/// Create an API client from config.
pub async fn create_client(config: &ConfigHandle) -> TinybeansClient {
    let api_config = config.read().await.api.clone();
    TinybeansClient::from_config(&api_config)
}

/// Resolve credentials (env over config, prompting for whatever is still
/// missing) and log the client in.
pub async fn authenticate(client: &TinybeansClient, config: &ConfigHandle) -> TbResult<()> {
    let (username, password) = resolve_credentials(config, None).await?;
    client.login(&username, &password).await?;
    Ok(())
}

/// Resolve the username/password pair from an explicit override, the
/// environment, the config file, or an interactive prompt, in that order.
pub async fn resolve_credentials(
    config: &ConfigHandle,
    username_override: Option<String>,
) -> TbResult<(String, String)> {
    let stored = config.read().await.credentials.clone();

    let username = match username_override
        .or_else(|| std::env::var(ENV_LOGIN).ok())
        .filter(|u| !u.is_empty())
        .or_else(|| Some(stored.username.clone()).filter(|u| !u.is_empty()))
    {
        Some(u) => u,
        None => dialoguer::Input::<String>::new()
            .with_prompt("Tinybeans username (email)")
            .interact_text()
            .map_err(|e| TbError::Config(format!("failed to read username: {e}")))?,
    };

    let password = match std::env::var(ENV_PASSWORD)
        .ok()
        .filter(|p| !p.is_empty())
        .or_else(|| Some(stored.password.clone()).filter(|p| !p.is_empty()))
    {
        Some(p) => p,
        None => dialoguer::Password::new()
            .with_prompt("Tinybeans password")
            .interact()
            .map_err(|e| TbError::Config(format!("failed to read password: {e}")))?,
    };

    Ok((username, password))
}
