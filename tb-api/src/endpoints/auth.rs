//! Authentication endpoints.

use reqwest::Method;
use serde::Serialize;
use tracing::info;

use tb_core::error::{TbError, TbResult};
use tb_models::User;

use crate::client::TinybeansClient;
use crate::response::LoginResponse;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
    client_id: &'a str,
}

impl TinybeansClient {
    /// Exchange credentials for a session token.
    ///
    /// Idempotent: when a token is already held, returns the stored user
    /// without a network call. On a non-2xx response the session stays
    /// unauthenticated and an `AuthFailed` error is returned.
    pub async fn login(&self, username: &str, password: &str) -> TbResult<User> {
        if let Some(user) = self.current_user().await {
            return Ok(user);
        }

        let body = serde_json::to_value(LoginRequest {
            username,
            password,
            client_id: self.client_id(),
        })?;

        // The login call itself goes out unauthenticated.
        let response = self
            .request(Method::POST, "authenticate", Vec::new(), Some(body))
            .await?;

        if !response.is_success() {
            return Err(TbError::AuthFailed(format!(
                "credential exchange rejected (status {})",
                response.status
            )));
        }

        let login: LoginResponse = Self::parse(response.body)?;
        let user = login.user.clone();

        let mut session = self.session().write().await;
        session.access_token = Some(login.access_token);
        session.user = Some(login.user);
        drop(session);

        info!("logged in as {}", user.username);
        Ok(user)
    }

    /// Drop the session token and user, returning to the unauthenticated state.
    pub async fn logout(&self) {
        let mut session = self.session().write().await;
        session.access_token = None;
        session.user = None;
    }
}
