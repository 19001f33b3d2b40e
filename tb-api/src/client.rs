//! Client handle and session state.
//!
//! `TinybeansClient` owns the transport and the session (bearer token plus
//! authenticated user). Clones are cheap and share one logical session, so
//! a login performed through any clone authenticates them all.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use tb_core::config::ApiConfig;
use tb_core::error::{TbError, TbResult};
use tb_models::User;

use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Transport};

#[derive(Debug, Default)]
pub(crate) struct SessionState {
    pub(crate) access_token: Option<String>,
    pub(crate) user: Option<User>,
}

/// Client for the Tinybeans REST API.
///
/// Holds a lazily-created transport handle and the session token; every
/// request dispatched through it carries the token once one is stored.
#[derive(Clone)]
pub struct TinybeansClient {
    transport: Arc<dyn Transport>,
    /// Base URL all endpoint paths are joined against. Always ends in `/`.
    base_url: String,
    /// Registered API consumer identity sent on authenticated-flow calls.
    client_id: String,
    session: Arc<RwLock<SessionState>>,
}

impl TinybeansClient {
    /// Create a client against the public service with default settings.
    pub fn new() -> Self {
        Self::from_config(&ApiConfig::default())
    }

    /// Create a client from API configuration.
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::with_transport(
            Arc::new(HttpTransport::new(config.api_timeout_ms)),
            &config.base_url,
            &config.client_id,
        )
    }

    /// Create a client over a specific transport. This is the seam used by
    /// the integration tests to run the client against scripted responses.
    pub fn with_transport(
        transport: Arc<dyn Transport>,
        base_url: &str,
        client_id: &str,
    ) -> Self {
        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            transport,
            base_url,
            client_id: client_id.to_string(),
            session: Arc::new(RwLock::new(SessionState::default())),
        }
    }

    /// The configured client identifier.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Whether a session token is currently held.
    pub async fn logged_in(&self) -> bool {
        self.session.read().await.access_token.is_some()
    }

    /// The user authenticated in this session, if any.
    pub async fn current_user(&self) -> Option<User> {
        self.session.read().await.user.clone()
    }

    pub(crate) fn session(&self) -> &Arc<RwLock<SessionState>> {
        &self.session
    }

    /// Join a relative endpoint path onto the base URL.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Dispatch one request, attaching the session token when present.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> TbResult<ApiResponse> {
        let token = self.session.read().await.access_token.clone();
        debug!("{} {}", method, path);
        self.transport
            .send(ApiRequest {
                method,
                url: self.endpoint(path),
                query,
                body,
                token,
            })
            .await
    }

    pub(crate) async fn get(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> TbResult<ApiResponse> {
        self.request(Method::GET, path, query, None).await
    }

    pub(crate) async fn post(
        &self,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> TbResult<ApiResponse> {
        self.request(Method::POST, path, query, body).await
    }

    /// Fail non-2xx responses, surfacing any server-provided message.
    pub(crate) fn check_status(response: ApiResponse) -> TbResult<Value> {
        if response.is_success() {
            Ok(response.body)
        } else {
            Err(TbError::ServerError {
                status: response.status,
                message: server_message(&response.body),
            })
        }
    }

    /// Map a response body onto a typed model, failing with a validation
    /// error when required fields are missing or malformed.
    pub(crate) fn parse<T: DeserializeOwned>(body: Value) -> TbResult<T> {
        serde_json::from_value(body).map_err(|e| TbError::Validation(e.to_string()))
    }

    /// `clientId` query parameter sent on every authenticated-flow call.
    pub(crate) fn client_id_param(&self) -> (String, String) {
        ("clientId".to_string(), self.client_id.clone())
    }
}

impl Default for TinybeansClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull a human-readable message out of an error body, if the server sent one.
fn server_message(body: &Value) -> String {
    body.get("message")
        .or_else(|| body.get("status"))
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}
