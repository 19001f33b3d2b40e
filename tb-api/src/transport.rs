//! HTTP transport boundary.
//!
//! The client core only depends on "send a request, get back a status and
//! a JSON body". That contract lives here as the [`Transport`] trait; the
//! production implementation wraps `reqwest`. Connection pooling, TLS, and
//! timeouts are transport concerns; the core performs no retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method};
use serde_json::Value;
use tokio::sync::OnceCell;

use tb_core::error::{TbError, TbResult};

/// One outgoing API request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Fully joined URL.
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    /// Raw session token for the `authorization` header, when present.
    pub token: Option<String>,
}

/// Status and decoded JSON body of a completed request.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    /// Whether the HTTP status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Capability to exchange one request for one response.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> TbResult<ApiResponse>;
}

/// `reqwest`-backed transport.
///
/// The underlying client is built lazily on first use and reused for the
/// lifetime of the transport.
pub struct HttpTransport {
    client: OnceCell<Client>,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport with the given request timeout.
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            client: OnceCell::new(),
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    async fn client(&self) -> TbResult<&Client> {
        self.client
            .get_or_try_init(|| async {
                Client::builder()
                    .timeout(self.timeout)
                    .connect_timeout(Duration::from_secs(15))
                    .pool_max_idle_per_host(5)
                    .pool_idle_timeout(Duration::from_secs(90))
                    .build()
                    .map_err(|e| TbError::Http(format!("failed to build HTTP client: {e}")))
            })
            .await
    }

    /// Classify a reqwest error into a TbError variant.
    fn classify_error(e: reqwest::Error) -> TbError {
        if e.is_timeout() {
            TbError::Timeout(e.to_string())
        } else if e.is_connect() {
            TbError::Http(format!("connection failed: {e}"))
        } else {
            TbError::Http(e.to_string())
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(tb_core::constants::DEFAULT_API_TIMEOUT_MS)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> TbResult<ApiResponse> {
        let client = self.client().await?;

        let mut builder = client.request(request.method, &request.url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if let Some(token) = &request.token {
            builder = builder.header(AUTHORIZATION, token);
        }

        let response = builder.send().await.map_err(Self::classify_error)?;
        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TbError::Http(format!("failed to read response body: {e}")))?;

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            match serde_json::from_slice(&bytes) {
                Ok(value) => value,
                // A successful status with an undecodable body is malformed;
                // for error statuses the status itself carries the failure.
                Err(e) if (200..300).contains(&status) => {
                    return Err(TbError::Validation(format!("malformed response body: {e}")))
                }
                Err(_) => Value::Null,
            }
        };

        Ok(ApiResponse { status, body })
    }
}
