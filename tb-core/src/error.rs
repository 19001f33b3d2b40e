//! Global error types for the Tinybeans client.
//!
//! All error categories across the workspace are unified into a single
//! `TbError` enum with conversions from underlying library errors.

use thiserror::Error;

/// Convenience type alias for Results using TbError.
pub type TbResult<T> = Result<T, TbError>;

/// Unified error type covering all error categories in the client.
#[derive(Error, Debug)]
pub enum TbError {
    // -- Configuration errors --
    /// Failed to load or parse application configuration.
    #[error("configuration error: {0}")]
    Config(String),

    // -- Network errors --
    /// HTTP request failed at the transport level.
    #[error("http error: {0}")]
    Http(String),

    /// HTTP request timed out.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// Server returned a non-2xx response.
    #[error("server error (status {status}): {message}")]
    ServerError {
        /// HTTP status code.
        status: u16,
        /// Error message from the server, if any.
        message: String,
    },

    /// Credential exchange was rejected; the session stays unauthenticated.
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    // -- Payload errors --
    /// A response payload is missing a required field or failed a parse.
    #[error("validation error: {0}")]
    Validation(String),

    /// A lookup over the payload found nothing usable (e.g. no blob variant).
    #[error("not found: {0}")]
    NotFound(String),

    // -- File/IO errors --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error when building a request body.
    #[error("serialization error: {0}")]
    Serialization(String),

    // -- Generic --
    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for TbError {
    fn from(e: serde_json::Error) -> Self {
        TbError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for TbError {
    fn from(e: toml::de::Error) -> Self {
        TbError::Config(e.to_string())
    }
}
