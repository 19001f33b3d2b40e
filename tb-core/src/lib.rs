//! Tinybeans Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the other workspace
//! crates:
//! - Client configuration (API endpoint, credentials, logging)
//! - Global error types covering all error categories
//! - Structured logging with tracing
//! - Platform directory utilities
//! - Service constants (base URL, published client id, page size)

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod platform;

// Re-export commonly used items at the crate root
pub use config::AppConfig;
pub use error::{TbError, TbResult};
pub use logging::init_logging;
pub use platform::Platform;
