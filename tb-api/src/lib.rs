//! Tinybeans API - HTTP client for the Tinybeans REST API.
//!
//! This crate provides a typed client for the family-journal service:
//! credential exchange and bearer-token session state, the followings and
//! children listings, a lazy backward-in-time entry pagination engine, and
//! journal export requests. The HTTP transport sits behind a trait so the
//! client logic is testable without a live server.

pub mod client;
pub mod endpoints;
pub mod pagination;
pub mod response;
pub mod transport;

// Re-export key types
pub use client::TinybeansClient;
pub use pagination::{EntryLimit, EntryStream};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
