//! API endpoint modules organized by category.
//!
//! Each module adds typed methods on [`TinybeansClient`](crate::client::TinybeansClient)
//! for a group of related endpoints.

pub mod auth;
pub mod entries;
pub mod export;
pub mod followings;
