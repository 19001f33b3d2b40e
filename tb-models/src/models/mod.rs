//! Entity model definitions.

pub mod blobs;
pub mod child;
pub mod comment;
pub mod emotion;
pub mod entry;
pub mod following;
pub mod journal;
pub mod relationship;
pub mod user;

/// Side map holding wire fields the models do not recognize.
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;
