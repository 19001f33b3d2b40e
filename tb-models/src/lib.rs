//! Tinybeans Models - Domain model for the Tinybeans family-journal service.
//!
//! Immutable-after-construction value objects mapped from the service's
//! camelCase JSON payloads. Unknown upstream fields are preserved in a
//! side map on every model rather than rejected, so the models stay
//! tolerant of server-side schema growth.

pub mod models;

// Re-export model types at the crate root
pub use models::blobs::Blobs;
pub use models::child::Child;
pub use models::comment::Comment;
pub use models::emotion::Emotion;
pub use models::entry::Entry;
pub use models::following::Following;
pub use models::journal::{Journal, JournalInfo};
pub use models::relationship::Relationship;
pub use models::user::User;
