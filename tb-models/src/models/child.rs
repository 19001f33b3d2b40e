//! Child model.

use std::sync::{Arc, OnceLock};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::journal::JournalInfo;
use super::ExtraFields;

/// A child whose entries live in a [`Journal`](super::journal::Journal).
///
/// The journal owns the child; the child only holds a non-owning
/// back-reference, set exactly once when the journal is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    /// Date of birth, `YYYY-MM-DD` on the wire.
    pub dob: NaiveDate,
    #[serde(skip)]
    journal: OnceLock<Arc<JournalInfo>>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Child {
    /// Full display name.
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The owning journal's identity.
    ///
    /// # Panics
    ///
    /// Panics if the child has not been attached to a journal yet. A child
    /// is attached when its `Journal` is constructed; reaching this panic
    /// means a `Child` was used outside any journal, which is an
    /// integration bug rather than a recoverable condition.
    pub fn journal(&self) -> &JournalInfo {
        self.journal
            .get()
            .map(Arc::as_ref)
            .expect("child is not attached to a journal")
    }

    /// Whether the journal back-reference has been set.
    pub fn is_attached(&self) -> bool {
        self.journal.get().is_some()
    }

    /// The shared journal handle, for identity checks.
    ///
    /// # Panics
    ///
    /// Panics when unattached, like [`Child::journal`].
    pub fn journal_info(&self) -> &Arc<JournalInfo> {
        self.journal
            .get()
            .expect("child is not attached to a journal")
    }

    /// Attach the owning journal. Called once from `Journal` construction.
    pub(super) fn attach(&self, info: Arc<JournalInfo>) {
        if self.journal.set(info).is_err() {
            tracing::warn!("child {} already attached to a journal; keeping the first", self.id);
        }
    }
}
