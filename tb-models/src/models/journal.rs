//! Journal model: a followed account's collection of children and entries.

use std::sync::Arc;

use serde::Deserialize;

use super::child::Child;
use super::ExtraFields;

/// Identity of a journal, shared with its children as their back-reference.
///
/// Kept separate from [`Journal`] so a child can point back at its owning
/// journal without the reference cycle that holding the whole `Journal`
/// (children included) would create.
#[derive(Debug)]
pub struct JournalInfo {
    pub id: i64,
    pub title: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JournalWire {
    id: i64,
    title: String,
    #[serde(default)]
    children: Vec<Child>,
    #[serde(flatten)]
    extra: ExtraFields,
}

/// A journal owns its children. Constructing one attaches every contained
/// child back to the journal's shared [`JournalInfo`].
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "JournalWire")]
pub struct Journal {
    info: Arc<JournalInfo>,
    pub children: Vec<Child>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl From<JournalWire> for Journal {
    fn from(wire: JournalWire) -> Self {
        Journal::with_extra(wire.id, wire.title, wire.children, wire.extra)
    }
}

impl Journal {
    /// Construct a journal and attach every child to it.
    pub fn new(id: i64, title: impl Into<String>, children: Vec<Child>) -> Self {
        Self::with_extra(id, title.into(), children, ExtraFields::new())
    }

    fn with_extra(id: i64, title: String, children: Vec<Child>, extra: ExtraFields) -> Self {
        let info = Arc::new(JournalInfo { id, title });
        tracing::trace!("attaching {} children to journal {}", children.len(), info.id);
        for child in &children {
            child.attach(Arc::clone(&info));
        }
        Journal { info, children, extra }
    }

    pub fn id(&self) -> i64 {
        self.info.id
    }

    pub fn title(&self) -> &str {
        &self.info.title
    }

    /// The shared identity handle children point back at.
    pub fn info(&self) -> &Arc<JournalInfo> {
        &self.info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn journal_json() -> serde_json::Value {
        serde_json::json!({
            "id": 555,
            "title": "The Does",
            "children": [
                {
                    "id": 1,
                    "firstName": "Ada",
                    "lastName": "Doe",
                    "gender": "female",
                    "dob": "2019-03-14"
                },
                {
                    "id": 2,
                    "firstName": "Ben",
                    "lastName": "Doe",
                    "gender": "male",
                    "dob": "2021-11-02"
                }
            ]
        })
    }

    #[test]
    fn test_children_point_back_at_owning_journal() {
        let journal: Journal = serde_json::from_value(journal_json()).unwrap();
        assert_eq!(journal.children.len(), 2);
        for child in &journal.children {
            assert!(Arc::ptr_eq(child.journal_info(), journal.info()));
            assert_eq!(child.journal().id, 555);
            assert_eq!(child.journal().title, "The Does");
        }
    }

    #[test]
    fn test_journal_without_children() {
        let journal: Journal =
            serde_json::from_value(serde_json::json!({"id": 9, "title": "Empty"})).unwrap();
        assert_eq!(journal.id(), 9);
        assert!(journal.children.is_empty());
    }

    #[test]
    fn test_manual_construction_attaches() {
        let child = serde_json::from_value::<crate::Child>(serde_json::json!({
            "id": 3,
            "firstName": "Cy",
            "lastName": "Doe",
            "gender": "male",
            "dob": "2023-07-01"
        }))
        .unwrap();
        let journal = Journal::new(77, "Manual", vec![child]);
        assert_eq!(journal.children[0].journal().id, 77);
    }
}
