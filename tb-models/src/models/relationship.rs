//! Relationship between the account holder and a followed account.

use serde::{Deserialize, Serialize};

use super::ExtraFields;

/// Free-text role ("father", "friend", ...) plus display name for a
/// following. Used to tell one's own children apart from followed others.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub label: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Relationship {
    /// Whether this following is one of the account holder's own children.
    pub fn is_parent(&self) -> bool {
        self.label.eq_ignore_ascii_case("father") || self.label.eq_ignore_ascii_case("mother")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relationship(label: &str) -> Relationship {
        Relationship {
            label: label.into(),
            name: label.into(),
            extra: ExtraFields::new(),
        }
    }

    #[test]
    fn test_is_parent_case_insensitive() {
        assert!(relationship("Father").is_parent());
        assert!(relationship("MOTHER").is_parent());
        assert!(relationship("mother").is_parent());
    }

    #[test]
    fn test_is_parent_rejects_other_labels() {
        assert!(!relationship("friend").is_parent());
        assert!(!relationship("grandparent").is_parent());
        assert!(!relationship("").is_parent());
    }
}
