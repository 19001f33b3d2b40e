//! Following model: a followed account.

use serde::Deserialize;

use super::journal::Journal;
use super::relationship::Relationship;
use super::ExtraFields;

/// An account the logged-in user follows, bundling the relationship type
/// and the journal that account's children belong to.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Following {
    pub id: i64,
    #[serde(rename = "URL")]
    pub url: String,
    pub relationship: Relationship,
    pub journal: Journal,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_following() {
        let json = serde_json::json!({
            "id": 900,
            "URL": "https://tinybeans.com/app/followings/900",
            "relationship": {"label": "Father", "name": "father"},
            "journal": {
                "id": 555,
                "title": "The Does",
                "children": [{
                    "id": 1,
                    "firstName": "Ada",
                    "lastName": "Doe",
                    "gender": "female",
                    "dob": "2019-03-14"
                }]
            }
        });
        let following: Following = serde_json::from_value(json).unwrap();
        assert!(following.relationship.is_parent());
        assert_eq!(following.journal.children[0].journal().id, 555);
        assert_eq!(following.url, "https://tinybeans.com/app/followings/900");
    }
}
