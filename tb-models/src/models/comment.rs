//! Entry comment model.

use serde::{Deserialize, Serialize};

use super::user::User;
use super::ExtraFields;

/// A comment left on a journal entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub details: String,
    pub user: User,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comment() {
        let json = serde_json::json!({
            "id": 7,
            "details": "So cute!",
            "user": {
                "id": 10,
                "firstName": "Pat",
                "lastName": "Example",
                "emailAddress": "pat@example.com",
                "username": "pat"
            }
        });
        let comment: Comment = serde_json::from_value(json).unwrap();
        assert_eq!(comment.details, "So cute!");
        assert_eq!(comment.user.username, "pat");
    }
}
