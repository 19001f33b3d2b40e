//! Account holder model.

use serde::{Deserialize, Serialize};

use super::ExtraFields;

/// A Tinybeans account holder, as returned by the authenticate endpoint
/// and embedded in comments and emotions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub username: String,
    /// Wire fields not modeled here.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_case() {
        let json = r#"{
            "id": 10,
            "firstName": "Pat",
            "lastName": "Example",
            "emailAddress": "pat@example.com",
            "username": "pat",
            "avatarUrl": "https://cdn.example.com/a.jpg"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 10);
        assert_eq!(user.email_address, "pat@example.com");
        assert_eq!(user.extra["avatarUrl"], "https://cdn.example.com/a.jpg");
    }

    #[test]
    fn test_missing_required_field_fails() {
        let json = r#"{"id": 10, "firstName": "Pat"}"#;
        assert!(serde_json::from_str::<User>(json).is_err());
    }
}
