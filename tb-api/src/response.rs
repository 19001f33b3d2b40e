//! Per-endpoint response payload types.
//!
//! The service does not use a common envelope; each endpoint has its own
//! top-level shape, modeled here.

use serde::Deserialize;

use tb_models::{Entry, Following, User};

/// Response to a credential exchange.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

/// Response to the followings listing.
#[derive(Debug, Clone, Deserialize)]
pub struct FollowingsResponse {
    #[serde(default)]
    pub followings: Vec<Following>,
}

/// One page of a journal's entry feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntriesPage {
    #[serde(default)]
    pub entries: Vec<Entry>,
    /// Server-reported count of entries older than this page.
    #[serde(default)]
    pub num_entries_remaining: i64,
}

/// Response to an export request.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportResponse {
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_parse() {
        let json = serde_json::json!({
            "accessToken": "tok-123",
            "user": {
                "id": 10,
                "firstName": "Pat",
                "lastName": "Example",
                "emailAddress": "pat@example.com",
                "username": "pat"
            }
        });
        let resp: LoginResponse = serde_json::from_value(json).unwrap();
        assert_eq!(resp.access_token, "tok-123");
        assert_eq!(resp.user.id, 10);
    }

    #[test]
    fn test_entries_page_defaults() {
        let page: EntriesPage = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(page.entries.is_empty());
        assert_eq!(page.num_entries_remaining, 0);
    }

    #[test]
    fn test_export_response_parse() {
        let resp: ExportResponse =
            serde_json::from_value(serde_json::json!({"status": "ok"})).unwrap();
        assert_eq!(resp.status, "ok");
    }
}
