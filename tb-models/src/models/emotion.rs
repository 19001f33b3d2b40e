//! Entry reaction model.

use serde::{Deserialize, Serialize};

use super::ExtraFields;

/// Reaction metadata attached to an entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Emotion {
    pub id: i64,
    pub entry_id: i64,
    pub user_id: i64,
    /// Free-form reaction descriptor as sent by the server.
    #[serde(rename = "type")]
    pub kind: ExtraFields,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_emotion() {
        let json = serde_json::json!({
            "id": 31,
            "entryId": 2001,
            "userId": 10,
            "type": {"name": "LOVE", "value": 1}
        });
        let emotion: Emotion = serde_json::from_value(json).unwrap();
        assert_eq!(emotion.entry_id, 2001);
        assert_eq!(emotion.kind["name"], "LOVE");
    }
}
