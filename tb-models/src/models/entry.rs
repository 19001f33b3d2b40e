//! Journal entry model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use tb_core::error::{TbError, TbResult};

use super::blobs::Blobs;
use super::comment::Comment;
use super::emotion::Emotion;
use super::ExtraFields;

/// Entry type tag for video attachments.
const VIDEO: &str = "VIDEO";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntryWire {
    id: i64,
    uuid: String,
    #[serde(deserialize_with = "de_epoch_millis")]
    timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    entry_type: String,
    caption: String,
    blobs: Blobs,
    #[serde(default)]
    attachment_type: Option<String>,
    #[serde(default)]
    latitude: Option<String>,
    #[serde(default)]
    longitude: Option<String>,
    #[serde(default, rename = "attachmentUrl_mp4")]
    attachment_url_mp4: Option<String>,
    #[serde(default)]
    emotions: Vec<Emotion>,
    #[serde(default)]
    comments: Vec<Comment>,
    #[serde(flatten)]
    extra: ExtraFields,
}

/// One timestamped journal post (photo, video, or text).
///
/// `attachment_type` is normalized on construction: a wire value of
/// `VIDEO` passes through, any other present value falls back to the
/// entry's own type tag, and an absent value stays absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "EntryWire")]
pub struct Entry {
    pub id: i64,
    pub uuid: String,
    /// Wire form is epoch milliseconds.
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub caption: String,
    pub blobs: Blobs,
    pub attachment_type: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub attachment_url_mp4: Option<String>,
    pub emotions: Vec<Emotion>,
    pub comments: Vec<Comment>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl From<EntryWire> for Entry {
    fn from(wire: EntryWire) -> Self {
        let attachment_type = wire.attachment_type.map(|t| {
            if t == VIDEO {
                t
            } else {
                wire.entry_type.clone()
            }
        });
        Entry {
            id: wire.id,
            uuid: wire.uuid,
            timestamp: wire.timestamp,
            entry_type: wire.entry_type,
            caption: wire.caption,
            blobs: wire.blobs,
            attachment_type,
            latitude: wire.latitude,
            longitude: wire.longitude,
            attachment_url_mp4: wire.attachment_url_mp4,
            emotions: wire.emotions,
            comments: wire.comments,
            extra: wire.extra,
        }
    }
}

impl Entry {
    /// Entry timestamp as epoch milliseconds, the pagination cursor unit.
    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }

    pub fn is_video(&self) -> bool {
        self.attachment_type.as_deref() == Some(VIDEO)
    }

    pub fn is_photo(&self) -> bool {
        self.entry_type == "PHOTO" && !self.is_video()
    }

    pub fn is_text(&self) -> bool {
        self.entry_type == "TEXT"
    }

    /// Media URL for this entry, dispatching by type. Text and other
    /// non-media entries have no URL.
    pub fn url(&self) -> TbResult<&str> {
        if self.is_video() {
            self.video_url()
        } else if self.is_photo() {
            self.photo_url()
        } else {
            Err(TbError::NotFound(format!(
                "no url for entry type {}",
                self.entry_type
            )))
        }
    }

    /// Best photo rendition for a photo entry.
    pub fn photo_url(&self) -> TbResult<&str> {
        if self.is_photo() {
            self.blobs.best()
        } else {
            Err(TbError::NotFound(format!(
                "no photo url for entry type {}",
                self.entry_type
            )))
        }
    }

    /// MP4 attachment URL for a video entry.
    pub fn video_url(&self) -> TbResult<&str> {
        if self.is_video() {
            self.attachment_url_mp4
                .as_deref()
                .filter(|url| !url.is_empty())
                .ok_or_else(|| TbError::NotFound("video entry has no mp4 attachment".into()))
        } else {
            Err(TbError::NotFound(format!(
                "no video url for entry type {}",
                self.entry_type
            )))
        }
    }
}

/// Epoch-millisecond timestamps arrive as integers, occasionally as
/// floats. Both map onto a UTC datetime.
fn de_epoch_millis<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Number::deserialize(deserializer)?;
    let millis = raw
        .as_i64()
        .or_else(|| raw.as_f64().map(|f| f as i64))
        .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {raw}")))?;
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {millis}")))
}
