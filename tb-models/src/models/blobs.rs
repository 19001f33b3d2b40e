//! Media blob variants for an entry's attachment.

use serde::{Deserialize, Serialize};

use tb_core::error::{TbError, TbResult};

use super::ExtraFields;

/// Named size/format renditions of an entry's media, keyed the way the
/// service names them (original, thumbnails, scaled sizes).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Blobs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub o: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub o2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub m: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Blobs {
    /// Highest-quality usable variant, in the fixed fallback order
    /// o, o2, t, s, s2, m, l, p. Empty strings are skipped; returns
    /// `NotFound` when no variant is usable.
    pub fn best(&self) -> TbResult<&str> {
        let chain = [
            &self.o, &self.o2, &self.t, &self.s, &self.s2, &self.m, &self.l, &self.p,
        ];
        chain
            .into_iter()
            .filter_map(|v| v.as_deref())
            .find(|url| !url.is_empty())
            .ok_or_else(|| TbError::NotFound("no usable blob variant".into()))
    }
}
