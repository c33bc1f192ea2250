use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::emotion::Emotion;
use crate::serde_compat::{id_from_string_or_number, lenient_timestamp};

/// A stored memory as handed over by the storage layer. Read-only here.
///
/// Timestamps that fail to parse are kept as `None` rather than rejecting the
/// record; an `unlock_at` earlier than `created_at` is legal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemoryRecord {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub emotion: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub unlock_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl MemoryRecord {
    pub fn new(id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            emotion: None,
            created_at: Some(created_at),
            unlock_at: None,
            title: None,
        }
    }

    pub fn with_emotion(mut self, tag: impl Into<String>) -> Self {
        self.emotion = Some(tag.into());
        self
    }

    pub fn with_unlock_at(mut self, unlock_at: DateTime<Utc>) -> Self {
        self.unlock_at = Some(unlock_at);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The emotion this record clusters under (`happy` when absent or unknown).
    pub fn resolved_emotion(&self) -> Emotion {
        Emotion::resolve(self.emotion.as_deref())
    }
}
