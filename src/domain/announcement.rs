use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// An announcement from the live feed. The feed itself carries no author
/// information; `author_name`/`author_role` are filled in client-side for
/// locally-posted items and defaulted for everything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub date_posted: NaiveDateTime,
    #[serde(default)]
    pub is_urgent: bool,
    #[serde(default = "default_author_name")]
    pub author_name: String,
    #[serde(default = "default_author_role")]
    pub author_role: String,
}

fn default_author_name() -> String {
    "School Administration".to_string()
}

fn default_author_role() -> String {
    "staff".to_string()
}

/// Payload for `POST /announcements/`. Validated client-side before any
/// request is issued.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewAnnouncement {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: String,
    pub is_urgent: bool,
}

impl NewAnnouncement {
    /// Trims both text fields so whitespace-only input fails the length
    /// checks, mirroring the backend's own validators.
    pub fn new(title: &str, content: &str, is_urgent: bool) -> Self {
        Self {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
            is_urgent,
        }
    }
}
