use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A room-condition report to be submitted as multipart form data.
#[derive(Debug, Clone, Validate)]
pub struct RoomReport {
    #[validate(range(min = 1, message = "Class ID must be a positive integer"))]
    pub class_id: i64,
    pub is_clean_before: bool,
    pub is_clean_after: bool,
    #[validate(length(min = 1, message = "Report text cannot be empty"))]
    pub report_text: String,
    pub photo: Option<PhotoAttachment>,
}

impl RoomReport {
    pub fn new(class_id: i64, is_clean_before: bool, is_clean_after: bool, text: &str) -> Self {
        Self {
            class_id,
            is_clean_before,
            is_clean_after,
            report_text: text.trim().to_string(),
            photo: None,
        }
    }

    pub fn with_photo(mut self, photo: PhotoAttachment) -> Self {
        self.photo = Some(photo);
        self
    }
}

#[derive(Debug, Clone)]
pub struct PhotoAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// The backend's acknowledgement of a created report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomReportReceipt {
    pub id: i64,
    pub class_id: i64,
    pub reporter_id: i64,
    pub is_clean_before: bool,
    pub is_clean_after: bool,
    pub report_text: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub created_at: NaiveDateTime,
}
