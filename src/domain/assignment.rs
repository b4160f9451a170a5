use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An assignment as fetched from the backend, plus the display fields the
/// reconciler backfills from the matching class record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub class_id: i64,
    pub creator_id: i64,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub due_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub points: Option<f64>,
    #[serde(default, rename = "type")]
    pub assignment_type: Option<String>,
    // Derived via reconciliation; some endpoints pre-populate them.
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub class_code: Option<String>,
    #[serde(default)]
    pub teacher_name: Option<String>,
}
