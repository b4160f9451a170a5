use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    /// Filled in by the teacher after grading; a recorded 0 is a real grade.
    #[serde(default)]
    pub grade: Option<f64>,
    pub time_spent_minutes: i64,
    pub submitted_at: NaiveDateTime,
}
