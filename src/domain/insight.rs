use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Derived engagement metrics for a single assignment. Recomputed wholesale
/// on every refresh cycle and replaced, never patched in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementInsight {
    pub assignment_id: i64,
    pub assignment_name: String,
    pub class_name: String,
    pub total_submissions: usize,
    /// Mean time spent, rounded to the nearest whole minute.
    pub average_time_spent_minutes: u64,
    pub average_grade: f64,
    /// Always within [6.0, 10.0], one decimal place.
    pub engagement_score: f64,
    /// True when the submissions fetch failed and the values are a
    /// synthetic display-continuity stand-in rather than a measurement.
    pub estimated: bool,
    pub last_updated: DateTime<Utc>,
}
