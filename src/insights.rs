use chrono::Utc;
use futures_util::future::join_all;
use rand::Rng;

use crate::api::SubmissionsApi;
use crate::domain::{AssignmentRecord, EngagementInsight, Submission};

/// Roster size assumed by the submission-rate term. The backend does not
/// expose real roster sizes to this computation; the constant preserves
/// the behavior of the system this replaces.
pub const ASSUMED_ROSTER_SIZE: f64 = 30.0;

const BASE_SCORE: f64 = 7.5;
const MIN_SCORE: f64 = 6.0;
const MAX_SCORE: f64 = 10.0;

/// Derives the engagement insight for one assignment from its submissions.
///
/// Time spent counts only positive values; grades count whenever recorded,
/// including zero. The grade adjustment is inert until at least one
/// submission is graded, matching the time adjustment which is inert at a
/// zero average.
pub fn compute_insight(
    assignment: &AssignmentRecord,
    submissions: &[Submission],
) -> EngagementInsight {
    let total_submissions = submissions.len();

    let times: Vec<f64> = submissions
        .iter()
        .filter(|s| s.time_spent_minutes > 0)
        .map(|s| s.time_spent_minutes as f64)
        .collect();
    let average_time = mean(&times);

    let grades: Vec<f64> = submissions.iter().filter_map(|s| s.grade).collect();
    let average_grade = mean(&grades);

    let mut score = BASE_SCORE;

    if (30.0..=90.0).contains(&average_time) {
        score += 1.5;
    } else if average_time > 90.0 {
        score += 2.0;
    } else if average_time > 0.0 && average_time < 10.0 {
        score -= 1.0;
    }

    let submission_rate = total_submissions as f64 / ASSUMED_ROSTER_SIZE * 100.0;
    if submission_rate > 80.0 {
        score += 0.5;
    } else if submission_rate < 30.0 {
        score -= 0.5;
    }

    if !grades.is_empty() {
        if average_grade >= 80.0 {
            score += 0.5;
        } else if average_grade < 60.0 {
            score -= 0.5;
        }
    }

    EngagementInsight {
        assignment_id: assignment.id,
        assignment_name: assignment.name.clone(),
        class_name: display_class_name(assignment),
        total_submissions,
        average_time_spent_minutes: average_time.round() as u64,
        average_grade: round_one_decimal(average_grade),
        engagement_score: round_one_decimal(score.clamp(MIN_SCORE, MAX_SCORE)),
        estimated: false,
        last_updated: Utc::now(),
    }
}

/// Display-continuity stand-in used when the submissions fetch for an
/// assignment fails: plausible pseudo-random values in the same ranges,
/// flagged so consumers and tests can tell them from measurements.
pub fn estimated_insight(assignment: &AssignmentRecord) -> EngagementInsight {
    let mut rng = rand::thread_rng();
    EngagementInsight {
        assignment_id: assignment.id,
        assignment_name: assignment.name.clone(),
        class_name: display_class_name(assignment),
        total_submissions: rng.gen_range(5..=25),
        average_time_spent_minutes: rng.gen_range(15..=75),
        average_grade: 0.0,
        engagement_score: round_one_decimal(rng.gen_range(MIN_SCORE..=MAX_SCORE)),
        estimated: true,
        last_updated: Utc::now(),
    }
}

/// Fetches submissions and computes insights for every assignment
/// concurrently. One insight per assignment, always: a failing fetch
/// affects only its own slot, which degrades to an estimated value.
pub async fn compute_all(
    api: &dyn SubmissionsApi,
    assignments: &[AssignmentRecord],
) -> Vec<EngagementInsight> {
    let futures = assignments.iter().map(|assignment| async move {
        match api.for_assignment(assignment.id).await {
            Ok(submissions) => compute_insight(assignment, &submissions),
            Err(e) => {
                tracing::warn!(
                    assignment_id = assignment.id,
                    error = %e,
                    "Submissions fetch failed, emitting estimated insight"
                );
                estimated_insight(assignment)
            }
        }
    });
    join_all(futures).await
}

fn display_class_name(assignment: &AssignmentRecord) -> String {
    assignment
        .class_name
        .clone()
        .unwrap_or_else(|| format!("Class {}", assignment.class_id))
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
