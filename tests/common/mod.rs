#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};

use classtrack::api::{
    AnnouncementsApi, ApiContext, AssignmentsApi, ClassesApi, ReportsApi, SchedulesApi,
    SubmissionsApi,
};
use classtrack::domain::*;
use classtrack::error::{AppError, Result};

pub fn naive_now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn transport_down() -> AppError {
    AppError::Transport("connection refused".to_string())
}

// Fixture builders

pub fn class(id: i64, name: &str, code: &str) -> ClassRecord {
    ClassRecord {
        id,
        name: name.to_string(),
        code: code.to_string(),
        teacher_id: None,
        description: None,
        semester: None,
        academic_year: None,
        teacher_name: None,
        student_count: None,
    }
}

pub fn assignment(id: i64, class_id: i64, name: &str) -> AssignmentRecord {
    AssignmentRecord {
        id,
        name: name.to_string(),
        description: None,
        class_id,
        creator_id: 1,
        created_at: naive_now(),
        due_date: None,
        points: None,
        assignment_type: None,
        class_name: None,
        class_code: None,
        teacher_name: None,
    }
}

pub fn submission(
    id: i64,
    assignment_id: i64,
    time_spent_minutes: i64,
    grade: Option<f64>,
) -> Submission {
    Submission {
        id,
        assignment_id,
        student_id: id,
        grade,
        time_spent_minutes,
        submitted_at: naive_now(),
    }
}

pub fn announcement(id: i64, title: &str) -> Announcement {
    Announcement {
        id,
        title: title.to_string(),
        content: format!("{} body", title),
        date_posted: naive_now(),
        is_urgent: false,
        author_name: "School Administration".to_string(),
        author_role: "staff".to_string(),
    }
}

// Fake backend: every resource API with settable responses (`None` means
// the endpoint fails) and call counters where tests need them.

pub struct FakeClassesApi {
    pub teacher: Option<TeacherClassesResponse>,
    pub all: Option<Vec<ClassRecord>>,
    pub student: Option<Vec<ClassRecord>>,
}

impl Default for FakeClassesApi {
    fn default() -> Self {
        Self {
            teacher: Some(TeacherClassesResponse {
                classes: Vec::new(),
                metrics: ClassMetrics::default(),
            }),
            all: Some(Vec::new()),
            student: Some(Vec::new()),
        }
    }
}

impl FakeClassesApi {
    pub fn teacher_with(classes: Vec<ClassRecord>) -> Self {
        let metrics = ClassMetrics {
            total_classes: classes.len() as i64,
            total_students: 0,
        };
        Self {
            teacher: Some(TeacherClassesResponse { classes, metrics }),
            ..Self::default()
        }
    }
}

#[async_trait]
impl ClassesApi for FakeClassesApi {
    async fn teacher_classes(&self) -> Result<TeacherClassesResponse> {
        self.teacher.clone().ok_or_else(transport_down)
    }

    async fn all_classes(&self) -> Result<Vec<ClassRecord>> {
        self.all.clone().ok_or_else(transport_down)
    }

    async fn student_classes(&self) -> Result<Vec<ClassRecord>> {
        self.student.clone().ok_or_else(transport_down)
    }
}

#[derive(Default)]
pub struct FakeAssignmentsApi {
    pub teacher: Option<Vec<AssignmentRecord>>,
    pub teacher_alt: Option<Vec<AssignmentRecord>>,
    pub mine: Option<Vec<AssignmentRecord>>,
    pub student: Option<Vec<AssignmentRecord>>,
}

impl FakeAssignmentsApi {
    pub fn teacher_with(assignments: Vec<AssignmentRecord>) -> Self {
        Self {
            teacher: Some(assignments),
            ..Self::default()
        }
    }

    pub fn student_with(assignments: Vec<AssignmentRecord>) -> Self {
        Self {
            student: Some(assignments),
            ..Self::default()
        }
    }
}

#[async_trait]
impl AssignmentsApi for FakeAssignmentsApi {
    async fn teacher_assignments(&self) -> Result<Vec<AssignmentRecord>> {
        self.teacher.clone().ok_or_else(transport_down)
    }

    async fn teacher_assignments_alt(&self) -> Result<Vec<AssignmentRecord>> {
        self.teacher_alt.clone().ok_or_else(transport_down)
    }

    async fn my_assignments(&self) -> Result<Vec<AssignmentRecord>> {
        self.mine.clone().ok_or_else(transport_down)
    }

    async fn student_assignments(&self) -> Result<Vec<AssignmentRecord>> {
        self.student.clone().ok_or_else(transport_down)
    }
}

/// Submissions API that records every call; optionally fails for one
/// assignment or for all of them.
pub struct CountingSubmissions {
    pub submissions: Vec<Submission>,
    pub fail_for: Option<i64>,
    pub fail_all: bool,
    calls: AtomicUsize,
}

impl CountingSubmissions {
    pub fn with(submissions: Vec<Submission>) -> Self {
        Self {
            submissions,
            fail_for: None,
            fail_all: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            submissions: Vec::new(),
            fail_for: None,
            fail_all: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// Succeeds for every assignment except the given one.
    pub fn failing_for(assignment_id: i64, submissions: Vec<Submission>) -> Self {
        Self {
            submissions,
            fail_for: Some(assignment_id),
            fail_all: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SubmissionsApi for CountingSubmissions {
    async fn for_assignment(&self, assignment_id: i64) -> Result<Vec<Submission>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_all || self.fail_for == Some(assignment_id) {
            return Err(transport_down());
        }
        Ok(self
            .submissions
            .iter()
            .filter(|s| s.assignment_id == assignment_id)
            .cloned()
            .collect())
    }
}

pub struct CountingAnnouncements {
    pub live: Option<Vec<Announcement>>,
    live_calls: AtomicUsize,
    post_calls: AtomicUsize,
}

impl Default for CountingAnnouncements {
    fn default() -> Self {
        Self {
            live: Some(Vec::new()),
            live_calls: AtomicUsize::new(0),
            post_calls: AtomicUsize::new(0),
        }
    }
}

impl CountingAnnouncements {
    pub fn with(items: Vec<Announcement>) -> Self {
        Self {
            live: Some(items),
            ..Self::default()
        }
    }

    /// Live feed unreachable; posting still succeeds.
    pub fn down() -> Self {
        Self {
            live: None,
            ..Self::default()
        }
    }

    pub fn live_calls(&self) -> usize {
        self.live_calls.load(Ordering::SeqCst)
    }

    pub fn post_calls(&self) -> usize {
        self.post_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnnouncementsApi for CountingAnnouncements {
    async fn live(&self) -> Result<Vec<Announcement>> {
        self.live_calls.fetch_add(1, Ordering::SeqCst);
        self.live.clone().ok_or_else(transport_down)
    }

    async fn post(&self, draft: &NewAnnouncement) -> Result<Announcement> {
        self.post_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Announcement {
            id: 100,
            title: draft.title.clone(),
            content: draft.content.clone(),
            date_posted: naive_now(),
            is_urgent: draft.is_urgent,
            author_name: "School Administration".to_string(),
            author_role: "staff".to_string(),
        })
    }
}

#[derive(Default)]
pub struct FakeSchedulesApi {
    pub live: Option<Vec<ScheduleEntry>>,
}

#[async_trait]
impl SchedulesApi for FakeSchedulesApi {
    async fn live(&self) -> Result<Vec<ScheduleEntry>> {
        self.live
            .clone()
            .map(Ok)
            .unwrap_or_else(|| Err(transport_down()))
    }
}

#[derive(Default)]
pub struct CountingReports {
    calls: AtomicUsize,
}

impl CountingReports {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReportsApi for CountingReports {
    async fn submit(&self, report: &RoomReport) -> Result<RoomReportReceipt> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(RoomReportReceipt {
            id: 1,
            class_id: report.class_id,
            reporter_id: 42,
            is_clean_before: report.is_clean_before,
            is_clean_after: report.is_clean_after,
            report_text: report.report_text.clone(),
            photo_url: report.photo.as_ref().map(|p| format!("/uploads/{}", p.file_name)),
            created_at: naive_now(),
        })
    }
}

/// A fully-faked backend; tests replace the members they care about and
/// call `context()` to hand the bundle to a dashboard.
pub struct FakeBackend {
    pub classes: Arc<FakeClassesApi>,
    pub assignments: Arc<FakeAssignmentsApi>,
    pub submissions: Arc<CountingSubmissions>,
    pub announcements: Arc<CountingAnnouncements>,
    pub schedules: Arc<FakeSchedulesApi>,
    pub reports: Arc<CountingReports>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            classes: Arc::new(FakeClassesApi::default()),
            assignments: Arc::new(FakeAssignmentsApi {
                teacher: Some(Vec::new()),
                teacher_alt: Some(Vec::new()),
                mine: Some(Vec::new()),
                student: Some(Vec::new()),
            }),
            submissions: Arc::new(CountingSubmissions::with(Vec::new())),
            announcements: Arc::new(CountingAnnouncements::default()),
            schedules: Arc::new(FakeSchedulesApi {
                live: Some(Vec::new()),
            }),
            reports: Arc::new(CountingReports::default()),
        }
    }

    pub fn context(&self) -> ApiContext {
        ApiContext {
            classes: self.classes.clone(),
            assignments: self.assignments.clone(),
            submissions: self.submissions.clone(),
            announcements: self.announcements.clone(),
            schedules: self.schedules.clone(),
            reports: self.reports.clone(),
        }
    }
}
