use std::sync::Arc;

use async_trait::async_trait;

use crate::client::HttpClient;
use crate::domain::*;
use crate::error::Result;

pub mod announcements;
pub mod assignments;
pub mod classes;
pub mod reports;
pub mod schedules;
pub mod submissions;

pub use announcements::HttpAnnouncementsApi;
pub use assignments::HttpAssignmentsApi;
pub use classes::HttpClassesApi;
pub use reports::HttpReportsApi;
pub use schedules::HttpSchedulesApi;
pub use submissions::HttpSubmissionsApi;

#[async_trait]
pub trait ClassesApi: Send + Sync {
    /// `GET /teachers/me/classes` — classes plus aggregate metrics.
    async fn teacher_classes(&self) -> Result<TeacherClassesResponse>;
    /// `GET /classes/` — the fallback alternate listing.
    async fn all_classes(&self) -> Result<Vec<ClassRecord>>;
    /// `GET /classes/student/`
    async fn student_classes(&self) -> Result<Vec<ClassRecord>>;
}

#[async_trait]
pub trait AssignmentsApi: Send + Sync {
    /// `GET /teachers/me/assignments`
    async fn teacher_assignments(&self) -> Result<Vec<AssignmentRecord>>;
    /// `GET /assignments/teacher` — first fallback.
    async fn teacher_assignments_alt(&self) -> Result<Vec<AssignmentRecord>>;
    /// `GET /assignments/me` — second fallback.
    async fn my_assignments(&self) -> Result<Vec<AssignmentRecord>>;
    /// `GET /assignments/student/`
    async fn student_assignments(&self) -> Result<Vec<AssignmentRecord>>;
}

#[async_trait]
pub trait SubmissionsApi: Send + Sync {
    /// `GET /assignments/{id}/submissions`
    async fn for_assignment(&self, assignment_id: i64) -> Result<Vec<Submission>>;
}

#[async_trait]
pub trait AnnouncementsApi: Send + Sync {
    /// `GET /announcements/live`
    async fn live(&self) -> Result<Vec<Announcement>>;
    /// `POST /announcements/`
    async fn post(&self, announcement: &NewAnnouncement) -> Result<Announcement>;
}

#[async_trait]
pub trait SchedulesApi: Send + Sync {
    /// `GET /schedules/live`
    async fn live(&self) -> Result<Vec<ScheduleEntry>>;
}

#[async_trait]
pub trait ReportsApi: Send + Sync {
    /// `POST /reports` (multipart, optional photo part)
    async fn submit(&self, report: &RoomReport) -> Result<RoomReportReceipt>;
}

/// Bundle of every resource API, passed to the dashboard controllers.
/// Tests swap individual members for fakes.
#[derive(Clone)]
pub struct ApiContext {
    pub classes: Arc<dyn ClassesApi>,
    pub assignments: Arc<dyn AssignmentsApi>,
    pub submissions: Arc<dyn SubmissionsApi>,
    pub announcements: Arc<dyn AnnouncementsApi>,
    pub schedules: Arc<dyn SchedulesApi>,
    pub reports: Arc<dyn ReportsApi>,
}

impl ApiContext {
    pub fn over_http(client: Arc<HttpClient>) -> Self {
        Self {
            classes: Arc::new(HttpClassesApi::new(client.clone())),
            assignments: Arc::new(HttpAssignmentsApi::new(client.clone())),
            submissions: Arc::new(HttpSubmissionsApi::new(client.clone())),
            announcements: Arc::new(HttpAnnouncementsApi::new(client.clone())),
            schedules: Arc::new(HttpSchedulesApi::new(client.clone())),
            reports: Arc::new(HttpReportsApi::new(client)),
        }
    }
}
