use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::RwLock;
use validator::Validate;

use crate::{
    api::ApiContext,
    cache::SnapshotCache,
    config::RefreshConfig,
    domain::{
        Announcement, AssignmentRecord, ClassRecord, RoomReport, RoomReportReceipt, ScheduleEntry,
    },
    error::Result,
    loader::{self, keys, Attempt, Loaded},
    reconcile::reconcile_assignments,
    scheduler::RefreshTask,
};

use super::{Phase, ResourceState};

#[derive(Debug, Clone)]
pub struct StudentState {
    pub phase: Phase,
    pub classes: ResourceState<ClassRecord>,
    pub assignments: ResourceState<AssignmentRecord>,
    pub announcements: ResourceState<Announcement>,
    pub schedule: ResourceState<ScheduleEntry>,
}

impl Default for StudentState {
    fn default() -> Self {
        Self {
            phase: Phase::Loading,
            classes: ResourceState::default(),
            assignments: ResourceState::default(),
            announcements: ResourceState::default(),
            schedule: ResourceState::default(),
        }
    }
}

/// Controller behind the student dashboard view. The student view has no
/// engagement insights; its fast refresh slot goes to the live schedule.
pub struct StudentDashboard {
    api: ApiContext,
    cache: Arc<dyn SnapshotCache>,
    refresh: RefreshConfig,
    state: Arc<RwLock<StudentState>>,
    tasks: Mutex<Vec<RefreshTask>>,
}

impl StudentDashboard {
    pub fn new(api: ApiContext, cache: Arc<dyn SnapshotCache>, refresh: RefreshConfig) -> Self {
        Self {
            api,
            cache,
            refresh,
            state: Arc::new(RwLock::new(StudentState::default())),
            tasks: Mutex::new(Vec::new()),
        }
    }

    pub async fn snapshot(&self) -> StudentState {
        self.state.read().await.clone()
    }

    pub async fn load(&self) {
        self.unmount();
        *self.state.write().await = StudentState::default();

        let (classes, assignments, announcements, schedule) = tokio::join!(
            self.load_classes(),
            self.load_assignments(),
            load_announcements(&self.api, self.cache.as_ref()),
            load_schedule(&self.api, self.cache.as_ref()),
        );

        let mut assignments = assignments;
        reconcile_assignments(&mut assignments.items, &classes.items);

        let mut state = self.state.write().await;
        state.classes = ResourceState::ready(classes);
        state.assignments = ResourceState::ready(assignments);
        state.announcements = ResourceState::ready(announcements);
        state.schedule = ResourceState::ready(schedule);
        state.phase = Phase::Ready;
        tracing::info!("Student dashboard ready");
    }

    pub async fn mount(&self) {
        if self.state.read().await.phase != Phase::Ready {
            return;
        }
        let mut tasks = self.tasks.lock().unwrap_or_else(|e| e.into_inner());
        if !tasks.is_empty() {
            return;
        }

        let api = self.api.clone();
        let cache = Arc::clone(&self.cache);
        let state = Arc::clone(&self.state);
        tasks.push(RefreshTask::spawn(
            Duration::from_secs(self.refresh.schedule_secs),
            move || {
                let api = api.clone();
                let cache = Arc::clone(&cache);
                let state = Arc::clone(&state);
                async move { refresh_schedule(&api, cache.as_ref(), &state).await }
            },
        ));

        let api = self.api.clone();
        let cache = Arc::clone(&self.cache);
        let state = Arc::clone(&self.state);
        tasks.push(RefreshTask::spawn(
            Duration::from_secs(self.refresh.announcements_secs),
            move || {
                let api = api.clone();
                let cache = Arc::clone(&cache);
                let state = Arc::clone(&state);
                async move { refresh_announcements(&api, cache.as_ref(), &state).await }
            },
        ));
    }

    pub fn unmount(&self) {
        let mut tasks = self.tasks.lock().unwrap_or_else(|e| e.into_inner());
        for task in tasks.iter() {
            task.cancel();
        }
        tasks.clear();
    }

    /// Submits a room-condition report. Invalid reports are rejected
    /// before any network traffic; backend validation failures come back
    /// as field-level messages, transport failures as a general error.
    /// Either way the caller always learns the outcome.
    pub async fn submit_room_report(&self, report: RoomReport) -> Result<RoomReportReceipt> {
        report.validate()?;
        self.api.reports.submit(&report).await
    }

    pub async fn refresh_schedule(&self) {
        refresh_schedule(&self.api, self.cache.as_ref(), &self.state).await;
    }

    pub async fn refresh_announcements(&self) {
        refresh_announcements(&self.api, self.cache.as_ref(), &self.state).await;
    }

    async fn load_classes(&self) -> Loaded<ClassRecord> {
        let attempts: Vec<Attempt<'_, ClassRecord>> =
            vec![Box::pin(async { self.api.classes.student_classes().await })];
        loader::load_collection(
            keys::STUDENT_CLASSES,
            attempts,
            self.cache.as_ref(),
            Vec::new(),
        )
        .await
    }

    async fn load_assignments(&self) -> Loaded<AssignmentRecord> {
        let attempts: Vec<Attempt<'_, AssignmentRecord>> = vec![Box::pin(async {
            self.api.assignments.student_assignments().await
        })];
        loader::load_collection(
            keys::STUDENT_ASSIGNMENTS,
            attempts,
            self.cache.as_ref(),
            Vec::new(),
        )
        .await
    }
}

async fn load_announcements(api: &ApiContext, cache: &dyn SnapshotCache) -> Loaded<Announcement> {
    let attempts: Vec<Attempt<'_, Announcement>> =
        vec![Box::pin(async { api.announcements.live().await })];
    loader::load_collection(
        keys::ANNOUNCEMENTS,
        attempts,
        cache,
        loader::placeholder_announcements(),
    )
    .await
}

async fn load_schedule(api: &ApiContext, cache: &dyn SnapshotCache) -> Loaded<ScheduleEntry> {
    let attempts: Vec<Attempt<'_, ScheduleEntry>> =
        vec![Box::pin(async { api.schedules.live().await })];
    loader::load_collection(keys::SCHEDULE, attempts, cache, Vec::new()).await
}

async fn refresh_schedule(api: &ApiContext, cache: &dyn SnapshotCache, state: &RwLock<StudentState>) {
    state.write().await.schedule.loading = true;
    let loaded = load_schedule(api, cache).await;
    let mut state = state.write().await;
    state.schedule = ResourceState::ready(loaded);
}

async fn refresh_announcements(
    api: &ApiContext,
    cache: &dyn SnapshotCache,
    state: &RwLock<StudentState>,
) {
    state.write().await.announcements.loading = true;
    let loaded = load_announcements(api, cache).await;
    let mut state = state.write().await;
    state.announcements = ResourceState::ready(loaded);
}
