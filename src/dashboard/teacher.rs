use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::RwLock;
use validator::Validate;

use crate::{
    api::ApiContext,
    cache::SnapshotCache,
    config::RefreshConfig,
    domain::{
        Announcement, AssignmentRecord, ClassMetrics, ClassRecord, EngagementInsight,
        NewAnnouncement,
    },
    error::Result,
    insights,
    loader::{self, keys, Attempt, DataSource, Loaded},
    reconcile::reconcile_assignments,
    scheduler::RefreshTask,
};

use super::{Phase, ResourceState, SessionIdentity};

#[derive(Debug, Clone)]
pub struct TeacherState {
    pub phase: Phase,
    pub classes: ResourceState<ClassRecord>,
    pub metrics: ClassMetrics,
    pub assignments: ResourceState<AssignmentRecord>,
    pub announcements: ResourceState<Announcement>,
    pub insights: ResourceState<EngagementInsight>,
}

impl Default for TeacherState {
    fn default() -> Self {
        Self {
            phase: Phase::Loading,
            classes: ResourceState::default(),
            metrics: ClassMetrics::default(),
            assignments: ResourceState::default(),
            announcements: ResourceState::default(),
            insights: ResourceState::default(),
        }
    }
}

/// Controller behind the teacher dashboard view: owns the state snapshot,
/// orchestrates loads, and runs the refresh timers between mount and
/// unmount.
pub struct TeacherDashboard {
    api: ApiContext,
    cache: Arc<dyn SnapshotCache>,
    identity: SessionIdentity,
    refresh: RefreshConfig,
    state: Arc<RwLock<TeacherState>>,
    tasks: Mutex<Vec<RefreshTask>>,
}

impl TeacherDashboard {
    pub fn new(
        api: ApiContext,
        cache: Arc<dyn SnapshotCache>,
        identity: SessionIdentity,
        refresh: RefreshConfig,
    ) -> Self {
        Self {
            api,
            cache,
            identity,
            refresh,
            state: Arc::new(RwLock::new(TeacherState::default())),
            tasks: Mutex::new(Vec::new()),
        }
    }

    pub async fn snapshot(&self) -> TeacherState {
        self.state.read().await.clone()
    }

    /// Orchestrated initial load. Also the manual retry for the `Failed`
    /// phase. Re-entering the initial-loading state tears down any timers
    /// first, so a reload behaves exactly like a fresh view.
    pub async fn load(&self) {
        self.unmount();
        *self.state.write().await = TeacherState::default();

        let (classes, assignments, announcements) = tokio::join!(
            self.load_classes(),
            self.load_assignments(),
            load_announcements(&self.api, self.cache.as_ref()),
        );
        let (classes, metrics) = classes;

        let mut assignments = assignments;
        reconcile_assignments(&mut assignments.items, &classes.items);

        {
            let mut state = self.state.write().await;
            state.classes = ResourceState::ready(classes);
            state.metrics = metrics;
            state.assignments = ResourceState::ready(assignments);
            state.announcements = ResourceState::ready(announcements);
        }

        // Insights derive from the reconciled assignment list.
        refresh_insights(&self.api, &self.state).await;

        self.state.write().await.phase = Phase::Ready;
        tracing::info!("Teacher dashboard ready");
    }

    /// Starts the refresh timers. No-op unless the initial load has
    /// completed, and idempotent while mounted.
    pub async fn mount(&self) {
        if self.state.read().await.phase != Phase::Ready {
            return;
        }
        let mut tasks = self.tasks.lock().unwrap_or_else(|e| e.into_inner());
        if !tasks.is_empty() {
            return;
        }

        let api = self.api.clone();
        let state = Arc::clone(&self.state);
        tasks.push(RefreshTask::spawn(
            Duration::from_secs(self.refresh.insights_secs),
            move || {
                let api = api.clone();
                let state = Arc::clone(&state);
                async move { refresh_insights(&api, &state).await }
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

    /// Cancels every refresh timer. Nothing fires after this returns.
    pub fn unmount(&self) {
        let mut tasks = self.tasks.lock().unwrap_or_else(|e| e.into_inner());
        for task in tasks.iter() {
            task.cancel();
        }
        tasks.clear();
    }

    /// Posts an announcement. Invalid drafts are rejected before any
    /// network traffic; the created item is labeled with the session
    /// identity and prepended to the feed pending the next refresh.
    pub async fn post_announcement(&self, draft: NewAnnouncement) -> Result<Announcement> {
        draft.validate()?;

        let mut created = self.api.announcements.post(&draft).await?;
        created.author_name = self.identity.display_name.clone();
        created.author_role = self.identity.role.clone();

        let mut state = self.state.write().await;
        state.announcements.items.insert(0, created.clone());
        Ok(created)
    }

    /// Recomputes every engagement insight from fresh submissions and
    /// replaces the previous set wholesale.
    pub async fn refresh_insights(&self) {
        refresh_insights(&self.api, &self.state).await;
    }

    pub async fn refresh_announcements(&self) {
        refresh_announcements(&self.api, self.cache.as_ref(), &self.state).await;
    }

    async fn load_classes(&self) -> (Loaded<ClassRecord>, ClassMetrics) {
        let primary_metrics: Mutex<Option<ClassMetrics>> = Mutex::new(None);
        let attempts: Vec<Attempt<'_, ClassRecord>> = vec![
            Box::pin(async {
                let response = self.api.classes.teacher_classes().await?;
                *primary_metrics.lock().unwrap_or_else(|e| e.into_inner()) =
                    Some(response.metrics);
                Ok(response.classes)
            }),
            Box::pin(async { self.api.classes.all_classes().await }),
        ];

        let loaded = loader::load_collection(
            keys::TEACHER_CLASSES,
            attempts,
            self.cache.as_ref(),
            Vec::new(),
        )
        .await;

        // The alternates carry no metrics block; derive one from whatever
        // the chain produced.
        let metrics = primary_metrics
            .into_inner()
            .unwrap_or_else(|e| e.into_inner())
            .unwrap_or_else(|| ClassMetrics {
                total_classes: loaded.items.len() as i64,
                total_students: loaded.items.iter().filter_map(|c| c.student_count).sum(),
            });

        (loaded, metrics)
    }

    async fn load_assignments(&self) -> Loaded<AssignmentRecord> {
        let attempts: Vec<Attempt<'_, AssignmentRecord>> = vec![
            Box::pin(async { self.api.assignments.teacher_assignments().await }),
            Box::pin(async { self.api.assignments.teacher_assignments_alt().await }),
            Box::pin(async { self.api.assignments.my_assignments().await }),
        ];
        loader::load_collection(
            keys::TEACHER_ASSIGNMENTS,
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

async fn refresh_insights(api: &ApiContext, state: &RwLock<TeacherState>) {
    state.write().await.insights.loading = true;
    let assignments = state.read().await.assignments.items.clone();

    let computed = insights::compute_all(api.submissions.as_ref(), &assignments).await;

    let mut state = state.write().await;
    state.insights = ResourceState {
        loading: false,
        items: computed,
        source: DataSource::Live,
    };
}

async fn refresh_announcements(
    api: &ApiContext,
    cache: &dyn SnapshotCache,
    state: &RwLock<TeacherState>,
) {
    state.write().await.announcements.loading = true;
    let loaded = load_announcements(api, cache).await;
    let mut state = state.write().await;
    state.announcements = ResourceState::ready(loaded);
}
