use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use classtrack::{
    api::ApiContext,
    cache::{MemoryCache, SnapshotCache},
    client::{HttpClient, StaticTokenProvider},
    config::Settings,
    dashboard::{SessionIdentity, StudentDashboard, TeacherDashboard},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Role {
    Teacher,
    Student,
}

/// Headless dashboard engine for the class-tracking backend: loads a
/// role's dashboard, prints the snapshot, and optionally keeps it mounted
/// with live refresh until interrupted.
#[derive(Parser)]
#[command(name = "classtrack")]
struct Args {
    /// Which dashboard to run
    #[arg(long, value_enum, default_value = "teacher")]
    role: Role,

    /// Load once, log the snapshot and exit instead of staying mounted
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "classtrack=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Load configuration
    let settings = Settings::new().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}. Using defaults.", e);
        Settings::default()
    });

    tracing::info!("Connecting to backend at {}", settings.api.base_url);

    let tokens = Arc::new(StaticTokenProvider::new(settings.session.token.clone()));
    let client = Arc::new(HttpClient::new(&settings.api, tokens)?);
    let api = ApiContext::over_http(client);
    let cache: Arc<dyn SnapshotCache> = Arc::new(MemoryCache::new());

    match args.role {
        Role::Teacher => run_teacher(api, cache, &settings, args.once).await,
        Role::Student => run_student(api, cache, &settings, args.once).await,
    }
}

async fn run_teacher(
    api: ApiContext,
    cache: Arc<dyn SnapshotCache>,
    settings: &Settings,
    once: bool,
) -> anyhow::Result<()> {
    let identity = SessionIdentity {
        display_name: settings
            .session
            .display_name
            .clone()
            .unwrap_or_else(|| "Teacher".to_string()),
        role: "teacher".to_string(),
    };

    let dashboard = TeacherDashboard::new(api, cache, identity, settings.refresh.clone());
    dashboard.load().await;

    let state = dashboard.snapshot().await;
    tracing::info!(
        classes = state.classes.items.len(),
        students = state.metrics.total_students,
        assignments = state.assignments.items.len(),
        announcements = state.announcements.items.len(),
        insights = state.insights.items.len(),
        "Teacher dashboard loaded"
    );
    for insight in &state.insights.items {
        tracing::info!(
            assignment = %insight.assignment_name,
            class = %insight.class_name,
            submissions = insight.total_submissions,
            score = insight.engagement_score,
            estimated = insight.estimated,
            "Engagement"
        );
    }

    if once {
        return Ok(());
    }

    dashboard.mount().await;
    tracing::info!("Dashboard mounted, refreshing in the background. Ctrl-C to exit.");
    tokio::signal::ctrl_c().await?;
    dashboard.unmount();
    Ok(())
}

async fn run_student(
    api: ApiContext,
    cache: Arc<dyn SnapshotCache>,
    settings: &Settings,
    once: bool,
) -> anyhow::Result<()> {
    let dashboard = StudentDashboard::new(api, cache, settings.refresh.clone());
    dashboard.load().await;

    let state = dashboard.snapshot().await;
    tracing::info!(
        classes = state.classes.items.len(),
        assignments = state.assignments.items.len(),
        announcements = state.announcements.items.len(),
        schedule_entries = state.schedule.items.len(),
        "Student dashboard loaded"
    );

    if once {
        return Ok(());
    }

    dashboard.mount().await;
    tracing::info!("Dashboard mounted, refreshing in the background. Ctrl-C to exit.");
    tokio::signal::ctrl_c().await?;
    dashboard.unmount();
    Ok(())
}
