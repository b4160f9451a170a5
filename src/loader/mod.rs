use chrono::Utc;
use futures_util::future::BoxFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cache::SnapshotCache;
use crate::domain::Announcement;
use crate::error::Result;

/// Cache keys, one per logical resource.
pub mod keys {
    pub const TEACHER_CLASSES: &str = "teacher_classes";
    pub const TEACHER_ASSIGNMENTS: &str = "teacher_assignments";
    pub const STUDENT_CLASSES: &str = "student_classes";
    pub const STUDENT_ASSIGNMENTS: &str = "student_assignments";
    pub const ANNOUNCEMENTS: &str = "announcements";
    pub const SCHEDULE: &str = "schedule";
}

/// Where a collection ultimately came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Cache,
    Default,
}

#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    pub source: DataSource,
}

/// One candidate fetch in a fallback chain.
pub type Attempt<'a, T> = BoxFuture<'a, Result<Vec<T>>>;

/// Evaluates an ordered fallback chain: first successful attempt wins and
/// refreshes the cached snapshot; once every attempt has failed the cache
/// is consulted, and the static default applies last. Total failure is not
/// an error — each resource degrades independently of the others.
pub async fn load_collection<'a, T>(
    resource: &str,
    attempts: Vec<Attempt<'a, T>>,
    cache: &dyn SnapshotCache,
    default: Vec<T>,
) -> Loaded<T>
where
    T: Serialize + DeserializeOwned,
{
    for (index, attempt) in attempts.into_iter().enumerate() {
        match attempt.await {
            Ok(items) => {
                if let Ok(snapshot) = serde_json::to_value(&items) {
                    cache.set(resource, snapshot);
                }
                tracing::debug!(resource, attempt = index, count = items.len(), "Loaded live data");
                return Loaded {
                    items,
                    source: DataSource::Live,
                };
            }
            Err(e) => {
                tracing::warn!(resource, attempt = index, error = %e, "Fetch attempt failed");
            }
        }
    }

    if let Some(snapshot) = cache.get(resource) {
        match serde_json::from_value::<Vec<T>>(snapshot) {
            Ok(items) => {
                tracing::info!(resource, count = items.len(), "Serving cached snapshot");
                return Loaded {
                    items,
                    source: DataSource::Cache,
                };
            }
            Err(e) => {
                tracing::warn!(resource, error = %e, "Cached snapshot is unreadable");
            }
        }
    }

    tracing::info!(resource, "Serving default data");
    Loaded {
        items: default,
        source: DataSource::Default,
    }
}

/// Static stand-ins shown when the announcement feed is unreachable and no
/// snapshot is cached. Ids are negative so a later live fetch can never
/// collide with them.
pub fn placeholder_announcements() -> Vec<Announcement> {
    let now = Utc::now().naive_utc();
    vec![
        Announcement {
            id: -1,
            title: "Welcome back!".to_string(),
            content: "Check this board for updates from your teachers and school staff."
                .to_string(),
            date_posted: now,
            is_urgent: false,
            author_name: "School Administration".to_string(),
            author_role: "system".to_string(),
        },
        Announcement {
            id: -2,
            title: "Announcements are temporarily unavailable".to_string(),
            content: "We could not reach the live feed. Displayed items may be out of date."
                .to_string(),
            date_posted: now,
            is_urgent: false,
            author_name: "School Administration".to_string(),
            author_role: "system".to_string(),
        },
    ]
}
