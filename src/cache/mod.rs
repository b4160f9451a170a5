use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

/// Best-effort store for last-known-good snapshots, keyed by resource.
/// Loaders write on terminal fetch success and read only after every
/// endpoint in a fallback chain has failed.
pub trait SnapshotCache: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&self, key: &str, value: Value);
}

/// In-process cache; loses its contents on restart, which is acceptable
/// for a fallback that only ever smooths over transient outages.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotCache for MemoryCache {
    fn get(&self, key: &str) -> Option<Value> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value);
    }
}
