//! localStorage-backed task persistence.

use room_core::constants::TODO_STORAGE_KEY;
use room_core::widgets::todo::StoreError;
use room_core::widgets::{Task, TaskStore};
use web_sys as web;

/// `TaskStore` over `window.localStorage`, JSON-encoded under a fixed key.
/// Storage can be absent (private browsing, sandboxed iframes), which maps
/// to `Unavailable` and lets the list fall back to its seed tasks.
pub struct LocalTaskStore;

impl LocalTaskStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<web::Storage, StoreError> {
        web::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

impl Default for LocalTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore for LocalTaskStore {
    fn load(&self) -> Result<Option<Vec<Task>>, StoreError> {
        let storage = self.storage()?;
        let raw = storage
            .get_item(TODO_STORAGE_KEY)
            .map_err(|_| StoreError::Unavailable)?;
        match raw {
            None => Ok(None),
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| StoreError::Corrupt(e.to_string())),
        }
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let storage = self.storage()?;
        let json = serde_json::to_string(tasks).map_err(|e| StoreError::Write(e.to_string()))?;
        storage
            .set_item(TODO_STORAGE_KEY, &json)
            .map_err(|_| StoreError::Write("localStorage set_item failed".into()))
    }
}
