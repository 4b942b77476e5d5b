use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One persisted to-do entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("corrupt task data: {0}")]
    Corrupt(String),
    #[error("write failed: {0}")]
    Write(String),
}

/// Key-value persistence seam for the task list. The web shell implements
/// this over localStorage; tests use an in-memory map.
pub trait TaskStore {
    /// `Ok(None)` means "nothing saved yet", which falls back to the seed
    /// tasks.
    fn load(&self) -> Result<Option<Vec<Task>>, StoreError>;
    fn save(&self, tasks: &[Task]) -> Result<(), StoreError>;
}

/// Seed list shown before the user has saved anything.
pub fn default_tasks() -> Vec<Task> {
    let seed = [
        ("Complete 3D portfolio website", true),
        ("Add more interactive elements", true),
        ("Optimize performance", false),
        ("Add mobile responsiveness", false),
    ];
    seed.iter()
        .enumerate()
        .map(|(i, &(text, completed))| Task {
            id: i as u64 + 1,
            text: text.to_string(),
            completed,
        })
        .collect()
}

#[derive(Clone, Debug, Default)]
pub struct TodoList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TodoList {
    pub fn new(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self { tasks, next_id }
    }

    /// Load persisted tasks, falling back to the seed list when nothing was
    /// saved or the stored data is unreadable.
    pub fn load_or_default(store: &dyn TaskStore) -> Self {
        match store.load() {
            Ok(Some(tasks)) => Self::new(tasks),
            Ok(None) => Self::new(default_tasks()),
            Err(e) => {
                log::warn!("[todo] load failed, using defaults: {e}");
                Self::new(default_tasks())
            }
        }
    }

    pub fn save(&self, store: &dyn TaskStore) -> Result<(), StoreError> {
        store.save(&self.tasks)
    }

    /// Append a task. Whitespace-only text is rejected. Returns the new
    /// task's id.
    pub fn add(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            completed: false,
        });
        Some(id)
    }

    pub fn toggle(&mut self, id: u64) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filtered(&self, filter: TaskFilter) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| match filter {
            TaskFilter::All => true,
            TaskFilter::Active => !t.completed,
            TaskFilter::Completed => t.completed,
        })
    }

    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
