use std::cell::RefCell;

use room_core::constants::DEFAULT_POMODORO_SEC;
use room_core::widgets::todo::{default_tasks, StoreError};
use room_core::widgets::{PomodoroTimer, Task, TaskFilter, TaskStore, TodoList};

// ---------------- pomodoro ----------------

#[test]
fn pomodoro_starts_idle_at_full_session() {
    let timer = PomodoroTimer::new();
    assert!(!timer.is_active());
    assert_eq!(timer.remaining_sec(), DEFAULT_POMODORO_SEC);
    assert_eq!(timer.display(), "25:00");
    assert_eq!(timer.remaining_fraction(), 1.0);
}

#[test]
fn pomodoro_only_counts_down_while_active() {
    let mut timer = PomodoroTimer::new();
    timer.tick(5.0);
    assert_eq!(timer.remaining_sec(), DEFAULT_POMODORO_SEC);

    timer.toggle();
    timer.tick(2.0);
    assert_eq!(timer.remaining_sec(), DEFAULT_POMODORO_SEC - 2);
    assert_eq!(timer.display(), "24:58");

    timer.toggle();
    timer.tick(10.0);
    assert_eq!(timer.remaining_sec(), DEFAULT_POMODORO_SEC - 2);
}

#[test]
fn pomodoro_fractional_frames_accumulate_without_drift() {
    let mut timer = PomodoroTimer::new();
    timer.toggle();
    // 64 frames of 1/64 s make one second (exactly representable, so the
    // accumulated carry crosses 1.0 without float slop)
    for _ in 0..64 {
        timer.tick(1.0 / 64.0);
    }
    assert_eq!(timer.remaining_sec(), DEFAULT_POMODORO_SEC - 1);
}

#[test]
fn pomodoro_stops_and_deactivates_at_zero() {
    let mut timer = PomodoroTimer::new();
    timer.toggle();
    timer.tick(DEFAULT_POMODORO_SEC as f32 + 100.0);
    assert_eq!(timer.remaining_sec(), 0);
    assert!(!timer.is_active());
    assert_eq!(timer.display(), "00:00");
    assert_eq!(timer.remaining_fraction(), 0.0);
}

#[test]
fn pomodoro_reset_restores_full_idle_session() {
    let mut timer = PomodoroTimer::new();
    timer.toggle();
    timer.tick(90.0);
    timer.reset();
    assert!(!timer.is_active());
    assert_eq!(timer.remaining_sec(), DEFAULT_POMODORO_SEC);
}

// ---------------- todo ----------------

/// In-memory TaskStore for tests.
#[derive(Default)]
struct MemStore {
    saved: RefCell<Option<Vec<Task>>>,
}

impl TaskStore for MemStore {
    fn load(&self) -> Result<Option<Vec<Task>>, StoreError> {
        Ok(self.saved.borrow().clone())
    }
    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        *self.saved.borrow_mut() = Some(tasks.to_vec());
        Ok(())
    }
}

struct BrokenStore;

impl TaskStore for BrokenStore {
    fn load(&self) -> Result<Option<Vec<Task>>, StoreError> {
        Err(StoreError::Unavailable)
    }
    fn save(&self, _tasks: &[Task]) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

#[test]
fn empty_store_falls_back_to_seed_tasks() {
    let store = MemStore::default();
    let list = TodoList::load_or_default(&store);
    assert_eq!(list.tasks(), default_tasks().as_slice());
    assert_eq!(list.active_count(), 2);
}

#[test]
fn broken_store_falls_back_to_seed_tasks() {
    let list = TodoList::load_or_default(&BrokenStore);
    assert_eq!(list.len(), default_tasks().len());
}

#[test]
fn add_rejects_blank_text_and_trims() {
    let mut list = TodoList::new(Vec::new());
    assert_eq!(list.add(""), None);
    assert_eq!(list.add("   "), None);
    let id = list.add("  write tests  ").unwrap();
    assert_eq!(list.tasks().len(), 1);
    assert_eq!(list.tasks()[0].text, "write tests");
    assert_eq!(list.tasks()[0].id, id);
    assert!(!list.tasks()[0].completed);
}

#[test]
fn ids_stay_unique_after_removal() {
    let mut list = TodoList::new(Vec::new());
    let a = list.add("first").unwrap();
    let b = list.add("second").unwrap();
    assert_ne!(a, b);
    assert!(list.remove(b));
    let c = list.add("third").unwrap();
    assert_ne!(c, a);
    assert_ne!(c, b);
}

#[test]
fn toggle_and_remove_by_id() {
    let mut list = TodoList::new(Vec::new());
    let id = list.add("task").unwrap();

    assert!(list.toggle(id));
    assert!(list.tasks()[0].completed);
    assert!(list.toggle(id));
    assert!(!list.tasks()[0].completed);
    assert!(!list.toggle(999));

    assert!(list.remove(id));
    assert!(list.is_empty());
    assert!(!list.remove(id));
}

#[test]
fn filters_partition_the_list() {
    let mut list = TodoList::new(Vec::new());
    let a = list.add("done").unwrap();
    list.add("open one");
    list.add("open two");
    list.toggle(a);

    assert_eq!(list.filtered(TaskFilter::All).count(), 3);
    assert_eq!(list.filtered(TaskFilter::Active).count(), 2);
    assert_eq!(list.filtered(TaskFilter::Completed).count(), 1);
    assert_eq!(list.active_count(), 2);
    assert!(list
        .filtered(TaskFilter::Completed)
        .all(|t| t.completed));
}

#[test]
fn save_then_load_round_trips_through_the_store() {
    let store = MemStore::default();
    let mut list = TodoList::load_or_default(&store);
    let id = list.add("persist me").unwrap();
    list.toggle(id);
    list.save(&store).unwrap();

    let reloaded = TodoList::load_or_default(&store);
    assert_eq!(reloaded.tasks(), list.tasks());
    let restored = reloaded.tasks().iter().find(|t| t.id == id).unwrap();
    assert!(restored.completed);
}
