//! Modal content state machines: small, host-rendered widgets backed by the
//! same tick/event model as the interaction core.

pub mod pomodoro;
pub mod todo;

pub use pomodoro::PomodoroTimer;
pub use todo::{Task, TaskFilter, TaskStore, TodoList};
