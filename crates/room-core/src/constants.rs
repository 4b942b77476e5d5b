/// Interaction and scene tuning constants.
///
/// These express intended behavior (thresholds, durations, framing) and keep
/// magic numbers out of the code.
use glam::Vec3;

// Hover feedback: scale multiplier applied to the original-scale snapshot
// and the tween duration used for both enter and exit.
pub const HOVER_SCALE_MULT: f32 = 1.15;
pub const HOVER_TWEEN_SEC: f32 = 0.25;

// Click gate: a pointer-up counts as a click only when both are under these.
pub const CLICK_MAX_ELAPSED_MS: f64 = 300.0;
pub const CLICK_MAX_DISTANCE_PX: f32 = 5.0;

// Reserved node-name prefix marking interactive objects. The suffix names
// the modal the object opens, e.g. "interact_handphone".
pub const INTERACT_PREFIX: &str = "interact_";

// Desk-room camera framing.
pub const CAMERA_FOVY_DEG: f32 = 25.0;
pub const CAMERA_EYE: Vec3 = Vec3::new(6.66, 2.16, 7.72);
pub const CAMERA_TARGET: Vec3 = Vec3::new(0.39, 0.03, -0.11);
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Pomodoro session length (25 minutes).
pub const DEFAULT_POMODORO_SEC: u32 = 25 * 60;

// Key-value storage key for the persisted to-do list.
pub const TODO_STORAGE_KEY: &str = "todolist-tasks";
