//! Host-agnostic interaction core for the deskroom scene.
//!
//! This crate owns everything between raw pointer coordinates and a semantic
//! click: pointer tracking in normalized device coordinates, ray casting
//! against an arena-indexed scene graph, hover resolution through the
//! ancestor chain, reversible scale feedback, and tap-vs-drag gating. The
//! host (see `room-web`) supplies the clock, the event stream, and the
//! per-frame `tick` call; nothing here references a DOM, a GPU, or a timer.

pub mod camera;
pub mod constants;
pub mod feedback;
pub mod gesture;
pub mod interaction;
pub mod pointer;
pub mod ray;
pub mod scene;
pub mod widgets;

pub use camera::Camera;
pub use interaction::{CursorAffordance, InteractionEngine};
pub use ray::{Hit, Ray};
pub use scene::{ActionKey, Collider, NodeId, SceneGraph, Transform};
