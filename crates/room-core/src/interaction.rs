//! Hover resolution engine.
//!
//! Owns the raycast target set and the single hover slot. The host calls
//! `tick` once per animation frame and forwards discrete pointer events;
//! everything in between (raycast, ancestor walk, feedback, cursor
//! affordance, click gating) happens here.

use fnv::FnvHashSet;
use glam::Vec2;

use crate::camera::Camera;
use crate::feedback::FeedbackDriver;
use crate::gesture::ClickGate;
use crate::pointer::PointerState;
use crate::scene::{ActionKey, NodeId, SceneGraph};

/// Desired pointer-style indicator. The core only records the value; the
/// host shell applies it, so no ambient global state is written from here.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CursorAffordance {
    #[default]
    Default,
    Pointer,
}

#[derive(Default)]
pub struct InteractionEngine {
    pointer: PointerState,
    gate: ClickGate,
    feedback: FeedbackDriver,
    targets: Vec<NodeId>,
    target_set: FnvHashSet<NodeId>,
    hovered: Option<NodeId>,
    cursor: CursorAffordance,
    cursor_dirty: bool,
    disposed: bool,
}

impl InteractionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raycast target. Duplicates are ignored; the set only grows.
    pub fn register_target(&mut self, id: NodeId) {
        if self.target_set.insert(id) {
            self.targets.push(id);
        }
    }

    pub fn register_targets(&mut self, ids: impl IntoIterator<Item = NodeId>) {
        for id in ids {
            self.register_target(id);
        }
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Store the latest normalized pointer position. Coalesced naturally;
    /// only the last write before the next `tick` matters.
    pub fn update_pointer(&mut self, x: f32, y: f32) {
        self.pointer.set(x, y);
    }

    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    /// Read-only view of the feedback driver (snapshots, in-flight tweens).
    pub fn feedback(&self) -> &FeedbackDriver {
        &self.feedback
    }

    pub fn cursor(&self) -> CursorAffordance {
        self.cursor
    }

    /// The cursor value if it changed since the last call, consuming the
    /// change flag. Hosts poll this each frame and apply the style only on
    /// transitions.
    pub fn take_cursor_change(&mut self) -> Option<CursorAffordance> {
        if self.cursor_dirty {
            self.cursor_dirty = false;
            Some(self.cursor)
        } else {
            None
        }
    }

    /// Per-frame update: advance feedback tweens, then re-resolve the hover
    /// target from the latest pointer position.
    pub fn tick(&mut self, scene: &mut SceneGraph, camera: &Camera, dt_sec: f32) {
        if self.disposed {
            return;
        }
        self.feedback.tick(scene, dt_sec);

        // Scene not loaded yet.
        if self.targets.is_empty() {
            return;
        }

        // A hovered node detached between frames: fail safe to "no hover"
        // and reset its scale without animating a ghost.
        if let Some(h) = self.hovered {
            if !scene.contains(h) {
                self.feedback.settle_one(scene, h);
                self.hovered = None;
                self.set_cursor(CursorAffordance::Default);
            }
        }

        let ray = camera.pointer_ray(self.pointer.ndc());
        let hits = scene.raycast(&ray, &self.targets);
        let target = hits
            .first()
            .and_then(|hit| scene.resolve_interactive(hit.node));

        match target {
            None => self.clear_hover(scene),
            Some(t) if Some(t) == self.hovered => {
                // Still resting on the same object; feedback must not restart.
            }
            Some(t) => {
                if let Some(prev) = self.hovered.take() {
                    self.feedback.exit(scene, prev);
                }
                self.feedback.enter(scene, t);
                log::debug!("[hover] enter {}", scene.name(t));
                self.hovered = Some(t);
                self.set_cursor(CursorAffordance::Pointer);
            }
        }
    }

    fn clear_hover(&mut self, scene: &mut SceneGraph) {
        if let Some(prev) = self.hovered.take() {
            self.feedback.exit(scene, prev);
            log::debug!("[hover] exit {}", scene.name(prev));
        }
        self.set_cursor(CursorAffordance::Default);
    }

    fn set_cursor(&mut self, cursor: CursorAffordance) {
        if self.cursor != cursor {
            self.cursor = cursor;
            self.cursor_dirty = true;
        }
    }

    /// Record a pointer press for the click gate. `pos` is in viewport
    /// pixels, `at_ms` any monotonic millisecond timestamp.
    pub fn pointer_down(&mut self, at_ms: f64, pos: Vec2) {
        if self.disposed {
            return;
        }
        self.gate.press(at_ms, pos);
    }

    /// Classify the release; a gated click resolves against the current
    /// hover. Drag/orbit releases return None.
    pub fn pointer_up(&mut self, at_ms: f64, pos: Vec2, scene: &SceneGraph) -> Option<ActionKey> {
        if self.disposed {
            return None;
        }
        if !self.gate.release(at_ms, pos) {
            return None;
        }
        self.handle_click(scene)
    }

    /// Dispatch the current hover's action key, if any. An interactive node
    /// without a key is hoverable but not clickable, which is a valid
    /// configuration rather than a fault.
    pub fn handle_click(&self, scene: &SceneGraph) -> Option<ActionKey> {
        let hovered = self.hovered?;
        match scene.action(hovered) {
            Some(key) => {
                log::info!("[click] dispatch {}", key.as_str());
                Some(key)
            }
            None => None,
        }
    }

    /// Tear down: synchronously settle all feedback, clear hover state and
    /// cursor affordance. Further calls into the engine are no-ops, so no
    /// callbacks can fire after disposal.
    pub fn dispose(&mut self, scene: &mut SceneGraph) {
        if self.disposed {
            return;
        }
        self.feedback.settle(scene);
        self.hovered = None;
        self.set_cursor(CursorAffordance::Default);
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
