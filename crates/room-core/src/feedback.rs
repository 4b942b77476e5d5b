//! Hover feedback: reversible, interruptible scale tweens.
//!
//! The first time a node is hovered its pre-hover scale is snapshotted, and
//! that snapshot is what every later enter/exit cycle scales from and
//! restores to. Recomputing it from the current (possibly mid-tween) scale
//! would accumulate drift on rapid hover toggling.

use fnv::FnvHashMap;
use glam::Vec3;

use crate::constants::{HOVER_SCALE_MULT, HOVER_TWEEN_SEC};
use crate::scene::{NodeId, SceneGraph};

#[inline]
fn ease_out_cubic(t: f32) -> f32 {
    let u = 1.0 - t;
    1.0 - u * u * u
}

#[derive(Clone, Copy, Debug)]
struct ScaleTween {
    from: Vec3,
    to: Vec3,
    elapsed: f32,
    duration: f32,
}

#[derive(Default)]
pub struct FeedbackDriver {
    snapshots: FnvHashMap<NodeId, Vec3>,
    tweens: FnvHashMap<NodeId, ScaleTween>,
}

impl FeedbackDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin enter feedback: animate toward the snapshot scaled by the hover
    /// multiplier.
    pub fn enter(&mut self, scene: &mut SceneGraph, id: NodeId) {
        let snapshot = *self
            .snapshots
            .entry(id)
            .or_insert_with(|| scene.local_scale(id));
        self.retarget(scene, id, snapshot * HOVER_SCALE_MULT);
    }

    /// Begin exit feedback: animate back to the snapshot exactly. No-op for
    /// a node that was never hovered.
    pub fn exit(&mut self, scene: &mut SceneGraph, id: NodeId) {
        let Some(&snapshot) = self.snapshots.get(&id) else {
            return;
        };
        self.retarget(scene, id, snapshot);
    }

    // Kill any in-flight tween on the node and start a fresh one from the
    // current scale, so rapid hover toggling retargets smoothly instead of
    // snapping back to a reset pose.
    fn retarget(&mut self, scene: &SceneGraph, id: NodeId, to: Vec3) {
        self.tweens.insert(
            id,
            ScaleTween {
                from: scene.local_scale(id),
                to,
                elapsed: 0.0,
                duration: HOVER_TWEEN_SEC,
            },
        );
    }

    /// Advance all in-flight tweens by `dt_sec`, writing scales back into
    /// the scene. Finished tweens land on their target exactly.
    pub fn tick(&mut self, scene: &mut SceneGraph, dt_sec: f32) {
        self.tweens.retain(|&id, tw| {
            tw.elapsed += dt_sec;
            let t = tw.elapsed / tw.duration;
            if t >= 1.0 {
                scene.set_local_scale(id, tw.to);
                false
            } else {
                scene.set_local_scale(id, tw.from.lerp(tw.to, ease_out_cubic(t)));
                true
            }
        });
    }

    /// Forced synchronous settle: drop every tween and write each
    /// snapshotted node back to its original scale immediately. Used on
    /// disposal so nothing is left mid-scale and no animation outlives the
    /// interaction layer.
    pub fn settle(&mut self, scene: &mut SceneGraph) {
        self.tweens.clear();
        for (&id, &snapshot) in &self.snapshots {
            scene.set_local_scale(id, snapshot);
        }
    }

    /// Settle a single node (used when a hovered node disappears from the
    /// scene between frames).
    pub fn settle_one(&mut self, scene: &mut SceneGraph, id: NodeId) {
        self.tweens.remove(&id);
        if let Some(&snapshot) = self.snapshots.get(&id) {
            scene.set_local_scale(id, snapshot);
        }
    }

    pub fn is_animating(&self, id: NodeId) -> bool {
        self.tweens.contains_key(&id)
    }

    /// The original-scale snapshot, if this node has ever been hovered.
    pub fn snapshot(&self, id: NodeId) -> Option<Vec3> {
        self.snapshots.get(&id).copied()
    }
}
