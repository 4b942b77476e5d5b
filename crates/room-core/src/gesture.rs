use glam::Vec2;

use crate::constants::{CLICK_MAX_DISTANCE_PX, CLICK_MAX_ELAPSED_MS};

#[derive(Clone, Copy, Debug)]
struct PressSample {
    at_ms: f64,
    pos: Vec2,
}

/// Tap-vs-drag disambiguation.
///
/// The orbit control consumes drag gestures on the same pointer target, so a
/// pointer-up only counts as a click when it was both quick and close to the
/// press position. Timestamps are caller-supplied milliseconds; the gate
/// never reads a clock.
#[derive(Default, Debug)]
pub struct ClickGate {
    pressed: Option<PressSample>,
}

impl ClickGate {
    pub fn press(&mut self, at_ms: f64, pos: Vec2) {
        self.pressed = Some(PressSample { at_ms, pos });
    }

    /// Classify the release. The recorded press is consumed either way.
    pub fn release(&mut self, at_ms: f64, pos: Vec2) -> bool {
        let Some(press) = self.pressed.take() else {
            return false;
        };
        let elapsed_ms = at_ms - press.at_ms;
        let moved_px = pos.distance(press.pos);
        elapsed_ms < CLICK_MAX_ELAPSED_MS && moved_px < CLICK_MAX_DISTANCE_PX
    }
}
