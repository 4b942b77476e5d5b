use glam::Vec2;

/// Latest pointer position in normalized device coordinates, both axes in
/// [-1, 1] with x increasing rightward and y increasing upward.
///
/// Writes may arrive many times per frame; only the last one before the
/// frame's raycast matters, so there is no queueing. No range validation is
/// performed; callers normalize against the current viewport.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    ndc: Vec2,
}

impl PointerState {
    pub fn set(&mut self, x: f32, y: f32) {
        self.ndc = Vec2::new(x, y);
    }

    pub fn ndc(&self) -> Vec2 {
        self.ndc
    }
}

/// Convert viewport pixel coordinates (origin top-left, y down) to NDC.
///
/// Hosts call this per pointer event with the viewport size measured at that
/// moment, so resizes never leave a stale mapping cached anywhere.
#[inline]
pub fn viewport_to_ndc(px: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        (2.0 * px.x / width.max(1.0)) - 1.0,
        1.0 - (2.0 * px.y / height.max(1.0)),
    )
}
