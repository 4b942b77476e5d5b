use glam::Vec2;
use room_core::gesture::ClickGate;

#[test]
fn quick_still_release_is_a_click() {
    let mut gate = ClickGate::default();
    gate.press(1_000.0, Vec2::new(100.0, 100.0));
    // 200 ms elapsed, 2 px moved
    assert!(gate.release(1_200.0, Vec2::new(102.0, 100.0)));
}

#[test]
fn slow_release_is_not_a_click() {
    let mut gate = ClickGate::default();
    gate.press(1_000.0, Vec2::new(100.0, 100.0));
    // 500 ms elapsed, no movement: an orbit drag that ended in place
    assert!(!gate.release(1_500.0, Vec2::new(100.0, 100.0)));
}

#[test]
fn long_move_is_not_a_click() {
    let mut gate = ClickGate::default();
    gate.press(1_000.0, Vec2::new(100.0, 100.0));
    // 50 ms elapsed but 50 px traveled: a flick drag
    assert!(!gate.release(1_050.0, Vec2::new(150.0, 100.0)));
}

#[test]
fn thresholds_are_exclusive() {
    let mut gate = ClickGate::default();
    gate.press(0.0, Vec2::ZERO);
    // Exactly 300 ms is already too slow
    assert!(!gate.release(300.0, Vec2::ZERO));

    gate.press(0.0, Vec2::ZERO);
    // Exactly 5 px is already too far
    assert!(!gate.release(100.0, Vec2::new(5.0, 0.0)));

    gate.press(0.0, Vec2::ZERO);
    assert!(gate.release(299.0, Vec2::new(4.9, 0.0)));
}

#[test]
fn release_without_press_is_ignored() {
    let mut gate = ClickGate::default();
    assert!(!gate.release(1_000.0, Vec2::ZERO));
}

#[test]
fn press_state_is_consumed_by_release() {
    let mut gate = ClickGate::default();
    gate.press(1_000.0, Vec2::ZERO);
    assert!(gate.release(1_100.0, Vec2::ZERO));
    // A second release without a new press classifies as nothing
    assert!(!gate.release(1_150.0, Vec2::ZERO));
}

#[test]
fn diagonal_movement_uses_euclidean_distance() {
    let mut gate = pressed_gate();
    // 4 px on each axis is ~5.66 px diagonal, over the 5 px threshold
    assert!(!gate.release(1_100.0, Vec2::new(104.0, 104.0)));

    let mut gate = pressed_gate();
    // 3 px / 3 px is ~4.24 px, under the threshold
    assert!(gate.release(1_100.0, Vec2::new(103.0, 103.0)));
}

fn pressed_gate() -> ClickGate {
    let mut gate = ClickGate::default();
    gate.press(1_000.0, Vec2::new(100.0, 100.0));
    gate
}
