use crate::constants::DEFAULT_POMODORO_SEC;

/// 25-minute countdown driven by host frame deltas.
///
/// Fractional seconds carry over between ticks so uneven frame timing does
/// not drift the countdown. Reaching zero deactivates the timer.
#[derive(Clone, Debug)]
pub struct PomodoroTimer {
    remaining_sec: u32,
    active: bool,
    carry_sec: f32,
}

impl Default for PomodoroTimer {
    fn default() -> Self {
        Self {
            remaining_sec: DEFAULT_POMODORO_SEC,
            active: false,
            carry_sec: 0.0,
        }
    }
}

impl PomodoroTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.active = !self.active;
    }

    pub fn reset(&mut self) {
        self.active = false;
        self.remaining_sec = DEFAULT_POMODORO_SEC;
        self.carry_sec = 0.0;
    }

    pub fn tick(&mut self, dt_sec: f32) {
        if !self.active {
            return;
        }
        self.carry_sec += dt_sec;
        while self.carry_sec >= 1.0 && self.remaining_sec > 0 {
            self.carry_sec -= 1.0;
            self.remaining_sec -= 1;
        }
        if self.remaining_sec == 0 {
            self.active = false;
            self.carry_sec = 0.0;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn remaining_sec(&self) -> u32 {
        self.remaining_sec
    }

    /// Fraction of the session still remaining, in [0, 1].
    pub fn remaining_fraction(&self) -> f32 {
        self.remaining_sec as f32 / DEFAULT_POMODORO_SEC as f32
    }

    /// `MM:SS` display string.
    pub fn display(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.remaining_sec / 60,
            self.remaining_sec % 60
        )
    }
}
