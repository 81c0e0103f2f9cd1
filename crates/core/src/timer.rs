//! Wall-clock frame delta.

use std::time::Instant;

/// Measures the time between consecutive frames
#[derive(Debug, Clone, Copy)]
pub struct FrameTimer {
    last: Instant,
    frames: u64,
}

impl FrameTimer {
    pub fn new(now: Instant) -> Self {
        Self { last: now, frames: 0 }
    }

    /// Seconds since the previous call (or since construction).
    pub fn tick(&mut self, now: Instant) -> f32 {
        let dt = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;
        self.frames += 1;
        dt
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
