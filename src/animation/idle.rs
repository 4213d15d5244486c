//! Idle: blank the ring once, then stay out of the way

use embassy_time::Instant;

use super::Animation;
use crate::ring::RingSink;

#[derive(Debug, Clone, Default)]
pub struct IdleAnimation {
    cleared: bool,
}

impl IdleAnimation {
    pub const fn new() -> Self {
        Self { cleared: false }
    }

    /// Whether the blank frame has already been flushed
    pub const fn is_cleared(&self) -> bool {
        self.cleared
    }
}

impl Animation for IdleAnimation {
    fn render<S: RingSink>(&mut self, _now: Instant, ring: &mut S) -> bool {
        if self.cleared {
            return false;
        }

        ring.clear_all();
        ring.flush();
        self.cleared = true;
        false
    }

    fn reset(&mut self) {
        self.cleared = false;
    }
}
