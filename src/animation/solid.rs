//! Solid color hold
//!
//! Fills the ring with one color. A cycle is one hold period.

use embassy_time::Instant;

use super::{Animation, PhaseClock};
use crate::{color::Rgb, config::SolidConfig, ring::RingSink};

const PHASE_FILL: u8 = 0;

/// Solid color animation - fills all LEDs with one color and holds it
#[derive(Debug, Clone)]
pub struct SolidAnimation {
    color: Rgb,
    config: SolidConfig,
    clock: PhaseClock,
}

impl SolidAnimation {
    pub const fn new(color: Rgb, config: SolidConfig) -> Self {
        Self {
            color,
            config,
            clock: PhaseClock::new(),
        }
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    pub const fn clock(&self) -> PhaseClock {
        self.clock
    }
}

impl Animation for SolidAnimation {
    fn render<S: RingSink>(&mut self, now: Instant, ring: &mut S) -> bool {
        if self.clock.phase() == PHASE_FILL {
            ring.fill(self.color);
            ring.flush();
            self.clock.next_phase(now, self.config.hold);
            return false;
        }

        self.clock.is_due(now)
    }

    fn reset(&mut self) {
        self.clock.reset();
    }
}
