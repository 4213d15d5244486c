//! Warning: yellow hazard chase followed by a half-ring strobe

use embassy_time::Instant;

use super::{Animation, PhaseClock, chase_head, chase_segment, split_halves};
use crate::{
    color::{palette, scale_color},
    config::WarningConfig,
    ring::{PIXEL_COUNT, RingSink},
};

const PHASE_CHASE: u8 = 0;
const PHASE_STROBE: u8 = 1;

#[derive(Debug, Clone)]
pub struct WarningAnimation {
    config: WarningConfig,
    clock: PhaseClock,
}

impl WarningAnimation {
    pub const fn new(config: WarningConfig) -> Self {
        Self {
            config,
            clock: PhaseClock::new(),
        }
    }

    pub const fn clock(&self) -> PhaseClock {
        self.clock
    }

    #[allow(clippy::cast_possible_truncation)]
    const fn chase_steps(&self) -> u16 {
        self.config.chase_laps.saturating_mul(PIXEL_COUNT as u16)
    }
}

impl Animation for WarningAnimation {
    fn render<S: RingSink>(&mut self, now: Instant, ring: &mut S) -> bool {
        if !self.clock.is_due(now) {
            return false;
        }

        let config = self.config;
        match self.clock.phase() {
            PHASE_CHASE => {
                chase_segment(
                    ring,
                    palette::YELLOW,
                    chase_head(self.clock.step()),
                    config.chase_width,
                );
                ring.flush();
                if self
                    .clock
                    .finish_step(now, config.chase_step, self.chase_steps())
                {
                    self.clock.next_phase(now, config.strobe_step);
                }
                false
            }
            PHASE_STROBE => {
                // Police-light style: one half dimmed white, the other yellow
                let white = scale_color(palette::WHITE, config.strobe_white_scale);
                split_halves(ring, self.clock.step(), white, palette::YELLOW);
                ring.flush();
                self.clock
                    .finish_step(now, config.strobe_step, config.strobe_steps)
            }
            _ => true,
        }
    }

    fn reset(&mut self) {
        self.clock.reset();
    }
}
