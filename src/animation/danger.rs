//! Danger: red chase, flash/pulse and cop lights, looping forever
//!
//! Danger never reports a finished cycle; the power-saving loop does not
//! apply to it.

use embassy_time::Instant;

use super::{Animation, PhaseClock, chase_head, chase_segment, split_halves};
use crate::{
    color::{palette, scale_color},
    config::DangerConfig,
    math8::triangle_wave8,
    ring::{PIXEL_COUNT, RingSink},
};

const PHASE_CHASE: u8 = 0;
const PHASE_PULSE: u8 = 1;
const PHASE_COP_LIGHTS: u8 = 2;

#[derive(Debug, Clone)]
pub struct DangerAnimation {
    config: DangerConfig,
    clock: PhaseClock,
}

impl DangerAnimation {
    pub const fn new(config: DangerConfig) -> Self {
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

    /// Red intensity for a pulse step
    ///
    /// Every `flash_every`-th step flashes at full intensity, the others ride
    /// half a triangle wave on top of the base level.
    pub const fn pulse_intensity(&self, step: u16) -> u8 {
        let config = &self.config;
        if config.flash_every != 0 && step % config.flash_every == 0 {
            return 255;
        }
        let wave = triangle_wave8(step, config.pulse_triangle_period);
        config.pulse_base.saturating_add(wave / 2)
    }
}

impl Animation for DangerAnimation {
    fn render<S: RingSink>(&mut self, now: Instant, ring: &mut S) -> bool {
        if !self.clock.is_due(now) {
            return false;
        }

        let config = self.config;
        match self.clock.phase() {
            PHASE_CHASE => {
                chase_segment(
                    ring,
                    palette::RED,
                    chase_head(self.clock.step()),
                    config.chase_width,
                );
                ring.flush();
                if self
                    .clock
                    .finish_step(now, config.chase_step, self.chase_steps())
                {
                    self.clock.next_phase(now, config.pulse_step);
                }
            }
            PHASE_PULSE => {
                let intensity = self.pulse_intensity(self.clock.step());
                ring.fill(scale_color(palette::RED, intensity));
                ring.flush();
                if self
                    .clock
                    .finish_step(now, config.pulse_step, config.pulse_steps)
                {
                    self.clock.next_phase(now, config.cop_step);
                }
            }
            PHASE_COP_LIGHTS => {
                split_halves(ring, self.clock.step(), palette::RED, palette::BLUE);
                ring.flush();
                if self
                    .clock
                    .finish_step(now, config.cop_step, config.cop_steps)
                {
                    self.clock.rewind(now, config.chase_step);
                }
            }
            _ => self.clock.rewind(now, config.chase_step),
        }

        false
    }

    fn reset(&mut self) {
        self.clock.reset();
    }
}
