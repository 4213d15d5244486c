//! Peace: calm, green-focused animation
//!
//! One cycle runs four phases:
//! 1. a bright segment chasing over a dim green background
//! 2. a breathing pulse following a triangle wave
//! 3. sparkles over the dim background with occasional cool accents
//! 4. a short solid green hold

use embassy_time::{Duration, Instant};

use super::{Animation, PhaseClock, chase_head};
use crate::{
    color::{Rgb, palette, scale_color},
    config::PeaceConfig,
    math8::triangle_wave8,
    ring::{PIXEL_COUNT, RingSink},
};

const PHASE_CHASE: u8 = 0;
const PHASE_PULSE: u8 = 1;
const PHASE_SPARKLE: u8 = 2;
const PHASE_HOLD: u8 = 3;

/// Sparkle selector period; selectors 0..=2 pick an accent color
const SPRINKLE_PERIOD: usize = 12;

#[derive(Debug, Clone)]
pub struct PeaceAnimation {
    config: PeaceConfig,
    clock: PhaseClock,
}

impl PeaceAnimation {
    pub const fn new(config: PeaceConfig) -> Self {
        Self {
            config,
            clock: PhaseClock::new(),
        }
    }

    pub const fn clock(&self) -> PhaseClock {
        self.clock
    }

    fn background(&self) -> Rgb {
        scale_color(palette::GREEN, self.config.background_scale)
    }

    fn draw_chase<S: RingSink>(&self, ring: &mut S) {
        let head = chase_head(self.clock.step());
        ring.fill(self.background());
        for offset in 0..usize::from(self.config.chase_width) {
            ring.set_pixel(head + offset, palette::GREEN);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn draw_pulse<S: RingSink>(&self, ring: &mut S) {
        let wave = triangle_wave8(self.clock.step(), self.config.pulse_steps);
        let min = self.config.pulse_min_scale;
        let span = self.config.pulse_max_scale.saturating_sub(min);
        let intensity = min.saturating_add((u32::from(span) * u32::from(wave) / 255) as u8);
        ring.fill(scale_color(palette::GREEN, intensity));
    }

    fn draw_sparkle<S: RingSink>(&self, ring: &mut S) {
        let step = usize::from(self.clock.step());
        ring.fill(self.background());
        for j in 0..usize::from(self.config.sparkle_count) {
            let index = (step * 3 + j * 5) % PIXEL_COUNT;
            ring.set_pixel(index, self.sparkle_color((step + j * 3) % SPRINKLE_PERIOD));
        }
    }

    /// Mostly green sparkles, with an occasional cyan, purple or blue one
    fn sparkle_color(&self, selector: usize) -> Rgb {
        let accent = match selector {
            0 => palette::CYAN,
            1 => palette::PURPLE,
            2 => palette::BLUE,
            _ => return scale_color(palette::GREEN, self.config.sparkle_scale),
        };
        scale_color(accent, self.config.sprinkle_scale)
    }
}

impl Animation for PeaceAnimation {
    fn render<S: RingSink>(&mut self, now: Instant, ring: &mut S) -> bool {
        if !self.clock.is_due(now) {
            return false;
        }

        let config = self.config;
        match self.clock.phase() {
            PHASE_CHASE => {
                self.draw_chase(ring);
                ring.flush();
                if self
                    .clock
                    .finish_step(now, config.chase_step, config.chase_steps)
                {
                    self.clock.next_phase(now, config.pulse_step);
                }
                false
            }
            PHASE_PULSE => {
                self.draw_pulse(ring);
                ring.flush();
                if self
                    .clock
                    .finish_step(now, config.pulse_step, config.pulse_steps)
                {
                    self.clock.next_phase(now, config.sparkle_step);
                }
                false
            }
            PHASE_SPARKLE => {
                self.draw_sparkle(ring);
                ring.flush();
                if self
                    .clock
                    .finish_step(now, config.sparkle_step, config.sparkle_steps)
                {
                    // The hold is drawn on the very next tick
                    self.clock.next_phase(now, Duration::from_ticks(0));
                }
                false
            }
            PHASE_HOLD if self.clock.step() == 0 => {
                ring.fill(palette::GREEN);
                ring.flush();
                self.clock.finish_step(now, config.hold, 1);
                false
            }
            // Hold elapsed
            _ => true,
        }
    }

    fn reset(&mut self) {
        self.clock.reset();
    }
}
