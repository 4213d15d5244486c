//! Animation system with compile-time known variants
//!
//! Every mode's animation lives in [`AnimationSlot`], so switching modes
//! swaps the whole state instead of sharing phase counters between modes.
//! Each animation implements the [`Animation`] trait.

mod danger;
mod idle;
mod peace;
mod solid;
mod warning;

use embassy_time::{Duration, Instant};

pub use danger::DangerAnimation;
pub use idle::IdleAnimation;
pub use peace::PeaceAnimation;
pub use solid::SolidAnimation;
pub use warning::WarningAnimation;

use crate::color::{Rgb, palette};
use crate::config::RingConfig;
use crate::mode::Mode;
use crate::ring::{PIXEL_COUNT, RingSink};

pub trait Animation {
    /// Render a frame if the current step is due
    ///
    /// Draws and flushes at most one frame. Returns `true` once a full cycle
    /// has been shown.
    fn render<S: RingSink>(&mut self, now: Instant, ring: &mut S) -> bool;

    /// Go back to the first step of the first phase
    fn reset(&mut self);
}

/// Phase/step counters with a "next eligible instant" gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseClock {
    phase: u8,
    step: u16,
    next_at: Instant,
}

impl Default for PhaseClock {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseClock {
    /// Phase 0, step 0, first frame due immediately
    pub const fn new() -> Self {
        Self {
            phase: 0,
            step: 0,
            next_at: Instant::from_millis(0),
        }
    }

    pub const fn phase(&self) -> u8 {
        self.phase
    }

    pub const fn step(&self) -> u16 {
        self.step
    }

    /// Instant at which the next frame may be drawn
    pub const fn next_at(&self) -> Instant {
        self.next_at
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_at
    }

    /// Count a rendered step and arm the gate `interval` from `now`
    ///
    /// Returns `true` once the phase has reached `steps`.
    pub fn finish_step(&mut self, now: Instant, interval: Duration, steps: u16) -> bool {
        self.step = self.step.saturating_add(1);
        self.next_at = now + interval;
        self.step >= steps
    }

    /// Enter the next phase, first step due `interval` from `now`
    pub fn next_phase(&mut self, now: Instant, interval: Duration) {
        self.phase = self.phase.saturating_add(1);
        self.step = 0;
        self.next_at = now + interval;
    }

    /// Loop back to phase 0, first step due `interval` from `now`
    pub fn rewind(&mut self, now: Instant, interval: Duration) {
        self.phase = 0;
        self.step = 0;
        self.next_at = now + interval;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Clear the ring and light `width` pixels starting at `head`
pub(crate) fn chase_segment<S: RingSink>(ring: &mut S, color: Rgb, head: usize, width: u8) {
    ring.clear_all();
    for offset in 0..usize::from(width) {
        ring.set_pixel(head + offset, color);
    }
}

/// Paint the ring in two halves, swapping sides on odd steps
pub(crate) fn split_halves<S: RingSink>(ring: &mut S, step: u16, first: Rgb, second: Rgb) {
    let swap = step % 2 == 1;
    for i in 0..PIXEL_COUNT {
        let first_half = i < PIXEL_COUNT / 2;
        ring.set_pixel(i, if first_half ^ swap { first } else { second });
    }
}

/// Head position of a chase segment for a given step
pub(crate) const fn chase_head(step: u16) -> usize {
    step as usize % PIXEL_COUNT
}

/// Animation slot - enum containing the animation of every mode
#[derive(Debug, Clone)]
pub enum AnimationSlot {
    /// Blank ring
    Idle(IdleAnimation),
    /// Green chase, pulse, sparkle and hold
    Peace(PeaceAnimation),
    /// Yellow hazard chase and strobe
    Warning(WarningAnimation),
    /// Endless red chase, flashes and cop lights
    Danger(DangerAnimation),
    /// Single color hold
    Solid(SolidAnimation),
}

impl Default for AnimationSlot {
    fn default() -> Self {
        Self::Idle(IdleAnimation::new())
    }
}

impl AnimationSlot {
    /// Build the animation for `mode` in its initial state
    pub fn for_mode(mode: Mode, config: &RingConfig) -> Self {
        match mode {
            Mode::Idle => Self::Idle(IdleAnimation::new()),
            Mode::Peace => Self::Peace(PeaceAnimation::new(config.peace)),
            Mode::Warning => Self::Warning(WarningAnimation::new(config.warning)),
            Mode::Danger => Self::Danger(DangerAnimation::new(config.danger)),
            Mode::SolidGreen => Self::Solid(SolidAnimation::new(palette::GREEN, config.solid)),
            Mode::SolidYellow => {
                Self::Solid(SolidAnimation::new(palette::YELLOW, config.solid))
            }
            Mode::SolidRed => Self::Solid(SolidAnimation::new(palette::RED, config.solid)),
        }
    }

    /// Render the current animation
    pub fn render<S: RingSink>(&mut self, now: Instant, ring: &mut S) -> bool {
        match self {
            Self::Idle(animation) => animation.render(now, ring),
            Self::Peace(animation) => animation.render(now, ring),
            Self::Warning(animation) => animation.render(now, ring),
            Self::Danger(animation) => animation.render(now, ring),
            Self::Solid(animation) => animation.render(now, ring),
        }
    }

    /// Reset the animation state
    pub fn reset(&mut self) {
        match self {
            Self::Idle(animation) => animation.reset(),
            Self::Peace(animation) => animation.reset(),
            Self::Warning(animation) => animation.reset(),
            Self::Danger(animation) => animation.reset(),
            Self::Solid(animation) => animation.reset(),
        }
    }

    /// Phase/step counters of the current animation
    ///
    /// Idle has no phases and reports a fresh clock.
    pub fn clock(&self) -> PhaseClock {
        match self {
            Self::Idle(_) => PhaseClock::new(),
            Self::Peace(animation) => animation.clock(),
            Self::Warning(animation) => animation.clock(),
            Self::Danger(animation) => animation.clock(),
            Self::Solid(animation) => animation.clock(),
        }
    }

    pub fn phase(&self) -> u8 {
        self.clock().phase()
    }

    pub fn step(&self) -> u16 {
        self.clock().step()
    }
}
