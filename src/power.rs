//! Power-saving loop
//!
//! Wraps an animation in an Active → FadingOut → Sleeping → Active cycle so
//! the ring spends most of its time dark unless something urgent is shown.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::AnimationSlot;
use crate::config::PowerConfig;
use crate::math8::fade8;
use crate::ring::RingSink;

/// State of the power-saving loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Animation running at base brightness
    #[default]
    Active,
    /// Brightness ramping down to zero
    FadingOut,
    /// Ring dark until the sleep period ends
    Sleeping,
}

/// Power-saving scheduler
#[derive(Debug, Clone)]
pub struct PowerScheduler {
    config: PowerConfig,
    base_brightness: u8,

    state: PowerState,
    cycles_completed: u8,
    state_since: Instant,
    off_rendered: bool,
}

impl PowerScheduler {
    pub const fn new(config: PowerConfig, base_brightness: u8) -> Self {
        Self {
            config,
            base_brightness,
            state: PowerState::Active,
            cycles_completed: 0,
            state_since: Instant::from_millis(0),
            off_rendered: false,
        }
    }

    pub const fn state(&self) -> PowerState {
        self.state
    }

    /// Full animation cycles rendered since entering `Active`
    pub const fn cycles_completed(&self) -> u8 {
        self.cycles_completed
    }

    /// Instant the current state was entered
    pub const fn state_since(&self) -> Instant {
        self.state_since
    }

    pub const fn base_brightness(&self) -> u8 {
        self.base_brightness
    }

    /// Back to `Active` with no completed cycles and base brightness
    pub fn reset<S: RingSink>(&mut self, ring: &mut S) {
        self.state = PowerState::Active;
        self.cycles_completed = 0;
        self.state_since = Instant::from_millis(0);
        self.off_rendered = false;
        ring.set_brightness(self.base_brightness);
    }

    /// Drive the animation without fading or sleeping
    pub fn tick_always_on<S: RingSink>(
        &self,
        now: Instant,
        animation: &mut AnimationSlot,
        ring: &mut S,
    ) {
        ring.set_brightness(self.base_brightness);
        animation.render(now, ring);
    }

    /// Advance the power-saving loop by one poll
    ///
    /// `cycle_target` is the number of complete cycles to show before fading
    /// out; zero is treated as one.
    pub fn tick<S: RingSink>(
        &mut self,
        now: Instant,
        cycle_target: u8,
        animation: &mut AnimationSlot,
        ring: &mut S,
    ) {
        match self.state {
            PowerState::Active => self.tick_active(now, cycle_target.max(1), animation, ring),
            PowerState::FadingOut => self.tick_fading(now, ring),
            PowerState::Sleeping => self.tick_sleeping(now, animation, ring),
        }
    }

    fn tick_active<S: RingSink>(
        &mut self,
        now: Instant,
        cycle_target: u8,
        animation: &mut AnimationSlot,
        ring: &mut S,
    ) {
        ring.set_brightness(self.base_brightness);
        if !animation.render(now, ring) {
            return;
        }

        self.cycles_completed = self.cycles_completed.saturating_add(1);
        if self.cycles_completed >= cycle_target {
            self.enter(PowerState::FadingOut, now);
        } else {
            animation.reset();
        }
    }

    fn tick_fading<S: RingSink>(&mut self, now: Instant, ring: &mut S) {
        let elapsed = now.saturating_duration_since(self.state_since);
        let fade = self.config.fade;
        if elapsed >= fade {
            ring.set_brightness(0);
            ring.clear_all();
            ring.flush();
            self.enter(PowerState::Sleeping, now);
            self.off_rendered = true;
            return;
        }

        let remaining = fade - elapsed;
        ring.set_brightness(fade8(
            self.base_brightness,
            remaining.as_ticks(),
            fade.as_ticks(),
        ));
        ring.flush();
    }

    fn tick_sleeping<S: RingSink>(
        &mut self,
        now: Instant,
        animation: &mut AnimationSlot,
        ring: &mut S,
    ) {
        if !self.off_rendered {
            ring.clear_all();
            ring.flush();
            self.off_rendered = true;
        }

        if now.saturating_duration_since(self.state_since) < self.config.sleep {
            return;
        }

        self.enter(PowerState::Active, now);
        self.cycles_completed = 0;
        self.off_rendered = false;
        ring.set_brightness(self.base_brightness);
        animation.reset();
    }

    fn enter(&mut self, state: PowerState, now: Instant) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[PowerScheduler.enter] {:?} -> {:?} at {}ms",
            self.state,
            state,
            now.as_millis()
        );
        self.state = state;
        self.state_since = now;
    }

    /// Time spent in the current state
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.state_since)
    }
}
