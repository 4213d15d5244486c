use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::AnimationSlot;
use crate::config::RingConfig;
use crate::mode::Mode;
use crate::power::{PowerScheduler, PowerState};
use crate::remote::RemoteEvents;
use crate::request::{ModeRequest, RequestReceiver};
use crate::ring::RingSink;

/// Mode controller - owns the ring and everything drawn on it
///
/// Call [`ModeController::tick`] continuously with a monotonic timestamp.
/// Mode changes take effect on the next tick.
pub struct ModeController<S: RingSink> {
    // External dependencies and configuration
    ring: S,
    config: RingConfig,

    // Internal state
    mode: Mode,
    animation: AnimationSlot,
    power: PowerScheduler,
}

impl<S: RingSink> ModeController<S> {
    /// Create a controller in `Idle` and blank the ring
    pub fn new(mut ring: S, config: &RingConfig) -> Self {
        ring.set_brightness(config.brightness);
        ring.clear_all();
        ring.flush();

        Self {
            ring,
            config: *config,
            mode: Mode::Idle,
            animation: AnimationSlot::for_mode(Mode::Idle, config),
            power: PowerScheduler::new(config.power, config.brightness),
        }
    }

    /// Process one poll
    ///
    /// Never blocks: if nothing is due yet, the ring is left untouched.
    pub fn tick(&mut self, now: Instant) {
        if self.mode.is_power_saving() {
            let target = self.config.power.cycle_target(self.mode);
            self.power
                .tick(now, target, &mut self.animation, &mut self.ring);
        } else {
            self.power
                .tick_always_on(now, &mut self.animation, &mut self.ring);
        }
    }

    /// Switch to `mode`
    ///
    /// Re-selecting the active mode does nothing unless `force_restart` is
    /// set. Otherwise the animation starts over and the power-saving loop is
    /// reset to `Active`.
    pub fn set_mode(&mut self, mode: Mode, force_restart: bool) {
        if !force_restart && mode == self.mode {
            return;
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "[ModeController.set_mode] {} -> {} (force: {})",
            self.mode.as_str(),
            mode.as_str(),
            force_restart
        );

        self.mode = mode;
        self.animation = AnimationSlot::for_mode(mode, &self.config);
        self.power.reset(&mut self.ring);
    }

    /// Apply a queued request
    pub fn apply(&mut self, request: ModeRequest) {
        self.set_mode(request.mode, request.force_restart);
    }

    /// Apply every pending request from the queue (non-blocking)
    ///
    /// Returns the number of requests applied.
    pub fn apply_pending<const SIZE: usize>(&mut self, requests: &RequestReceiver<'_, SIZE>) -> usize {
        let mut applied = 0;
        while let Some(request) = requests.try_receive() {
            self.apply(request);
            applied += 1;
        }
        applied
    }

    /// Apply remote button presses
    ///
    /// Buttons are handled in a fixed order, each one stepping from the mode
    /// left by the previous press.
    pub fn handle_remote(&mut self, events: RemoteEvents) {
        for button in events.pressed() {
            let request = button.request(self.mode);
            self.apply(request);
        }
    }

    pub const fn current_mode(&self) -> Mode {
        self.mode
    }

    pub const fn power_state(&self) -> PowerState {
        self.power.state()
    }

    /// Full cycles rendered since the ring last woke up
    pub const fn cycles_completed(&self) -> u8 {
        self.power.cycles_completed()
    }

    pub const fn animation(&self) -> &AnimationSlot {
        &self.animation
    }

    pub const fn config(&self) -> &RingConfig {
        &self.config
    }

    /// Get a reference to the ring sink.
    pub const fn sink(&self) -> &S {
        &self.ring
    }

    /// Get a mutable reference to the ring sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.ring
    }
}
