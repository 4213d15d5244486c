//! Compile-time tuning for the status ring
//!
//! Every interval is an [`embassy_time::Duration`]. The defaults reproduce
//! the tuning of the shipped firmware.

use embassy_time::Duration;

use crate::mode::Mode;

/// Power-saving loop timings and cycle targets
#[derive(Debug, Clone, Copy)]
pub struct PowerConfig {
    /// How long the ring stays dark between active bursts
    pub sleep: Duration,
    /// Length of the brightness ramp down to zero
    pub fade: Duration,
    /// Cycles to run per wake for modes without their own target
    pub active_cycles: u8,
    pub active_cycles_peace: u8,
    pub active_cycles_warning: u8,
    pub active_cycles_solid: u8,
}

impl PowerConfig {
    pub const DEFAULT: Self = Self {
        sleep: Duration::from_millis(1000),
        fade: Duration::from_millis(250),
        active_cycles: 2,
        active_cycles_peace: 2,
        active_cycles_warning: 2,
        active_cycles_solid: 1,
    };

    /// Number of complete cycles to render before fading out
    ///
    /// Never zero: a zero target would fade out immediately on entry.
    pub const fn cycle_target(&self, mode: Mode) -> u8 {
        let target = match mode {
            Mode::Peace => self.active_cycles_peace,
            Mode::Warning => self.active_cycles_warning,
            Mode::SolidGreen | Mode::SolidYellow | Mode::SolidRed => self.active_cycles_solid,
            Mode::Idle | Mode::Danger => self.active_cycles,
        };

        if target == 0 { 1 } else { target }
    }
}

/// Solid color modes
#[derive(Debug, Clone, Copy)]
pub struct SolidConfig {
    /// How long the color is held per cycle
    pub hold: Duration,
}

impl SolidConfig {
    pub const DEFAULT: Self = Self {
        hold: Duration::from_millis(3000),
    };
}

/// Peace mode: chase, pulse, sparkle, hold
#[derive(Debug, Clone, Copy)]
pub struct PeaceConfig {
    pub chase_step: Duration,
    pub chase_steps: u16,
    pub chase_width: u8,
    /// Dim green behind the chase and sparkles (0-255)
    pub background_scale: u8,

    pub pulse_step: Duration,
    pub pulse_steps: u16,
    pub pulse_min_scale: u8,
    pub pulse_max_scale: u8,

    pub sparkle_step: Duration,
    pub sparkle_steps: u16,
    pub sparkle_count: u8,
    pub sparkle_scale: u8,
    /// Intensity of the blue/cyan/purple accents (0-255)
    pub sprinkle_scale: u8,

    pub hold: Duration,
}

impl PeaceConfig {
    pub const DEFAULT: Self = Self {
        chase_step: Duration::from_millis(90),
        chase_steps: 24,
        chase_width: 2,
        background_scale: 40,

        pulse_step: Duration::from_millis(45),
        pulse_steps: 60,
        pulse_min_scale: 30,
        pulse_max_scale: 200,

        sparkle_step: Duration::from_millis(70),
        sparkle_steps: 28,
        sparkle_count: 3,
        sparkle_scale: 255,
        sprinkle_scale: 200,

        hold: Duration::from_millis(600),
    };
}

/// Warning mode: yellow hazard chase, then half-ring strobe
#[derive(Debug, Clone, Copy)]
pub struct WarningConfig {
    pub chase_step: Duration,
    pub chase_laps: u16,
    pub chase_width: u8,

    pub strobe_step: Duration,
    pub strobe_steps: u16,
    /// Intensity of the white half (lower = dimmer strobe)
    pub strobe_white_scale: u8,
}

impl WarningConfig {
    pub const DEFAULT: Self = Self {
        chase_step: Duration::from_millis(80),
        chase_laps: 5,
        chase_width: 3,

        strobe_step: Duration::from_millis(60),
        strobe_steps: 14,
        strobe_white_scale: 140,
    };
}

/// Danger mode: fast chase, flash/pulse, cop lights
#[derive(Debug, Clone, Copy)]
pub struct DangerConfig {
    pub chase_step: Duration,
    pub chase_laps: u16,
    pub chase_width: u8,

    pub pulse_step: Duration,
    pub pulse_steps: u16,
    /// Every n-th pulse step is a full-intensity flash (0 disables flashes)
    pub flash_every: u16,
    pub pulse_base: u8,
    pub pulse_triangle_period: u16,

    pub cop_step: Duration,
    pub cop_steps: u16,
}

impl DangerConfig {
    pub const DEFAULT: Self = Self {
        chase_step: Duration::from_millis(60),
        chase_laps: 5,
        chase_width: 2,

        pulse_step: Duration::from_millis(50),
        pulse_steps: 60,
        flash_every: 5,
        pulse_base: 80,
        pulse_triangle_period: 20,

        cop_step: Duration::from_millis(140),
        cop_steps: 30,
    };
}

/// Configuration for the mode controller
#[derive(Debug, Clone, Copy)]
pub struct RingConfig {
    /// Base strip brightness (0-255)
    pub brightness: u8,
    pub power: PowerConfig,
    pub solid: SolidConfig,
    pub peace: PeaceConfig,
    pub warning: WarningConfig,
    pub danger: DangerConfig,
}

impl RingConfig {
    pub const DEFAULT: Self = Self {
        brightness: 30,
        power: PowerConfig::DEFAULT,
        solid: SolidConfig::DEFAULT,
        peace: PeaceConfig::DEFAULT,
        warning: WarningConfig::DEFAULT,
        danger: DangerConfig::DEFAULT,
    };
}

impl Default for RingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
