#![no_std]

pub mod animation;
pub mod color;
pub mod config;
pub mod controller;
pub mod math8;
pub mod mode;
pub mod power;
pub mod remote;
pub mod request;
pub mod ring;

pub use animation::{Animation, AnimationSlot, PhaseClock};
pub use config::{
    DangerConfig, PeaceConfig, PowerConfig, RingConfig, SolidConfig, WarningConfig,
};
pub use controller::ModeController;
pub use mode::Mode;
pub use power::{PowerScheduler, PowerState};
pub use remote::{RemoteButton, RemoteEvents};
pub use request::{ModeRequest, QueueFull, RequestChannel, RequestReceiver, RequestSender};
pub use ring::{BufferedRing, PIXEL_COUNT, RingSink, SmartLedsDriver};

pub use color::{Rgb, scale_color};
pub use math8::triangle_wave8;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// [`BufferedRing`] hands it one complete, brightness-scaled frame per flush.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
