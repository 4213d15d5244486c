//! Colors used by the status animations

use smart_leds::RGB8;

use crate::math8::scale_channel;

pub type Rgb = RGB8;

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Scale a color by an 8-bit intensity factor
///
/// Every channel is multiplied by `factor / 255` and truncated, so `255`
/// keeps the color and `0` turns it off.
#[inline]
pub const fn scale_color(color: Rgb, factor: u8) -> Rgb {
    Rgb {
        r: scale_channel(color.r, factor),
        g: scale_channel(color.g, factor),
        b: scale_channel(color.b, factor),
    }
}

#[allow(clippy::unreadable_literal)]
pub mod palette {
    use super::{Rgb, rgb_from_u32};

    pub const BLACK: Rgb = rgb_from_u32(0x000000);
    pub const GREEN: Rgb = rgb_from_u32(0x00FF00);
    pub const YELLOW: Rgb = rgb_from_u32(0xFFB400);
    pub const RED: Rgb = rgb_from_u32(0xFF0000);
    pub const BLUE: Rgb = rgb_from_u32(0x0000FF);
    pub const CYAN: Rgb = rgb_from_u32(0x00FFFF);
    pub const PURPLE: Rgb = rgb_from_u32(0xAA00FF);
    pub const WHITE: Rgb = rgb_from_u32(0xFFFFFF);
}
