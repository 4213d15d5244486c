//! 8-bit integer helpers for intensity math
//!
//! Everything here is integer-only so the animations stay cheap on
//! microcontrollers without an FPU.

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// FastLED-style scaling, the same curve WS2812 drivers use for global
/// brightness: `255` leaves the value unchanged and `0` blanks it.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Multiply a channel by `factor / 255`, truncating
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale_channel(value: u8, factor: u8) -> u8 {
    (value as u16 * factor as u16 / 255) as u8
}

/// Triangle wave over `period` steps
///
/// Rises linearly from 0 to 255 over the first half of the period and falls
/// back over the second half. Periods shorter than two steps have no ramp,
/// so they always return full amplitude.
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn triangle_wave8(step: u16, period: u16) -> u8 {
    if period < 2 {
        return 255;
    }

    let p = step % period;
    let half = period / 2;
    if p <= half {
        (p as u32 * 255 / half as u32) as u8
    } else {
        ((period - p) as u32 * 255 / half as u32) as u8
    }
}

/// Linear fade of `base` by the fraction `remaining / total`
///
/// Returns 0 for an empty `total` and never exceeds `base`.
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn fade8(base: u8, remaining: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    if remaining >= total {
        return base;
    }

    (base as u64 * remaining / total) as u8
}
