//! Ring output sink
//!
//! The animations never talk to hardware directly. They draw through
//! [`RingSink`], which buffers pixels until [`RingSink::flush`] pushes a whole
//! frame out.

#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::SmartLedsWrite;

use crate::OutputDriver;
use crate::color::Rgb;
use crate::math8::scale8;

/// Number of pixels on the ring
///
/// Pixel 0 is the top-right LED, indices grow clockwise.
pub const PIXEL_COUNT: usize = 8;

/// Drawing surface owned by the mode controller
///
/// Implementations must not fail: hardware errors are handled (or dropped)
/// inside the sink.
pub trait RingSink {
    /// Set a pixel in the buffer
    ///
    /// The index wraps around the ring, so chase animations can pass
    /// `head + offset` without wrapping it themselves.
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Turn every pixel in the buffer off
    fn clear_all(&mut self);

    /// Set global brightness applied on the next flush
    fn set_brightness(&mut self, brightness: u8);

    /// Push the buffered frame to the strip
    fn flush(&mut self);

    /// Set every pixel to the same color
    fn fill(&mut self, color: Rgb) {
        for i in 0..PIXEL_COUNT {
            self.set_pixel(i, color);
        }
    }
}

/// Pixel buffer in front of an [`OutputDriver`]
///
/// Brightness is applied when the frame is flushed, so the buffer always
/// keeps the full-intensity colors.
#[derive(Debug)]
pub struct BufferedRing<O: OutputDriver> {
    output: O,
    pixels: [Rgb; PIXEL_COUNT],
    brightness: u8,
}

impl<O: OutputDriver> BufferedRing<O> {
    /// Create a blank ring at full brightness
    pub const fn new(output: O) -> Self {
        Self {
            output,
            pixels: [Rgb { r: 0, g: 0, b: 0 }; PIXEL_COUNT],
            brightness: 255,
        }
    }

    /// Buffered (unscaled) pixels
    pub const fn pixels(&self) -> &[Rgb; PIXEL_COUNT] {
        &self.pixels
    }

    /// Brightness that will be applied on the next flush
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Get a reference to the output driver.
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the output driver.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Release the output driver
    pub fn into_output(self) -> O {
        self.output
    }

    /// Scale the buffer by the current brightness
    fn scaled_frame(&self) -> [Rgb; PIXEL_COUNT] {
        let mut frame = self.pixels;
        match self.brightness {
            255 => {}
            0 => frame = [Rgb::default(); PIXEL_COUNT],
            brightness => {
                for pixel in &mut frame {
                    pixel.r = scale8(pixel.r, brightness);
                    pixel.g = scale8(pixel.g, brightness);
                    pixel.b = scale8(pixel.b, brightness);
                }
            }
        }
        frame
    }
}

impl<O: OutputDriver> RingSink for BufferedRing<O> {
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        self.pixels[index % PIXEL_COUNT] = color;
    }

    fn clear_all(&mut self) {
        self.pixels = [Rgb::default(); PIXEL_COUNT];
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn flush(&mut self) {
        let frame = self.scaled_frame();
        self.output.write(&frame);
    }
}

/// [`OutputDriver`] for any `smart-leds` writer (WS2812 over SPI, RMT, PIO...)
///
/// Write errors are dropped: a missed frame is replaced by the next one.
pub struct SmartLedsDriver<W> {
    writer: W,
}

impl<W> SmartLedsDriver<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Release the wrapped writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsDriver<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn write(&mut self, colors: &[Rgb]) {
        if self.writer.write(colors.iter().copied()).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsDriver.write] dropped frame of {} pixels", colors.len());
        }
    }
}
