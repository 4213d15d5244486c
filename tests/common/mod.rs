//! Shared test infrastructure for status-ring integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use status_ring::{Instant, OutputDriver, PIXEL_COUNT, Rgb, RingSink};

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

pub fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

/// Snapshot of the buffer taken on every flush
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flushed {
    pub pixels: [Rgb; PIXEL_COUNT],
    pub brightness: u8,
}

/// Sink that records every call the controller makes
#[derive(Debug)]
pub struct RecordingSink {
    pub pixels: [Rgb; PIXEL_COUNT],
    pub brightness: u8,
    pub flushes: Vec<Flushed>,
    pub brightness_history: Vec<u8>,
    pub clears: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            pixels: [BLACK; PIXEL_COUNT],
            brightness: 255,
            flushes: Vec::new(),
            brightness_history: Vec::new(),
            clears: 0,
        }
    }

    pub fn flush_count(&self) -> usize {
        self.flushes.len()
    }

    pub fn last_flush(&self) -> Option<&Flushed> {
        self.flushes.last()
    }

    pub fn is_dark(&self) -> bool {
        self.pixels.iter().all(|pixel| *pixel == BLACK)
    }
}

impl RingSink for RecordingSink {
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        self.pixels[index % PIXEL_COUNT] = color;
    }

    fn clear_all(&mut self) {
        self.pixels = [BLACK; PIXEL_COUNT];
        self.clears += 1;
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
        self.brightness_history.push(brightness);
    }

    fn flush(&mut self) {
        self.flushes.push(Flushed {
            pixels: self.pixels,
            brightness: self.brightness,
        });
    }
}

/// Output driver that keeps every frame it was given
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub frames: Vec<Vec<Rgb>>,
}

impl OutputDriver for RecordingDriver {
    fn write(&mut self, colors: &[Rgb]) {
        self.frames.push(colors.to_vec());
    }
}
