//! Desktop preview app for the status ring
//!
//! Renders the 8-pixel ring in a window, driven by synthetic time. Mode
//! changes go through the same request queue the firmware uses.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use status_ring::{
    BufferedRing, Instant, Mode, ModeController, OutputDriver, PIXEL_COUNT, PowerState,
    RemoteButton, RemoteEvents, RequestChannel, RequestSender, Rgb, RingConfig,
};

/// Request channel size
const REQUEST_CHANNEL_SIZE: usize = 8;

/// Static request channel between the UI and the controller
static REQUESTS: RequestChannel<REQUEST_CHANNEL_SIZE> =
    RequestChannel::<REQUEST_CHANNEL_SIZE>::new();

/// Radius of the drawn ring, in points
const RING_RADIUS: f32 = 110.0;

/// Radius of each drawn LED
const LED_RADIUS: f32 = 18.0;

/// Output driver that keeps the last flushed frame for painting
#[derive(Debug, Default)]
struct FrameCapture {
    frame: [Rgb; PIXEL_COUNT],
    writes: u64,
}

impl OutputDriver for FrameCapture {
    fn write(&mut self, colors: &[Rgb]) {
        for (slot, color) in self.frame.iter_mut().zip(colors) {
            *slot = *color;
        }
        self.writes += 1;
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 560.0])
            .with_title("Status Ring Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "status-ring-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    controller: ModeController<BufferedRing<FrameCapture>>,
    requests: RequestSender<'static, REQUEST_CHANNEL_SIZE>,

    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Base brightness applied when the mode is next (re)started
    brightness: u8,
}

impl PreviewApp {
    fn new() -> Self {
        let config = RingConfig::DEFAULT;
        Self {
            controller: ModeController::new(BufferedRing::new(FrameCapture::default()), &config),
            requests: REQUESTS.sender(),
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            brightness: config.brightness,
        }
    }

    fn send_mode(&self, mode: Mode, force_restart: bool) {
        let request = if force_restart {
            status_ring::ModeRequest::restart(mode)
        } else {
            mode.into()
        };
        let _ = self.requests.try_send(request);
    }

    /// Rebuild the controller with a new base brightness, keeping the mode
    fn apply_brightness(&mut self) {
        let mode = self.controller.current_mode();
        let config = RingConfig {
            brightness: self.brightness,
            ..*self.controller.config()
        };
        self.controller =
            ModeController::new(BufferedRing::new(FrameCapture::default()), &config);
        self.controller.set_mode(mode, true);
    }

    fn reset_time(&mut self) {
        self.t_ms = 0;
        self.last_frame = StdInstant::now();
        let mode = self.controller.current_mode();
        self.send_mode(mode, true);
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = if delta_ms.is_finite() {
                delta_ms.max(0.0) as u64
            } else {
                0
            };
            self.t_ms = self.t_ms.saturating_add(delta_ms);
        }
    }

    /// Step the controller one millisecond at a time up to `t_ms`
    ///
    /// Animations gate their steps on exact instants, so skipping ahead in
    /// large jumps would drop frames the hardware loop would have drawn.
    fn advance(&mut self, from_ms: u64) {
        self.controller.apply_pending(&REQUESTS.receiver());
        for ms in from_ms..=self.t_ms {
            self.controller.tick(Instant::from_millis(ms));
        }
    }

    fn playback_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("⏮ Reset").clicked() {
                self.reset_time();
            }
            if ui
                .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                .clicked()
            {
                self.playing = !self.playing;
            }

            ui.add_space(8.0);
            let secs = self.t_ms / 1000;
            let ms = self.t_ms % 1000;
            ui.label(format!("Time: {secs}.{ms:03}s"));
        });

        ui.horizontal(|ui| {
            ui.label("Speed:");
            ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
        });

        ui.horizontal(|ui| {
            ui.label("Brightness:");
            let old_brightness = self.brightness;
            ui.add(egui::DragValue::new(&mut self.brightness).range(1u8..=255u8));
            if self.brightness != old_brightness {
                self.apply_brightness();
            }
        });
    }

    fn mode_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Mode:");
            let current = self.controller.current_mode();
            let mut selected = current;
            egui::ComboBox::from_id_salt("mode_selector")
                .selected_text(current.as_str())
                .show_ui(ui, |ui| {
                    for mode in Mode::ALL {
                        ui.selectable_value(&mut selected, mode, mode.as_str());
                    }
                });
            if selected != current {
                self.send_mode(selected, false);
            }
        });

        ui.horizontal(|ui| {
            ui.label("Remote:");
            let mut events = RemoteEvents::NONE;
            for (button, label) in [
                (RemoteButton::SolidUp, "Solid ▲"),
                (RemoteButton::SolidDown, "Solid ▼"),
                (RemoteButton::AnimatedUp, "Animated ▲"),
                (RemoteButton::AnimatedDown, "Animated ▼"),
            ] {
                if ui.button(label).clicked() {
                    events = events.with(button);
                }
            }
            if !events.is_empty() {
                self.controller.handle_remote(events);
            }
        });
    }

    fn status_readout(&self, ui: &mut egui::Ui) {
        let animation = self.controller.animation();
        let power = match self.controller.power_state() {
            PowerState::Active => "active",
            PowerState::FadingOut => "fading out",
            PowerState::Sleeping => "sleeping",
        };
        ui.label(format!(
            "Mode: {}   Phase: {}   Step: {}",
            self.controller.current_mode().as_str(),
            animation.phase(),
            animation.step(),
        ));
        ui.label(format!(
            "Power: {power}   Cycles: {}   Brightness: {}   Frames: {}",
            self.controller.cycles_completed(),
            self.controller.sink().brightness(),
            self.controller.sink().output().writes,
        ));
    }

    fn paint_ring(&self, ui: &mut egui::Ui) {
        let size = 2.0 * (RING_RADIUS + LED_RADIUS) + 8.0;
        let (response, painter) =
            ui.allocate_painter(egui::vec2(ui.available_width(), size), egui::Sense::hover());
        let center = response.rect.center();

        painter.circle_filled(center, RING_RADIUS + LED_RADIUS + 4.0, egui::Color32::from_gray(24));

        // Pixel 0 sits just right of twelve o'clock, indices run clockwise
        let pitch = std::f32::consts::TAU / PIXEL_COUNT as f32;
        let start = -std::f32::consts::FRAC_PI_2 + pitch / 2.0;
        let frame = &self.controller.sink().output().frame;

        #[allow(clippy::cast_precision_loss)]
        for (i, pixel) in frame.iter().enumerate() {
            let angle = start + pitch * i as f32;
            let pos = center + RING_RADIUS * egui::vec2(angle.cos(), angle.sin());
            let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
            painter.circle_filled(pos, LED_RADIUS, color);
            painter.circle_stroke(
                pos,
                LED_RADIUS,
                egui::Stroke::new(1.0, egui::Color32::from_gray(60)),
            );
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let from_ms = self.t_ms;
        self.update_time();
        self.advance(from_ms);

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.playback_controls(ui);
            ui.add_space(8.0);
            self.mode_controls(ui);
            ui.add_space(8.0);
            self.status_readout(ui);
            ui.add_space(16.0);
            self.paint_ring(ui);
        });
    }
}
