//! Desktop preview app for myrtio-fx-engine effects
//!
//! Renders the strip in a window with interactive controls. The engine runs
//! on a synthetic clock and every control change goes through the control
//! channel, the same way a firmware control task would drive it.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use myrtio_fx_engine::{
    BufferSink, ControlChannel, ControlSender, DEFAULT_SPEED, EffectId, EngineConfig,
    FrameScheduler, Instant, Renderer, Rgb, SPEED_MAX,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Maximum number of LEDs the engine supports
const MAX_LEDS: usize = 180;

/// Default number of LEDs in the simulated strip
const DEFAULT_LED_COUNT: usize = 60;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Control channel size
const CONTROL_CHANNEL_SIZE: usize = 16;

/// Static control channel for communication between UI and engine
static CONTROLS: ControlChannel<CONTROL_CHANNEL_SIZE> = ControlChannel::new();

type Scheduler = FrameScheduler<
    'static,
    BufferSink<MAX_LEDS>,
    StdRng,
    MAX_LEDS,
    CONTROL_CHANNEL_SIZE,
>;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("FX Engine Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "myrtio-fx-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// Engine bound to an in-memory strip
    scheduler: Scheduler,
    /// Control sender for UI changes
    controls: ControlSender<'static, CONTROL_CHANNEL_SIZE>,

    // UI state (tracked to detect changes and send commands)
    /// Currently selected effect
    effect_id: EffectId,
    /// Rotary-style selector position in degrees
    angle: f32,
    speed: u8,
    color: [u8; 3],
    brightness: u8,
    ramp_enabled: bool,
    inverted: bool,
    running: bool,
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Synthetic time of the next scheduler tick
    next_tick_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether the clock is advancing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// LED pixel size for display
    led_size: f32,
    /// Number of LEDs to display
    led_count: usize,
}

impl PreviewApp {
    fn new() -> Self {
        let mut app = Self {
            scheduler: build_scheduler(&EngineConfig::default()),
            controls: CONTROLS.sender(),
            effect_id: EffectId::RainbowCycle,
            angle: 0.0,
            speed: DEFAULT_SPEED,
            color: [255, 89, 0],
            brightness: 255,
            ramp_enabled: true,
            inverted: false,
            running: true,
            t_ms: 0,
            next_tick_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            led_size: LED_SIZE,
            led_count: DEFAULT_LED_COUNT,
        };
        app.reset_time();
        app
    }

    fn config(&self) -> EngineConfig {
        EngineConfig {
            led_count: self.led_count,
            effect: self.effect_id,
            speed: self.speed,
            color: Rgb {
                r: self.color[0],
                g: self.color[1],
                b: self.color[2],
            },
            brightness: self.brightness,
            ramp_enabled: self.ramp_enabled,
            inverted: self.inverted,
        }
    }

    /// Restart the engine from the current UI state at time zero
    fn reset_time(&mut self) {
        self.scheduler = build_scheduler(&self.config());
        self.running = true;
        self.t_ms = 0;
        self.next_tick_ms = 0;
        self.last_frame = StdInstant::now();
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    /// Run every scheduler tick that fell due on the synthetic clock
    fn run_ticks(&mut self) {
        while self.next_tick_ms <= self.t_ms {
            let Ok(result) = self.scheduler.tick(Instant::from_millis(self.next_tick_ms));
            self.next_tick_ms = result.next_deadline.as_millis();
        }
    }

    /// Resize the simulated strip in place
    fn resize(&mut self, led_count: usize) {
        self.scheduler.renderer_mut().init(led_count);
        let Ok(()) = myrtio_fx_engine::PixelSink::clear(self.scheduler.sink_mut());
    }

    fn controls_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Effect:");
            let mut selected_effect = self.effect_id;
            egui::ComboBox::from_id_salt("effect_selector")
                .selected_text(self.effect_id.as_str())
                .height(400.0)
                .show_ui(ui, |ui| {
                    for effect in EffectId::ALL {
                        ui.selectable_value(&mut selected_effect, effect, effect.as_str());
                    }
                });
            if selected_effect != self.effect_id {
                self.effect_id = selected_effect;
                let _ = self.controls.select_effect(selected_effect);
            }

            ui.add_space(8.0);

            ui.label("Dial:");
            let old_angle = self.angle;
            ui.add(egui::Slider::new(&mut self.angle, 0.0..=360.0).suffix("°"));
            if (self.angle - old_angle).abs() > f32::EPSILON {
                let effect = EffectId::from_angle(self.angle);
                if effect != self.effect_id {
                    self.effect_id = effect;
                    let _ = self.controls.select_effect_from_angle(self.angle);
                }
            }
        });

        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Speed:");
            let old_speed = self.speed;
            ui.add(egui::Slider::new(&mut self.speed, 0..=SPEED_MAX));
            if self.speed != old_speed {
                let _ = self.controls.set_speed(self.speed);
            }

            ui.add_space(8.0);

            ui.label("Color:");
            let old_color = self.color;
            if ui.color_edit_button_srgb(&mut self.color).changed() && old_color != self.color {
                let _ = self.controls.set_color(Rgb {
                    r: self.color[0],
                    g: self.color[1],
                    b: self.color[2],
                });
            }
        });

        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Brightness:");
            let old_brightness = self.brightness;
            ui.add(egui::Slider::new(&mut self.brightness, 0..=255));
            if self.brightness != old_brightness {
                let _ = self.controls.set_brightness(self.brightness);
            }
            if ui.button("Force").clicked() {
                let _ = self.controls.force_brightness(self.brightness);
            }

            ui.add_space(8.0);

            if ui.checkbox(&mut self.ramp_enabled, "Ramp").changed() {
                let _ = self.controls.set_ramp_enabled(self.ramp_enabled);
            }
            if ui.checkbox(&mut self.inverted, "Inverted").changed() {
                let _ = self.controls.set_inverted(self.inverted);
            }

            ui.add_space(8.0);

            if ui
                .button(if self.running { "■ Stop" } else { "● Start" })
                .clicked()
            {
                self.running = !self.running;
                let _ = if self.running {
                    self.controls.start()
                } else {
                    self.controls.stop()
                };
            }
        });
    }

    fn playback_ui(&mut self, ui: &mut egui::Ui) {
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

            ui.add_space(8.0);

            ui.label("Time scale:");
            ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
        });

        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Size:");
            ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));

            ui.add_space(8.0);

            ui.label("LEDs:");
            let old_led_count = self.led_count;
            ui.add(egui::Slider::new(&mut self.led_count, 1usize..=MAX_LEDS));
            if self.led_count != old_led_count {
                self.resize(self.led_count);
            }
        });
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.run_ticks();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.playback_ui(ui);
            ui.add_space(16.0);
            self.controls_ui(ui);
            ui.add_space(16.0);

            let renderer = self.scheduler.renderer();
            ui.label(format!(
                "{} ({}/{}) · frame {} · brightness {}",
                renderer.effect().as_str(),
                renderer.effect().as_raw(),
                renderer.effect_count() - 1,
                renderer.state().call_counter(),
                renderer.current_brightness(),
            ));

            ui.add_space(8.0);

            // === LED Display ===
            let led_count = renderer.led_count();
            let strip = &self.scheduler.sink().shown()[..led_count];
            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = led_count.div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) =
                ui.allocate_painter(egui::vec2(available_width, height), egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in strip.iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(self.led_size, self.led_size),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 3.0, color);
            }
        });
    }
}

fn build_scheduler(config: &EngineConfig) -> Scheduler {
    let renderer = Renderer::new(CONTROLS.receiver(), StdRng::from_entropy(), config);
    let Ok(scheduler) = FrameScheduler::init(renderer, BufferSink::new());
    scheduler
}
