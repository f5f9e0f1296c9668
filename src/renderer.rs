use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;
use rand::RngCore;

use crate::brightness::BrightnessRamp;
use crate::color::{Rgb, rgb_from_u32, scale_color};
use crate::control::{Command, ControlReceiver};
use crate::effect::{EffectId, FrameContext};
use crate::sink::PixelSink;
use crate::state::{DEFAULT_COLOR, DEFAULT_SPEED, EffectState, SPEED_MAX, SPEED_MIN};

/// Configuration for the effect engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Number of pixels to drive, clamped to the frame buffer capacity
    pub led_count: usize,
    pub effect: EffectId,
    pub speed: u8,
    pub color: Rgb,
    /// Target brightness; output starts dark and ramps up when enabled
    pub brightness: u8,
    pub ramp_enabled: bool,
    /// Address the strip from its far end
    pub inverted: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            led_count: 1,
            effect: EffectId::default(),
            speed: DEFAULT_SPEED,
            color: DEFAULT_COLOR,
            brightness: 0,
            ramp_enabled: false,
            inverted: false,
        }
    }
}

/// What a single [`Renderer::tick`] did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// An effect frame was rendered
    pub rendered: bool,
    /// The frame asked to be pushed to the strip
    pub shown: bool,
}

/// Effect engine - owns the effect state and renders frames
///
/// Control operations can be called directly or queued through the control
/// channel; queued ones are applied at the start of the next [`Self::tick`].
pub struct Renderer<'a, R: RngCore, const MAX_LEDS: usize, const CONTROL_CHANNEL_SIZE: usize> {
    controls: ControlReceiver<'a, CONTROL_CHANNEL_SIZE>,
    state: EffectState,
    frame_buffer: [Rgb; MAX_LEDS],
    rng: R,
}

impl<'a, R: RngCore, const MAX_LEDS: usize, const CONTROL_CHANNEL_SIZE: usize>
    Renderer<'a, R, MAX_LEDS, CONTROL_CHANNEL_SIZE>
{
    /// Create a stopped engine
    pub fn new(
        controls: ControlReceiver<'a, CONTROL_CHANNEL_SIZE>,
        rng: R,
        config: &EngineConfig,
    ) -> Self {
        const { assert!(MAX_LEDS > 0, "frame buffer needs at least one pixel") };

        let mut state = EffectState::new(
            clamp_led_count(config.led_count, MAX_LEDS),
            config.effect,
            config.speed,
            config.color,
        );
        state.brightness = BrightnessRamp::new(config.brightness, config.ramp_enabled);
        state.inverted = config.inverted;

        Self {
            controls,
            state,
            frame_buffer: [Rgb::default(); MAX_LEDS],
            rng,
        }
    }

    /// Resize the active strip and blank the frame
    ///
    /// The active effect restarts its cycle on the new geometry, and the
    /// next tick renders right away.
    pub fn init(&mut self, led_count: usize) {
        self.state.led_count = clamp_led_count(led_count, MAX_LEDS);
        self.state.reset_counters();
        self.state.last_frame = None;
        self.frame_buffer.fill(Rgb::default());
        #[cfg(feature = "esp32-log")]
        println!("[Renderer.init] led_count={}", self.state.led_count);
    }

    /// Resume rendering; the next tick draws the first frame of the effect
    pub fn start(&mut self) {
        self.state.call_counter = 0;
        self.state.step_counter = 0;
        self.state.last_frame = None;
        self.state.running = true;
        #[cfg(feature = "esp32-log")]
        println!("[Renderer.start] effect={}", self.state.effect.as_str());
    }

    pub fn stop(&mut self) {
        self.state.running = false;
        #[cfg(feature = "esp32-log")]
        println!("[Renderer.stop]");
    }

    pub fn select_effect(&mut self, effect: EffectId) {
        self.state.effect = effect;
        self.state.reset_counters();
        self.state.brightness.restore();
        #[cfg(feature = "esp32-log")]
        println!("[Renderer.select_effect] effect={}", effect.as_str());
    }

    /// Select by raw id; ids past the end pick the last effect
    pub fn select_effect_raw(&mut self, id: u8) {
        self.select_effect(EffectId::from_raw_clamped(id));
    }

    pub fn select_effect_from_angle(&mut self, degrees: f32) {
        self.select_effect(EffectId::from_angle(degrees));
    }

    pub fn set_speed(&mut self, speed: u8) {
        self.state.speed = speed.clamp(SPEED_MIN, SPEED_MAX);
        self.state.reset_counters();
        #[cfg(feature = "esp32-log")]
        println!("[Renderer.set_speed] speed={}", self.state.speed);
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.state.color = color;
        self.state.reset_counters();
    }

    pub fn set_color_packed(&mut self, color: u32) {
        self.set_color(rgb_from_u32(color));
    }

    /// Set the target brightness; reached through the ramp when enabled
    pub fn set_brightness(&mut self, brightness: u8) {
        self.state.brightness.set_level(brightness);
    }

    /// Apply a brightness immediately, bypassing the ramp
    pub fn force_brightness(&mut self, brightness: u8) {
        self.state.brightness.force(brightness);
    }

    pub fn set_inverted(&mut self, inverted: bool) {
        self.state.inverted = inverted;
    }

    pub fn set_ramp_enabled(&mut self, enabled: bool) {
        self.state.brightness.set_ramp_enabled(enabled);
    }

    /// Apply a single control command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SelectEffect(effect) => self.select_effect(effect),
            Command::SelectEffectRaw(id) => self.select_effect_raw(id),
            Command::SelectEffectFromAngle(degrees) => self.select_effect_from_angle(degrees),
            Command::SetSpeed(speed) => self.set_speed(speed),
            Command::SetColor(color) => self.set_color(color),
            Command::SetColorPacked(color) => self.set_color_packed(color),
            Command::SetBrightness(brightness) => self.set_brightness(brightness),
            Command::ForceBrightness(brightness) => self.force_brightness(brightness),
            Command::SetInverted(inverted) => self.set_inverted(inverted),
            Command::SetRampEnabled(enabled) => self.set_ramp_enabled(enabled),
            Command::Start => self.start(),
            Command::Stop => self.stop(),
        }
    }

    /// Process pending commands from the channel (non-blocking)
    fn process_commands(&mut self) {
        while let Ok(command) = self.controls.try_receive() {
            self.apply(command);
        }
    }

    /// Advance the engine by one scheduler tick
    ///
    /// Applies queued commands, steps the brightness ramp and renders a frame
    /// once the effect's requested delay has passed.
    pub fn tick(&mut self, now: Instant) -> FrameOutcome {
        self.process_commands();

        if !self.state.running {
            return FrameOutcome::default();
        }

        self.state.brightness.update();

        if let Some(last_frame) = self.state.last_frame {
            let elapsed = now.as_millis().saturating_sub(last_frame.as_millis());
            if elapsed <= self.state.next_delay.as_millis() {
                return FrameOutcome::default();
            }
        }

        self.state.call_counter = self.state.call_counter.wrapping_add(1);
        self.state.last_frame = Some(now);

        let effect = self.state.effect;
        let led_count = self.state.led_count;
        let mut fx = FrameContext::new(
            &mut self.state,
            &mut self.frame_buffer[..led_count],
            &mut self.rng,
        );
        let next_delay = effect.render(&mut fx);
        let shown = fx.show_requested();
        self.state.next_delay = next_delay;

        FrameOutcome {
            rendered: true,
            shown,
        }
    }

    /// Write the frame to the sink and push it
    ///
    /// Pixels are written in physical order and scaled by the current
    /// brightness. The stored frame itself stays unscaled.
    pub fn flush<S: PixelSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        let brightness = self.state.brightness.current();
        for (index, color) in self.frame().iter().enumerate() {
            sink.set_pixel(
                self.state.physical_index(index),
                scale_color(*color, brightness),
            )?;
        }
        sink.show()
    }

    /// Logical frame of the active strip, before brightness scaling
    pub fn frame(&self) -> &[Rgb] {
        &self.frame_buffer[..self.state.led_count]
    }

    pub const fn state(&self) -> &EffectState {
        &self.state
    }

    pub const fn is_running(&self) -> bool {
        self.state.running
    }

    pub const fn effect(&self) -> EffectId {
        self.state.effect
    }

    pub const fn effect_count(&self) -> usize {
        EffectId::COUNT
    }

    pub const fn speed(&self) -> u8 {
        self.state.speed
    }

    pub const fn color(&self) -> Rgb {
        self.state.color
    }

    /// Target brightness requested by the caller
    pub const fn brightness(&self) -> u8 {
        self.state.brightness.level()
    }

    /// Brightness applied to pixels right now
    pub const fn current_brightness(&self) -> u8 {
        self.state.brightness.current()
    }

    pub const fn inverted(&self) -> bool {
        self.state.inverted
    }

    pub const fn ramp_enabled(&self) -> bool {
        self.state.brightness.ramp_enabled()
    }

    pub const fn led_count(&self) -> usize {
        self.state.led_count
    }

    /// Delay the active effect asked for after its last frame
    pub const fn next_delay(&self) -> Duration {
        self.state.next_delay
    }
}

/// Clamp into `1..=capacity`
fn clamp_led_count(led_count: usize, capacity: usize) -> usize {
    led_count.clamp(1, capacity.max(1))
}
