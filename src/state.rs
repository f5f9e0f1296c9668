//! Shared effect state
//!
//! One [`EffectState`] exists per engine. It is owned by the renderer and
//! only mutated on the scheduling context.

use embassy_time::{Duration, Instant};

use crate::brightness::BrightnessRamp;
use crate::color::{Rgb, rgb_to_u32};
use crate::effect::EffectId;

pub const SPEED_MIN: u8 = 0;
pub const SPEED_MAX: u8 = 255;
pub const DEFAULT_SPEED: u8 = 150;

pub const BRIGHTNESS_MIN: u8 = 0;
pub const BRIGHTNESS_MAX: u8 = 255;

/// Default base color (0xFF5900, warm orange)
pub const DEFAULT_COLOR: Rgb = Rgb {
    r: 0xFF,
    g: 0x59,
    b: 0x00,
};

/// Delay before the first frame of a fresh engine
pub const INITIAL_FRAME_DELAY: Duration = Duration::from_millis(100);

/// Mutable state of one scheduling session
///
/// # Scratch slot
///
/// `scratch` is private working storage for the active effect and is reset
/// to the packed base color whenever the effect, speed or color changes.
/// Its meaning depends on the effect:
///
/// - `breath`: current breathing brightness (0-255)
/// - `color_wipe_random`, `random_color`, `chase_random`,
///   `chase_flash_random`, `color_sweep_random`, `running_random`: current
///   wheel position (low byte)
/// - `twinkle*`, `fireworks*`, `running_color`: packed 0xRRGGBB pixel color;
///   the `_random` variants overwrite it with a random wheel color per frame
/// - every other effect ignores it
#[derive(Debug, Clone)]
pub struct EffectState {
    pub(crate) effect: EffectId,
    pub(crate) speed: u8,
    pub(crate) color: Rgb,
    pub(crate) scratch: u32,
    pub(crate) call_counter: u32,
    pub(crate) step_counter: u32,
    pub(crate) last_frame: Option<Instant>,
    pub(crate) next_delay: Duration,
    pub(crate) brightness: BrightnessRamp,
    pub(crate) inverted: bool,
    pub(crate) led_count: usize,
    pub(crate) running: bool,
}

impl EffectState {
    pub fn new(led_count: usize, effect: EffectId, speed: u8, color: Rgb) -> Self {
        Self {
            effect,
            speed: speed.clamp(SPEED_MIN, SPEED_MAX),
            color,
            scratch: rgb_to_u32(color),
            call_counter: 0,
            step_counter: 0,
            last_frame: None,
            next_delay: INITIAL_FRAME_DELAY,
            brightness: BrightnessRamp::default(),
            inverted: false,
            led_count,
            running: false,
        }
    }

    /// Zero both counters and hand the scratch slot back to the base color
    pub(crate) fn reset_counters(&mut self) {
        self.call_counter = 0;
        self.step_counter = 0;
        self.scratch = rgb_to_u32(self.color);
    }

    /// True while rendering the first frame after (re)selection
    ///
    /// The call counter is bumped before each render, so the first frame
    /// observes a value of 1.
    pub const fn is_first_frame(&self) -> bool {
        self.call_counter <= 1
    }

    pub const fn effect(&self) -> EffectId {
        self.effect
    }

    pub const fn speed(&self) -> u8 {
        self.speed
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    pub const fn scratch(&self) -> u32 {
        self.scratch
    }

    pub const fn call_counter(&self) -> u32 {
        self.call_counter
    }

    pub const fn step_counter(&self) -> u32 {
        self.step_counter
    }

    pub const fn last_frame(&self) -> Option<Instant> {
        self.last_frame
    }

    pub const fn next_delay(&self) -> Duration {
        self.next_delay
    }

    pub const fn brightness(&self) -> &BrightnessRamp {
        &self.brightness
    }

    pub const fn inverted(&self) -> bool {
        self.inverted
    }

    pub const fn led_count(&self) -> usize {
        self.led_count
    }

    pub const fn running(&self) -> bool {
        self.running
    }

    /// Physical index of a logical pixel
    pub const fn physical_index(&self, index: usize) -> usize {
        if self.inverted {
            self.led_count - 1 - index
        } else {
            index
        }
    }
}
