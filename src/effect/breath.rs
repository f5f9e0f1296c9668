//! Breathing and fading effects
//!
//! Both keep the strip at the base color and modulate the output
//! brightness instead, relative to the brightness set by the caller.

use embassy_time::Duration;
use rand::RngCore;

use super::FrameContext;
use crate::math8::map_range;

/// Per-step frame delays of the breathing curve, in milliseconds
const BREATH_DELAY_STEPS: [u16; 17] = [
    7, 9, 13, 15, 16, 17, 18, 930, 19, 18, 15, 13, 9, 7, 4, 5, 10,
];

/// Brightness reached at the end of each breathing step
const BREATH_BRIGHTNESS_STEPS: [u8; 17] = [
    150, 125, 100, 75, 50, 25, 16, 15, 16, 25, 50, 75, 100, 125, 150, 220, 255,
];

/// Steps below this index breathe out, the rest breathe in
const BREATH_EXHALE_STEPS: u32 = 8;

/// Fade never drops below this brightness
const FADE_FLOOR: u8 = 25;

/// "Standby breathing" of well known devices, fixed speed
///
/// The scratch slot holds the breathing brightness. It moves one unit per
/// frame toward the current step's target; the frame delay of each step
/// shapes the curve.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn breath<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    if fx.state.is_first_frame() {
        fx.state.scratch = u32::from(BREATH_BRIGHTNESS_STEPS[0]) + 1;
    }

    let mut level = fx.state.scratch as u8;
    let step = fx.state.step_counter as usize % BREATH_BRIGHTNESS_STEPS.len();

    if (step as u32) < BREATH_EXHALE_STEPS {
        level = level.saturating_sub(1);
    } else {
        level = level.saturating_add(1);
    }

    let mut step = step;
    if level == BREATH_BRIGHTNESS_STEPS[step] {
        step = (step + 1) % BREATH_BRIGHTNESS_STEPS.len();
    }
    fx.state.step_counter = step as u32;

    let color = fx.state.color;
    fx.fill(color);
    let ceiling = i32::from(fx.state.brightness.level());
    let output = map_range(i32::from(level), 0, 255, 0, ceiling).clamp(0, 255) as u8;
    fx.state.brightness.modulate(output);
    fx.show();

    fx.state.scratch = u32::from(level);
    Duration::from_millis(u64::from(BREATH_DELAY_STEPS[step]))
}

/// Fades the strip on and (almost) off again
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
pub(super) fn fade<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let color = fx.state.color;
    fx.fill(color);

    let distance = (fx.state.step_counter as i32 - 127).abs();
    let curve = 255 - distance * 2;
    let ceiling = fx.state.brightness.level();
    let floor = FADE_FLOOR.min(ceiling);
    let output =
        map_range(curve, 0, 255, i32::from(floor), i32::from(ceiling)).clamp(0, 255) as u8;
    fx.state.brightness.modulate(output);
    fx.show();

    fx.state.step_counter = (fx.state.step_counter + 1) % 256;
    fx.speed_delay(5, 15)
}
