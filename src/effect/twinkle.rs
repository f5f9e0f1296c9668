//! Twinkle effects
//!
//! Plain twinkle lights a random batch of LEDs one per frame, then clears
//! the strip and starts a new batch; the step counter counts the LEDs left
//! in the batch. Fading twinkle halves the strip every frame instead.
//! The `_random` variants repaint the scratch color before each frame.

use embassy_time::Duration;
use rand::RngCore;

use super::FrameContext;
use crate::color::{rgb_from_u32, rgb_to_u32};

/// Blink several LEDs on, reset, repeat
pub(super) fn twinkle<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    if fx.state.step_counter == 0 {
        fx.strip_off();
        let len = fx.len_u32();
        let min_leds = (len / 5).max(1);
        let max_leds = (len / 2).max(1);
        fx.state.step_counter = fx.random(min_leds, max_leds);
    }

    let index = fx.random_index();
    let color = rgb_from_u32(fx.state.scratch);
    fx.set(index, color);
    fx.show();

    fx.state.step_counter = fx.state.step_counter.saturating_sub(1);
    fx.speed_delay(50, 1986)
}

/// Twinkle in random colors
pub(super) fn twinkle_random<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let color = fx.random_wheel_color();
    fx.state.scratch = rgb_to_u32(color);
    twinkle(fx)
}

/// Blink several LEDs on, fading out
pub(super) fn twinkle_fade<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    fx.fade_all();

    if fx.random(0, 3) == 0 {
        let index = fx.random_index();
        let color = rgb_from_u32(fx.state.scratch);
        fx.set(index, color);
    }
    fx.show();

    fx.speed_delay(100, 100)
}

/// Fading twinkle in random colors
pub(super) fn twinkle_fade_random<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let color = fx.random_wheel_color();
    fx.state.scratch = rgb_to_u32(color);
    twinkle_fade(fx)
}
