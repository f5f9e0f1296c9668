//! Rainbow cycling effects
//!
//! Both walk the color wheel one position per frame; the step counter is
//! the wheel offset and wraps at 256.

use embassy_time::Duration;
use rand::RngCore;

use super::FrameContext;
use crate::color::color_wheel;

const WHEEL_SIZE: u32 = 256;

/// Cycles all LEDs at once through the rainbow
#[allow(clippy::cast_possible_truncation)]
pub(super) fn rainbow<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let color = color_wheel(fx.state.step_counter as u8);
    fx.fill(color);
    fx.show();

    fx.state.step_counter = (fx.state.step_counter + 1) % WHEEL_SIZE;
    fx.speed_delay(1, 100)
}

/// Spreads one full rainbow over the strip and rotates it
#[allow(clippy::cast_possible_truncation)]
pub(super) fn rainbow_cycle<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let len = fx.len_u32();
    let offset = fx.state.step_counter;
    for i in 0..len {
        let pos = (i * WHEEL_SIZE / len + offset) % WHEEL_SIZE;
        fx.set(i as usize, color_wheel(pos as u8));
    }
    fx.show();

    fx.state.step_counter = (offset + 1) % WHEEL_SIZE;
    fx.speed_delay(1, 50)
}
