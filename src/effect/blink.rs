//! Blink and strobe effects
//!
//! All of these alternate the whole strip between lit and dark on the call
//! counter; the strobes hold the lit phase for a fixed short flash.

use embassy_time::Duration;
use rand::RngCore;

use super::{BLACK, FrameContext};
use crate::color::{Rgb, color_wheel};

const FLASH: Duration = Duration::from_millis(20);
const MULTI_STROBE_GAP: Duration = Duration::from_millis(50);

/// Normal blinking, 50% on/off time
pub(super) fn blink<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let color = fx.state.color;
    blink_with(fx, color)
}

/// Blinking, cycling through the wheel on every lit frame
#[allow(clippy::cast_possible_truncation)]
pub(super) fn blink_rainbow<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let color = color_wheel((fx.state.call_counter % 256) as u8);
    blink_with(fx, color)
}

fn blink_with<R: RngCore>(fx: &mut FrameContext<'_, R>, color: Rgb) -> Duration {
    if fx.state.call_counter % 2 == 1 {
        fx.fill(color);
        fx.show();
    } else {
        fx.strip_off();
    }
    fx.speed_delay(100, 1986)
}

/// Classic strobe: short flash, long pause
pub(super) fn strobe<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let color = fx.state.color;
    strobe_with(fx, color)
}

/// Strobe cycling through the wheel
#[allow(clippy::cast_possible_truncation)]
pub(super) fn strobe_rainbow<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let color = color_wheel((fx.state.call_counter % 256) as u8);
    strobe_with(fx, color)
}

fn strobe_with<R: RngCore>(fx: &mut FrameContext<'_, R>, color: Rgb) -> Duration {
    let delay = if fx.state.call_counter % 2 == 0 {
        fx.fill(color);
        FLASH
    } else {
        fx.fill(BLACK);
        fx.speed_delay(50, 1986)
    };
    fx.show();
    delay
}

/// Burst of flashes followed by a pause
///
/// The burst grows by one flash per 10 speed units, the pause shrinks with
/// the last digit of the speed.
pub(super) fn multi_strobe<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let speed = u32::from(fx.state.speed);
    let flashes = 2 * ((speed / 10) + 1);
    let step = fx.state.step_counter;

    fx.fill(BLACK);
    let delay = if step < flashes {
        if step % 2 == 0 {
            let color = fx.state.color;
            fx.fill(color);
            FLASH
        } else {
            MULTI_STROBE_GAP
        }
    } else {
        Duration::from_millis(100 + u64::from(9 - (speed % 10)) * 125)
    };

    fx.show();
    fx.state.step_counter = (step + 1) % (flashes + 1);
    delay
}
