//! Chase effects
//!
//! A pair of adjacent pixels runs along a background; the step counter is
//! the position of the pair's first pixel and wraps at the strip length.

use embassy_time::Duration;
use rand::RngCore;

use super::{BLACK, FrameContext, WHITE};
use crate::color::{Rgb, color_wheel};

const FLASH_COUNT: u32 = 4;
const FLASH_ON: Duration = Duration::from_millis(20);
const FLASH_OFF: Duration = Duration::from_millis(30);

/// Base color running on white
pub(super) fn chase_white<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let color = fx.state.color;
    fx.fill(WHITE);
    paint_pair(fx, color);
    fx.show();
    advance(fx)
}

/// White running on the base color
pub(super) fn chase_color<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let color = fx.state.color;
    fx.fill(color);
    paint_pair(fx, WHITE);
    fx.show();
    advance(fx)
}

/// White running, followed by a random color
pub(super) fn chase_random<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let step = fx.state.step_counter as usize;
    if step == 0 {
        let last = fx.len() - 1;
        let previous = fx.scratch_wheel_color();
        fx.set(last, previous);
        fx.next_wheel_index();
    }

    let color = fx.scratch_wheel_color();
    for i in 0..step {
        fx.set(i, color);
    }
    paint_pair(fx, WHITE);
    fx.show();
    advance(fx)
}

/// White running on a rainbow
pub(super) fn chase_rainbow<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    fill_rainbow(fx);
    paint_pair(fx, WHITE);
    fx.show();
    advance(fx)
}

/// Rainbow running on white
pub(super) fn chase_rainbow_white<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    fx.fill(WHITE);
    let (first, second) = pair(fx);
    let first_color = rainbow_at(fx, first);
    let second_color = rainbow_at(fx, second);
    fx.set(first, first_color);
    fx.set(second, second_color);
    fx.show();
    advance(fx)
}

/// Black running on the base color
pub(super) fn chase_blackout<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let color = fx.state.color;
    fx.fill(color);
    paint_pair(fx, BLACK);
    fx.show();
    advance(fx)
}

/// Black running on a rainbow
pub(super) fn chase_blackout_rainbow<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    fill_rainbow(fx);
    paint_pair(fx, BLACK);
    fx.show();
    advance(fx)
}

/// White flashes running on the base color
///
/// The pair flashes [`FLASH_COUNT`] times in place before moving one pixel.
pub(super) fn chase_flash<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let flash_step = fx.state.call_counter % (FLASH_COUNT * 2 + 1);
    let color = fx.state.color;
    fx.fill(color);

    let delay = if flash_step < FLASH_COUNT * 2 {
        if flash_step % 2 == 0 {
            paint_pair(fx, WHITE);
            FLASH_ON
        } else {
            FLASH_OFF
        }
    } else {
        advance(fx)
    };

    fx.show();
    delay
}

/// White flashes running, leaving a random color behind
pub(super) fn chase_flash_random<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let flash_step = fx.state.call_counter % (FLASH_COUNT * 2 + 1);
    let color = fx.scratch_wheel_color();
    for i in 0..fx.state.step_counter as usize {
        fx.set(i, color);
    }

    let delay = if flash_step < FLASH_COUNT * 2 {
        let (first, second) = pair(fx);
        if flash_step % 2 == 0 {
            fx.set(first, WHITE);
            fx.set(second, WHITE);
            FLASH_ON
        } else {
            fx.set(first, color);
            fx.set(second, BLACK);
            FLASH_OFF
        }
    } else {
        fx.state.step_counter = (fx.state.step_counter + 1) % fx.len_u32();
        if fx.state.step_counter == 0 {
            fx.next_wheel_index();
        }
        fx.length_delay(1, 10)
    };

    fx.show();
    delay
}

/// Positions of the running pair
fn pair<R: RngCore>(fx: &FrameContext<'_, R>) -> (usize, usize) {
    let first = fx.state.step_counter as usize;
    (first, (first + 1) % fx.len())
}

fn paint_pair<R: RngCore>(fx: &mut FrameContext<'_, R>, color: Rgb) {
    let (first, second) = pair(fx);
    fx.set(first, color);
    fx.set(second, color);
}

/// Move the pair one pixel and return the per-pixel delay
fn advance<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    fx.state.step_counter = (fx.state.step_counter + 1) % fx.len_u32();
    fx.length_delay(10, 30)
}

/// Rainbow spread over the strip, rotating with the call counter
#[allow(clippy::cast_possible_truncation)]
fn rainbow_at<R: RngCore>(fx: &FrameContext<'_, R>, index: usize) -> Rgb {
    let len = fx.len_u32();
    let pos = (index as u32 * 256 / len + fx.state.call_counter % 256) % 256;
    color_wheel(pos as u8)
}

fn fill_rainbow<R: RngCore>(fx: &mut FrameContext<'_, R>) {
    for i in 0..fx.len() {
        let color = rainbow_at(fx, i);
        fx.set(i, color);
    }
}
