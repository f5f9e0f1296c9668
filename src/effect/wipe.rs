//! Wipe and sweep effects
//!
//! Light the strip pixel by pixel, then clear it again. The dual variants
//! work from both ends (or from the middle) at once.

use embassy_time::Duration;
use rand::RngCore;

use super::{BLACK, FrameContext};

/// Lights all LEDs one after another, then turns them off in the same order
pub(super) fn color_wipe<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let len = fx.len_u32();
    let step = fx.state.step_counter;
    if step < len {
        let color = fx.state.color;
        fx.set(step as usize, color);
    } else {
        fx.set((step - len) as usize, BLACK);
    }
    fx.show();

    fx.state.step_counter = (step + 1) % (len * 2);
    fx.length_delay(5, 50)
}

/// Wipes the strip with one random color, then starts over with another
pub(super) fn color_wipe_random<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let step = fx.state.step_counter;
    if step == 0 {
        fx.next_wheel_index();
    }

    let color = fx.scratch_wheel_color();
    fx.set(step as usize, color);
    fx.show();

    fx.state.step_counter = (step + 1) % fx.len_u32();
    fx.length_delay(5, 50)
}

/// Random colors introduced alternating from the start and the end
pub(super) fn color_sweep_random<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let len = fx.len_u32();
    let step = fx.state.step_counter % (len * 2);
    if step == 0 || step == len {
        fx.next_wheel_index();
    }

    let color = fx.scratch_wheel_color();
    if step < len {
        fx.set(step as usize, color);
    } else {
        fx.set((len * 2 - step - 1) as usize, color);
    }
    fx.show();

    fx.state.step_counter = (step + 1) % (len * 2);
    fx.length_delay(5, 50)
}

/// Fills from both edges toward the middle, then clears in reverse order
pub(super) fn dual_color_wipe_in_out<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let (len, step, odd) = dual_geometry(fx);
    let color = fx.state.color;
    let end = len - step - 1;
    let mid = if odd { len / 2 + 1 } else { len / 2 };

    if step < mid {
        fx.set_signed(step, color);
        fx.set_signed(end, color);
    } else if odd {
        // The center LED is counted twice (on, then off), so trail one behind
        fx.set_signed(step - 1, BLACK);
        fx.set_signed(end + 1, BLACK);
    } else {
        fx.set_signed(step, BLACK);
        fx.set_signed(end, BLACK);
    }

    advance_dual(fx, odd)
}

/// Fills from both edges toward the middle, then clears in the same order
pub(super) fn dual_color_wipe_in_in<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let (len, step, odd) = dual_geometry(fx);
    let color = fx.state.color;
    let mid = len / 2;

    if odd {
        if step <= mid {
            fx.set_signed(step, color);
            fx.set_signed(len - step - 1, color);
        } else {
            let i = step - mid;
            fx.set_signed(i - 1, BLACK);
            fx.set_signed(len - i, BLACK);
        }
    } else if step < mid {
        fx.set_signed(step, color);
        fx.set_signed(len - step - 1, color);
    } else {
        let i = step - mid;
        fx.set_signed(i, BLACK);
        fx.set_signed(len - i - 1, BLACK);
    }

    advance_dual(fx, odd)
}

/// Fills from the middle toward both edges, then clears in the same order
pub(super) fn dual_color_wipe_out_out<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let (len, step, odd) = dual_geometry(fx);
    let color = fx.state.color;
    let end = len - step - 1;
    let mid = len / 2;

    if odd {
        if step <= mid {
            fx.set_signed(mid + step, color);
            fx.set_signed(mid - step, color);
        } else {
            fx.set_signed(step - 1, BLACK);
            fx.set_signed(end + 1, BLACK);
        }
    } else if step < mid {
        fx.set_signed(mid - step - 1, color);
        fx.set_signed(mid + step, color);
    } else {
        fx.set_signed(step, BLACK);
        fx.set_signed(end, BLACK);
    }

    advance_dual(fx, odd)
}

/// Fills from the middle toward both edges, then clears in reverse order
pub(super) fn dual_color_wipe_out_in<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let (len, step, odd) = dual_geometry(fx);
    let color = fx.state.color;
    let mid = len / 2;

    if odd {
        if step <= mid {
            fx.set_signed(mid + step, color);
            fx.set_signed(mid - step, color);
        } else {
            let i = step - mid;
            fx.set_signed(i - 1, BLACK);
            fx.set_signed(len - i, BLACK);
        }
    } else if step < mid {
        fx.set_signed(mid - step - 1, color);
        fx.set_signed(mid + step, color);
    } else {
        let i = step - mid;
        fx.set_signed(i, BLACK);
        fx.set_signed(len - i - 1, BLACK);
    }

    advance_dual(fx, odd)
}

/// Strip length, current step and parity, as signed pixel math
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
fn dual_geometry<R: RngCore>(fx: &FrameContext<'_, R>) -> (i32, i32, bool) {
    let len = fx.len() as i32;
    (len, fx.state.step_counter as i32, len % 2 == 1)
}

/// Shared step/delay bookkeeping of the dual wipes
///
/// Odd strips take one extra step so the center LED is both lit and cleared.
fn advance_dual<R: RngCore>(fx: &mut FrameContext<'_, R>, odd: bool) -> Duration {
    let len = fx.len_u32();
    let next = fx.state.step_counter + 1;
    let wrapped = if odd { next > len } else { next >= len };
    fx.state.step_counter = if wrapped { 0 } else { next };

    fx.show();
    fx.length_delay(5, 50)
}
