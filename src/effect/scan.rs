//! Scanner effects
//!
//! A single light bouncing or travelling along the strip. Larson scanner
//! and comet fade the previous frame by half, leaving a trail.

use embassy_time::Duration;
use rand::RngCore;

use super::{BLACK, FrameContext};

/// Runs a single pixel back and forth
pub(super) fn scan<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let pos = advance_bounce(fx);
    let color = fx.state.color;
    fx.fill(BLACK);
    fx.set_signed(pos, color);
    fx.show();
    fx.length_delay(10, 30)
}

/// Runs two pixels back and forth in opposite directions
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
pub(super) fn dual_scan<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let pos = advance_bounce(fx);
    let len = fx.len() as i32;
    let color = fx.state.color;
    fx.fill(BLACK);
    fx.set_signed(pos, color);
    fx.set_signed(len - (pos + 1), color);
    fx.show();
    fx.length_delay(10, 30)
}

/// Step the bouncing position; the step counter runs `1..=2 * (len - 1)`
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
fn advance_bounce<R: RngCore>(fx: &mut FrameContext<'_, R>) -> i32 {
    let len = fx.len_u32();
    let period = (len * 2).saturating_sub(2).max(1);
    fx.state.step_counter = fx.state.step_counter % period + 1;

    ((fx.state.step_counter % period) as i32 - (len as i32 - 1)).abs()
}

/// K.I.T.T.
pub(super) fn larson_scanner<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let len = fx.len_u32();
    let period = (len * 2).saturating_sub(2).max(1);
    let step = fx.state.step_counter % period;
    fx.fade_all();

    let pos = if step < len { step } else { len * 2 - step - 2 };
    let color = fx.state.color;
    fx.set(pos as usize, color);
    fx.show();

    fx.state.step_counter = (step + 1) % period;
    fx.length_delay(10, 10)
}

/// Firing comets from one end
pub(super) fn comet<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let step = fx.state.step_counter;
    fx.fade_all();

    let color = fx.state.color;
    fx.set(step as usize, color);
    fx.show();

    fx.state.step_counter = (step + 1) % fx.len_u32();
    fx.length_delay(10, 10)
}
