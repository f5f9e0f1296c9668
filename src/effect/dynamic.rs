//! Random color effects

use embassy_time::Duration;
use rand::RngCore;

use super::FrameContext;

/// Whole strip in one random color, switching to a clearly different one
pub(super) fn random_color<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    fx.next_wheel_index();
    let color = fx.scratch_wheel_color();
    fx.fill(color);
    fx.show();
    fx.speed_delay(100, 5000)
}

/// Every LED in a random color; one random LED changes per frame
pub(super) fn single_dynamic<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    if fx.state.is_first_frame() {
        for i in 0..fx.len() {
            let color = fx.random_wheel_color();
            fx.set(i, color);
        }
    }

    let index = fx.random_index();
    let color = fx.random_wheel_color();
    fx.set(index, color);
    fx.show();
    fx.speed_delay(10, 5000)
}

/// Every LED in a random color; all of them change every frame
pub(super) fn multi_dynamic<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    for i in 0..fx.len() {
        let color = fx.random_wheel_color();
        fx.set(i, color);
    }
    fx.show();
    fx.speed_delay(100, 5000)
}
