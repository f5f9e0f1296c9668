//! Static color fill effect
//!
//! Fills all LEDs with the base color.

use embassy_time::Duration;
use rand::RngCore;

use super::FrameContext;

const FRAME_DELAY: Duration = Duration::from_millis(50);

pub(super) fn render<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let color = fx.state.color;
    fx.fill(color);
    fx.show();
    FRAME_DELAY
}
