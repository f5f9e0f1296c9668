//! Firework sparks
//!
//! Every frame diffuses the previous one (see [`diffuse`]) so old sparks
//! decay and bleed into their neighbours, then new sparks may ignite.

use embassy_time::Duration;
use rand::RngCore;

use super::FrameContext;
use crate::color::{diffuse, rgb_from_u32, rgb_to_u32};

/// One ignition attempt per this many LEDs
const LEDS_PER_SPARK: usize = 20;

/// Chance of each ignition attempt, as one in N
const SPARK_ODDS: u32 = 10;

pub(super) fn fireworks<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    diffuse(fx.leds_mut());

    let color = rgb_from_u32(fx.state.scratch);
    for _ in 0..(fx.len() / LEDS_PER_SPARK).max(1) {
        if fx.random(0, SPARK_ODDS) == 0 {
            let index = fx.random_index();
            fx.set(index, color);
        }
    }
    fx.show();

    fx.length_delay(20, 20)
}

/// Fireworks with a random color per frame
pub(super) fn fireworks_random<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let color = fx.random_wheel_color();
    fx.state.scratch = rgb_to_u32(color);
    fireworks(fx)
}
