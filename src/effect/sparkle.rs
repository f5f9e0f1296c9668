//! Sparkle effects

use embassy_time::Duration;
use rand::RngCore;

use super::{BLACK, FrameContext, WHITE};

const FLASH: Duration = Duration::from_millis(20);

/// Blinks one random LED at a time
pub(super) fn sparkle<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    fx.fill(BLACK);
    let index = fx.random_index();
    let color = fx.state.color;
    fx.set(index, color);
    fx.show();
    fx.speed_delay(10, 200)
}

/// Base color with a single white pixel flashing now and then
pub(super) fn flash_sparkle<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let color = fx.state.color;
    fx.fill(color);

    let delay = if fx.random(0, 10) == 7 {
        let index = fx.random_index();
        fx.set(index, WHITE);
        FLASH
    } else {
        fx.speed_delay(20, 200)
    };

    fx.show();
    delay
}

/// Like flash sparkle, with a third of the strip flashing at once
pub(super) fn hyper_sparkle<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let color = fx.state.color;
    fx.fill(color);

    let delay = if fx.random(0, 10) < 4 {
        for _ in 0..(fx.len() / 3).max(1) {
            let index = fx.random_index();
            fx.set(index, WHITE);
        }
        FLASH
    } else {
        fx.speed_delay(15, 120)
    };

    fx.show();
    delay
}
