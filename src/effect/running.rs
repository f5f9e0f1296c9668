//! Running pattern effects
//!
//! Repeating color bands shifted by one pixel per frame, plus the sine
//! running lights and the random color conveyor.

use embassy_time::Duration;
use rand::RngCore;

use super::{BLACK, FrameContext, WHITE};
use crate::color::{Rgb, rgb_from_u32};

const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
const PINK: Rgb = Rgb {
    r: 255,
    g: 0,
    b: 130,
};
const ORANGE: Rgb = Rgb {
    r: 255,
    g: 50,
    b: 0,
};

/// Running lights with a smooth sine transition
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn running_lights<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let color = fx.state.color;
    let phase = fx.state.call_counter;

    for i in 0..fx.len_u32() {
        let wave = libm::sin(f64::from(i.wrapping_add(phase))) * 127.0 + 128.0;
        let level = wave as u32;
        let scale = |channel: u8| (u32::from(channel) * level / 255) as u8;
        fx.set(
            i as usize,
            Rgb {
                r: scale(color.r),
                g: scale(color.g),
                b: scale(color.b),
            },
        );
    }
    fx.show();
    fx.speed_delay(35, 350)
}

/// Alternating base color / white pixels running
pub(super) fn running_color<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let color = rgb_from_u32(fx.state.scratch);
    bands(fx, 4, |band| if band < 2 { color } else { WHITE });
    fx.length_delay(10, 30)
}

/// Alternating red/blue pixels running
pub(super) fn running_red_blue<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    bands(fx, 4, |band| if band < 2 { RED } else { BLUE });
    fx.length_delay(100, 100)
}

/// Alternating red/green pixels running
pub(super) fn merry_christmas<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    bands(fx, 4, |band| if band < 2 { RED } else { GREEN });
    fx.length_delay(100, 100)
}

/// Alternating pink/orange pixels running
pub(super) fn halloween<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    bands(fx, 4, |band| if band < 2 { PINK } else { ORANGE });
    fx.length_delay(100, 100)
}

/// Alternating red/white/black pixels running
pub(super) fn circus_combustus<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    bands(fx, 6, |band| match band {
        0 | 1 => RED,
        2 | 3 => WHITE,
        _ => BLACK,
    });
    fx.length_delay(100, 100)
}

/// Paint `period`-pixel bands offset by the step counter, then shift by one
fn bands<R: RngCore>(fx: &mut FrameContext<'_, R>, period: u32, color_of: impl Fn(u32) -> Rgb) {
    let step = fx.state.step_counter;
    for i in 0..fx.len_u32() {
        fx.set(i as usize, color_of((i + step) % period));
    }
    fx.show();
    fx.state.step_counter = (step + 1) % period;
}

/// Random colored pixels running, a new color entering every other frame
pub(super) fn running_random<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let len = fx.len();
    if len > 1 {
        fx.leds_mut().copy_within(..len - 1, 1);
    }

    if fx.state.step_counter == 0 {
        fx.next_wheel_index();
        let color = fx.scratch_wheel_color();
        fx.set(0, color);
    }
    fx.show();

    fx.state.step_counter = (fx.state.step_counter + 1) % 2;
    fx.length_delay(50, 50)
}
