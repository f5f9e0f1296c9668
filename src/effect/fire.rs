//! Fire flicker effects
//!
//! Every LED shows the base color darkened by a random amount. The reverse
//! intensity divides the strongest channel to get the flicker range, so a
//! smaller value flickers harder.

use embassy_time::Duration;
use rand::RngCore;

use super::FrameContext;
use crate::color::Rgb;

const FLICKER: u8 = 3;
const FLICKER_SOFT: u8 = 6;
const FLICKER_INTENSE: u8 = 1;

pub(super) fn fire_flicker<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    flicker(fx, FLICKER)
}

pub(super) fn fire_flicker_soft<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    flicker(fx, FLICKER_SOFT)
}

pub(super) fn fire_flicker_intense<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    flicker(fx, FLICKER_INTENSE)
}

#[allow(clippy::cast_possible_truncation)]
fn flicker<R: RngCore>(fx: &mut FrameContext<'_, R>, reverse_intensity: u8) -> Duration {
    let color = fx.state.color;
    let range = color.r.max(color.g).max(color.b) / reverse_intensity;

    for i in 0..fx.len() {
        let amount = fx.random(0, u32::from(range)) as u8;
        fx.set(
            i,
            Rgb {
                r: color.r.saturating_sub(amount),
                g: color.g.saturating_sub(amount),
                b: color.b.saturating_sub(amount),
            },
        );
    }
    fx.show();
    fx.speed_delay(10, 500)
}
