//! Theatre-style crawling lights
//!
//! A six-frame cycle on the call counter: even frames light every third
//! pixel and push, odd frames blank the same pixels without pushing and ask
//! to be called again right away.

use embassy_time::Duration;
use rand::RngCore;

use super::{BLACK, FrameContext};
use crate::color::{Rgb, color_wheel};

const CYCLE: u32 = 6;
const SPACING: usize = 3;
const BLANK_DELAY: Duration = Duration::from_millis(1);

pub(super) fn theater_chase<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let color = fx.state.color;
    crawl(fx, |_| color)
}

/// Theater chase with rainbow colors drifting along the strip
#[allow(clippy::cast_possible_truncation)]
pub(super) fn theater_chase_rainbow<R: RngCore>(fx: &mut FrameContext<'_, R>) -> Duration {
    let offset = fx.state.step_counter;
    let delay = crawl(fx, |i| color_wheel(((i as u32 + offset) % 256) as u8));
    fx.state.step_counter = (offset + 1) % 256;
    delay
}

fn crawl<R: RngCore>(fx: &mut FrameContext<'_, R>, color_at: impl Fn(usize) -> Rgb) -> Duration {
    let phase = fx.state.call_counter % CYCLE;
    let shift = (phase / 2) as usize;

    if phase % 2 == 0 {
        for i in (0..fx.len()).step_by(SPACING) {
            fx.set(i + shift, color_at(i));
        }
        fx.show();
        fx.speed_delay(50, 500)
    } else {
        for i in (0..fx.len()).step_by(SPACING) {
            fx.set(i + shift, BLACK);
        }
        BLANK_DELAY
    }
}
