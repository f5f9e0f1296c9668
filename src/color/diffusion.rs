//! Light diffusion used by the fireworks effect
//!
//! Each pass halves every pixel, then spreads energy from neighbours into
//! each pixel, which reads as an afterglow that bleeds along the strip.

use crate::color::Rgb;

/// Halve every channel of a color
#[inline]
pub const fn dim(color: Rgb) -> Rgb {
    Rgb {
        r: color.r >> 1,
        g: color.g >> 1,
        b: color.b >> 1,
    }
}

/// Decay the strip by half, then blend every pixel with its neighbours
///
/// Pixels are updated in place from left to right, so pixel `i` sees the
/// already-blended value of pixel `i - 1`. The first pixel only receives
/// half of its right neighbour, the last pixel a quarter of its left one.
pub fn diffuse(leds: &mut [Rgb]) {
    for led in leds.iter_mut() {
        *led = dim(*led);
    }

    let len = leds.len();
    if len < 2 {
        return;
    }

    leds[0] = add_channels(leds[0], dim(leds[1]));

    for i in 1..len - 1 {
        let left = dim(leds[i - 1]);
        let right = leds[i + 1];
        let spread = Rgb {
            r: average(left.r, right.r),
            g: average(left.g, right.g),
            b: average(left.b, right.b),
        };
        leds[i] = add_channels(leds[i], spread);
    }

    let left = leds[len - 2];
    let quarter = Rgb {
        r: left.r >> 2,
        g: left.g >> 2,
        b: left.b >> 2,
    };
    leds[len - 1] = add_channels(leds[len - 1], quarter);
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn average(a: u8, b: u8) -> u8 {
    ((a as u16 + b as u16) >> 1) as u8
}

#[inline]
const fn add_channels(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.saturating_add(b.r),
        g: a.g.saturating_add(b.g),
        b: a.b.saturating_add(b.b),
    }
}
