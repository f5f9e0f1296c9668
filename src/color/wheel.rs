//! Hue wheel and random hue selection

use rand::{Rng, RngCore};

use crate::color::Rgb;

/// Minimum circular distance between two consecutive random hues
pub const MIN_WHEEL_DISTANCE: u8 = 42;

/// Samples drawn before [`random_wheel_index`] gives up and returns the
/// farthest candidate it has seen.
pub const RANDOM_WHEEL_ATTEMPTS: usize = 64;

/// Map a position on the wheel (0-255) to a fully saturated color
///
/// The wheel runs red -> green -> blue -> red in three linear segments of
/// 85 positions each; channels inside a segment always sum to 255.
#[allow(clippy::cast_possible_truncation)]
pub const fn color_wheel(pos: u8) -> Rgb {
    let pos = 255 - pos;
    if pos < 85 {
        Rgb {
            r: 255 - pos * 3,
            g: 0,
            b: pos * 3,
        }
    } else if pos < 170 {
        let pos = pos - 85;
        Rgb {
            r: 0,
            g: pos * 3,
            b: 255 - pos * 3,
        }
    } else {
        let pos = pos - 170;
        Rgb {
            r: pos * 3,
            g: 255 - pos * 3,
            b: 0,
        }
    }
}

/// Circular distance between two wheel positions
///
/// Measured as `min(|a - b|, 255 - |a - b|)`.
pub const fn wheel_distance(a: u8, b: u8) -> u8 {
    let x = a.abs_diff(b);
    let y = 255 - x;
    if x < y { x } else { y }
}

/// Pick a random wheel position at least [`MIN_WHEEL_DISTANCE`] away from `pos`
///
/// Gives up after [`RANDOM_WHEEL_ATTEMPTS`] samples and returns the farthest
/// candidate seen, so a degenerate RNG can never hang the render loop.
pub fn random_wheel_index<R: RngCore>(rng: &mut R, pos: u8) -> u8 {
    let mut best = pos;
    let mut best_distance = 0;
    for _ in 0..RANDOM_WHEEL_ATTEMPTS {
        let candidate: u8 = rng.r#gen();
        let distance = wheel_distance(pos, candidate);
        if distance >= MIN_WHEEL_DISTANCE {
            return candidate;
        }
        if distance > best_distance {
            best = candidate;
            best_distance = distance;
        }
    }
    best
}
