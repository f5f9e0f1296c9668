/// Re-map a number from one range to another
///
/// Integer math, truncating toward zero. Values outside the input range are
/// extrapolated, not clamped.
#[inline]
pub const fn map_range(x: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    if in_max == in_min {
        return out_min;
    }
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Clamp a value into `low..=high`
#[inline]
pub const fn constrain(value: u32, low: u32, high: u32) -> u32 {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

/// Scale a channel value into `0..=brightness`
///
/// Applied at the moment a pixel is written out, so stored colors stay
/// unscaled.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale_to_brightness(channel: u8, brightness: u8) -> u8 {
    ((channel as u16 * brightness as u16) / 255) as u8
}
