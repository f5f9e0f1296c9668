use crate::{color::Rgb, math8::scale_to_brightness};

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Scale every channel of a color into `0..=brightness`
#[inline]
pub const fn scale_color(color: Rgb, brightness: u8) -> Rgb {
    Rgb {
        r: scale_to_brightness(color.r, brightness),
        g: scale_to_brightness(color.g, brightness),
        b: scale_to_brightness(color.b, brightness),
    }
}
