//! Pixel sink abstraction
//!
//! The engine never talks to LED hardware directly. Every frame is pushed
//! through a [`PixelSink`], which is addressed in physical pixel order:
//! index inversion and brightness scaling already happened upstream.

use core::convert::Infallible;

use crate::color::{Rgb, rgb_from_u32, rgb_to_u32};

/// Abstract LED transport
///
/// Implement this trait to support different hardware platforms.
/// The engine is generic over this trait.
pub trait PixelSink {
    /// Transport failure reported by [`PixelSink::show`] and friends
    type Error;

    /// Number of pixels the transport can address
    fn pixel_count(&self) -> usize;

    /// Write a single pixel into the transport buffer
    fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), Self::Error>;

    /// Write a single pixel given as `0xRRGGBB`
    fn set_pixel_packed(&mut self, index: usize, color: u32) -> Result<(), Self::Error> {
        self.set_pixel(index, rgb_from_u32(color))
    }

    /// Read back a pixel from the transport buffer
    fn pixel(&self, index: usize) -> Rgb;

    /// Read back a pixel as `0xRRGGBB`
    fn pixel_packed(&self, index: usize) -> u32 {
        rgb_to_u32(self.pixel(index))
    }

    /// Blank the transport buffer and the strip
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Push the buffer to the hardware
    fn show(&mut self) -> Result<(), Self::Error>;
}

/// In-memory sink backed by a fixed array
///
/// Useful for host-side simulation and for tests. Counts how many times the
/// buffer was pushed.
#[derive(Debug, Clone)]
pub struct BufferSink<const N: usize> {
    pixels: [Rgb; N],
    shown: [Rgb; N],
    show_count: u32,
}

impl<const N: usize> BufferSink<N> {
    pub const fn new() -> Self {
        Self {
            pixels: [Rgb { r: 0, g: 0, b: 0 }; N],
            shown: [Rgb { r: 0, g: 0, b: 0 }; N],
            show_count: 0,
        }
    }

    /// Pixels as of the last [`PixelSink::show`] call
    pub const fn shown(&self) -> &[Rgb; N] {
        &self.shown
    }

    /// Number of completed [`PixelSink::show`] calls
    pub const fn show_count(&self) -> u32 {
        self.show_count
    }
}

impl<const N: usize> Default for BufferSink<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PixelSink for BufferSink<N> {
    type Error = Infallible;

    fn pixel_count(&self) -> usize {
        N
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), Self::Error> {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
        Ok(())
    }

    fn pixel(&self, index: usize) -> Rgb {
        self.pixels.get(index).copied().unwrap_or_default()
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.pixels = [Rgb::default(); N];
        self.show()
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.shown = self.pixels;
        self.show_count = self.show_count.wrapping_add(1);
        Ok(())
    }
}
