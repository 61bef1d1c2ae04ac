//! Colors and 1D pixel frames for the cylinder's single WS2812 strip.
//!
//! The cylinder is wired as one continuous strip of [`LED_COUNT`](crate::cylinder::LED_COUNT)
//! pixels. [`Frame1d`] holds one color per physical LED in wiring order; the
//! [`StripSink`](crate::sink::StripSink) fills it from a logical
//! [`CylinderFrame`](crate::led2d::CylinderFrame) and hands it to a
//! [`SmartLedsWrite`](smart_leds::SmartLedsWrite) transport such as [`Ws2812Spi`].
//!
//! # Example
//!
//! ```rust
//! use led_cylinder::led_strip::{colors, pack_rgb, unpack_rgb, Frame1d};
//!
//! let mut frame = Frame1d::<4>::new();
//! frame[1] = unpack_rgb(0xFF_80_00);
//! assert_eq!(pack_rgb(frame[1]), 0xFF_80_00);
//! assert_eq!(frame[0], colors::BLACK);
//! ```

use core::ops::{Deref, DerefMut};
use embedded_graphics::prelude::RgbColor;

pub mod ws2812_spi;

pub use ws2812_spi::Ws2812Spi;

/// Predefined RGB color constants from the `smart_leds` crate.
#[doc(inline)]
pub use smart_leds::colors;

/// 8-bit-per-channel RGB color from `embedded_graphics`.
#[doc(inline)]
pub use embedded_graphics::pixelcolor::Rgb888;

/// RGB color type used by every frame in this crate.
pub use smart_leds::RGB8;

/// Build an [`RGB8`] from a packed `0xRRGGBB` value. Bits above 24 are ignored.
#[must_use]
pub const fn unpack_rgb(packed: u32) -> RGB8 {
    RGB8::new(
        ((packed >> 16) & 0xFF) as u8,
        ((packed >> 8) & 0xFF) as u8,
        (packed & 0xFF) as u8,
    )
}

/// Pack an [`RGB8`] into a `0xRRGGBB` value.
#[must_use]
pub const fn pack_rgb(color: RGB8) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Channel bytes in the order a WS2812 expects them on the wire: green, red, blue.
#[must_use]
pub const fn grb_bytes(color: RGB8) -> [u8; 3] {
    [color.g, color.r, color.b]
}

/// Convert colors to [`RGB8`] for LED strip rendering.
///
/// ```rust
/// use led_cylinder::led_strip::{Rgb888, ToRgb8, RGB8};
///
/// let converted = Rgb888::new(16, 32, 48).to_rgb8();
/// assert_eq!(converted, RGB8::new(16, 32, 48));
/// ```
pub trait ToRgb8 {
    /// Convert this color to [`RGB8`].
    #[must_use]
    fn to_rgb8(self) -> RGB8;
}

impl ToRgb8 for RGB8 {
    #[inline]
    fn to_rgb8(self) -> RGB8 {
        self
    }
}

impl ToRgb8 for Rgb888 {
    #[inline]
    fn to_rgb8(self) -> RGB8 {
        RGB8::new(self.r(), self.g(), self.b())
    }
}

impl ToRgb8 for u32 {
    #[inline]
    fn to_rgb8(self) -> RGB8 {
        unpack_rgb(self)
    }
}

/// Convert colors to [`Rgb888`] for embedded-graphics rendering (the simulator canvas).
pub trait ToRgb888 {
    /// Convert this color to [`Rgb888`].
    #[must_use]
    fn to_rgb888(self) -> Rgb888;
}

impl ToRgb888 for RGB8 {
    #[inline]
    fn to_rgb888(self) -> Rgb888 {
        Rgb888::new(self.r, self.g, self.b)
    }
}

impl ToRgb888 for Rgb888 {
    #[inline]
    fn to_rgb888(self) -> Rgb888 {
        self
    }
}

/// Fixed-size 1D LED strip frame, indexed by physical position along the strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame1d<const N: usize>(pub [RGB8; N]);

impl<const N: usize> Frame1d<N> {
    /// Number of LEDs in this frame.
    pub const LEN: usize = N;

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([RGB8::new(0, 0, 0); N])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: RGB8) -> Self {
        Self([color; N])
    }
}

impl<const N: usize> Deref for Frame1d<N> {
    type Target = [RGB8; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Frame1d<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[RGB8; N]> for Frame1d<N> {
    fn from(array: [RGB8; N]) -> Self {
        Self(array)
    }
}

impl<const N: usize> From<Frame1d<N>> for [RGB8; N] {
    fn from(frame: Frame1d<N>) -> Self {
        frame.0
    }
}

impl<const N: usize> Default for Frame1d<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_colors_split_into_channels() {
        let color = unpack_rgb(0x12_34_56);
        assert_eq!(color, RGB8::new(0x12, 0x34, 0x56));
        assert_eq!(pack_rgb(color), 0x12_34_56);
    }

    #[test]
    fn unpack_ignores_high_byte() {
        assert_eq!(unpack_rgb(0xAB_00_00_FF), RGB8::new(0, 0, 0xFF));
    }

    #[test]
    fn wire_order_is_green_red_blue() {
        assert_eq!(grb_bytes(RGB8::new(1, 2, 3)), [2, 1, 3]);
    }
}
