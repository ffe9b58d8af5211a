//! Linear RGB color types
//!
//! Linear RGB uses the sRGB primaries without the transfer function, so
//! channel values are proportional to emitted light. This is the right space
//! for LED output, raw sensor data and color mixing.

use super::rgb::{Rgb16, Rgb888};
use crate::gamma;
use crate::range::U8_U16;

/// Linear 24-bit RGB.
///
/// 8 bits are not enough to represent dark linear values: sRGB codes 1..=6
/// all land on 0. Prefer [`LinearRgb16`] for intermediate results and use this
/// type only at the edges (e.g. driving an 8-bit PWM channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LinearRgb888 {
    /// Red channel (linear light, 0..=255)
    pub r: u8,
    /// Green channel (linear light, 0..=255)
    pub g: u8,
    /// Blue channel (linear light, 0..=255)
    pub b: u8,
}

impl LinearRgb888 {
    /// Create a color from 8-bit linear channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Linear 48-bit RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LinearRgb16 {
    /// Red channel (linear light, 0..=65535)
    pub r: u16,
    /// Green channel (linear light, 0..=65535)
    pub g: u16,
    /// Blue channel (linear light, 0..=65535)
    pub b: u16,
}

impl LinearRgb16 {
    /// Create a color from 16-bit linear channels.
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }
}

color_value!(LinearRgb888, LinearRgb888, [r: 255, g: 255, b: 255]);
color_value!(LinearRgb16, LinearRgb16, [r: 65535, g: 65535, b: 65535]);

rescale_channels! {
    LinearRgb888, LinearRgb16 { r: widen(U8_U16), g: widen(U8_U16), b: widen(U8_U16) }
}

impl From<Rgb888> for LinearRgb888 {
    #[inline]
    fn from(srgb: Rgb888) -> Self {
        Self {
            r: gamma::linear8_from_srgb8(srgb.r),
            g: gamma::linear8_from_srgb8(srgb.g),
            b: gamma::linear8_from_srgb8(srgb.b),
        }
    }
}

impl From<LinearRgb888> for Rgb888 {
    #[inline]
    fn from(linear: LinearRgb888) -> Self {
        Self {
            r: gamma::srgb8_from_linear8(linear.r),
            g: gamma::srgb8_from_linear8(linear.g),
            b: gamma::srgb8_from_linear8(linear.b),
        }
    }
}

impl From<Rgb888> for LinearRgb16 {
    #[inline]
    fn from(srgb: Rgb888) -> Self {
        Self {
            r: gamma::linear16_from_srgb8(srgb.r),
            g: gamma::linear16_from_srgb8(srgb.g),
            b: gamma::linear16_from_srgb8(srgb.b),
        }
    }
}

impl From<LinearRgb16> for Rgb888 {
    #[inline]
    fn from(linear: LinearRgb16) -> Self {
        Self {
            r: gamma::srgb8_from_linear16(linear.r),
            g: gamma::srgb8_from_linear16(linear.g),
            b: gamma::srgb8_from_linear16(linear.b),
        }
    }
}

impl From<Rgb16> for LinearRgb16 {
    #[inline]
    fn from(srgb: Rgb16) -> Self {
        Self {
            r: gamma::linear16_from_srgb16(srgb.r),
            g: gamma::linear16_from_srgb16(srgb.g),
            b: gamma::linear16_from_srgb16(srgb.b),
        }
    }
}

impl From<LinearRgb16> for Rgb16 {
    #[inline]
    fn from(linear: LinearRgb16) -> Self {
        Self {
            r: gamma::srgb16_from_linear16(linear.r),
            g: gamma::srgb16_from_linear16(linear.g),
            b: gamma::srgb16_from_linear16(linear.b),
        }
    }
}
