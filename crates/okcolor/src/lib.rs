//! okcolor: exact integer color conversions for small devices
//!
//! This library converts between the fixed-width color encodings found in
//! embedded graphics and LED work: packed RGB565, 8- and 16-bit sRGB, 8- and
//! 16-bit linear RGB, and four HSV encodings. Every conversion is integer
//! arithmetic (plus precomputed gamma tables) and gives the same result on
//! every platform.
//!
//! # Quick Start
//!
//! Each representation is a type, and conversions are `From` impls between
//! every pair of types:
//!
//! ```
//! use okcolor::{Hsv888, HsvDecimal, LinearRgb16, Rgb565, Rgb888};
//!
//! let orange: Rgb888 = "#ff8800".parse().unwrap();
//!
//! assert_eq!(HsvDecimal::from(orange), HsvDecimal::new(32, 100, 100));
//! assert_eq!(Rgb565::from(orange).pack(), 0xFC40);
//!
//! let red = Hsv888::new(0, 255, 255);
//! let linear: LinearRgb16 = red.into();
//! assert_eq!(linear, LinearRgb16::new(65535, 0, 0));
//! ```
//!
//! When the representation is only known at runtime, use [`Color`] and
//! [`ColorSpace`]:
//!
//! ```
//! use okcolor::{Color, ColorSpace};
//!
//! let gray = Color::from_channels(ColorSpace::Rgb888, [128, 128, 128]);
//! assert_eq!(gray.convert(ColorSpace::LinearRgb16).channels(), [14146, 14146, 14146]);
//! ```
//!
//! # Rounding
//!
//! - Rescaling a channel between two widths rounds half up in both
//!   directions, so narrow -> wide -> narrow is exact (see [`range`]).
//! - Hue is an angle: the top of a hue range wraps to 0 instead of being
//!   clamped.
//! - Gamma tables hold the exact sRGB curve rounded half up (see [`gamma`]).
//! - The HSV transform floors hue when going RGB → HSV. Going HSV → RGB it
//!   floors chroma in HSV units, then rescales it to RGB with rounding (see
//!   [`hsv_rgb`]).
//!
//! # Conversion Paths
//!
//! Conversions between encodings of the same model (sRGB widths, linear
//! widths, HSV encodings) rescale each channel. sRGB and linear convert
//! through the gamma curve. sRGB and HSV convert through the hue-sector
//! transform at 8-bit ([`Rgb888`] with [`Hsv32`] or [`HsvDecimal`]) and 16-bit
//! ([`Rgb16`] with [`Hsv48`]) precision. Every other pair goes through one
//! named intermediate type, and a few of those legs are composed in turn.
//! HSV is always relative to gamma encoded sRGB, never to linear light.

pub mod color;
mod convert;
pub mod gamma;
pub mod hsv_rgb;
pub mod range;
pub mod space;

#[cfg(test)]
mod domain_tests;

pub use color::{
    Hsv32, Hsv48, Hsv888, HsvDecimal, LinearRgb16, LinearRgb888, ParseColorError, Rgb16, Rgb565,
    Rgb888,
};
pub use hsv_rgb::HsvGeometry;
pub use range::Rescale;
pub use space::{Color, ColorSpace, ColorValue, ParseColorSpaceError};
