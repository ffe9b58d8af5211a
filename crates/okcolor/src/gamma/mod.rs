//! sRGB transfer function at 8-bit and 16-bit precision
//!
//! Conversions with an 8-bit input are table lookups. Conversions with a
//! 16-bit input evaluate the IEC 61966-2-1 formula directly, since a 65536
//! entry table per direction would cost more than it saves.
//!
//! The analytic conversions agree with the tables on the 8-bit grid: feeding
//! a byte widened with [`U8_U16`](crate::range::U8_U16) gives the same result
//! as the table entry for that byte.
//!
//! # Precision
//!
//! 8-bit linear values are lossy. The gamma curve is steep near black, so the
//! first few dozen sRGB codes collapse onto a handful of linear codes. Do
//! intermediate math in 16-bit linear instead.

mod lut;

use lut::{LINEAR8_TO_SRGB8, SRGB8_TO_LINEAR16, SRGB8_TO_LINEAR8};

/// IEC 61966-2-1 decode, normalized.
#[inline]
fn decode(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// IEC 61966-2-1 encode, normalized.
#[inline]
fn encode(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Scale a normalized value to `[0, max]`, rounding half up.
#[inline]
fn quantize(value: f64, max: f64) -> f64 {
    (value.clamp(0.0, 1.0) * max + 0.5).floor()
}

/// 8-bit linear to 8-bit sRGB (table).
#[inline]
pub fn srgb8_from_linear8(linear: u8) -> u8 {
    LINEAR8_TO_SRGB8[linear as usize]
}

/// 8-bit sRGB to 8-bit linear (table). Lossy near black.
#[inline]
pub fn linear8_from_srgb8(srgb: u8) -> u8 {
    SRGB8_TO_LINEAR8[srgb as usize]
}

/// 8-bit sRGB to 16-bit linear (table).
#[inline]
pub fn linear16_from_srgb8(srgb: u8) -> u16 {
    SRGB8_TO_LINEAR16[srgb as usize]
}

/// 16-bit linear to 8-bit sRGB.
#[inline]
pub fn srgb8_from_linear16(linear: u16) -> u8 {
    quantize(encode(linear as f64 / 65535.0), 255.0) as u8
}

/// 16-bit linear to 16-bit sRGB.
#[inline]
pub fn srgb16_from_linear16(linear: u16) -> u16 {
    quantize(encode(linear as f64 / 65535.0), 65535.0) as u16
}

/// 16-bit sRGB to 16-bit linear.
#[inline]
pub fn linear16_from_srgb16(srgb: u16) -> u16 {
    quantize(decode(srgb as f64 / 65535.0), 65535.0) as u16
}
