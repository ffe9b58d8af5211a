//! Gamma-encoded (sRGB) color types
//!
//! sRGB channel values are not proportional to light: r/g/b = 128 (50%)
//! emits only about 21% of the light of 255. Convert to a linear type before
//! mixing or blending.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;
use crate::range::{U5_U16, U5_U8, U6_U16, U6_U8, U8_U16};

/// 16-bit sRGB with 5-bit red (0-31), 6-bit green (0-63) and 5-bit blue (0-31).
///
/// The channels are stored unpacked; use [`Rgb565::pack`] and
/// [`Rgb565::unpack`] for the `rrrrrggggggbbbbb` wire layout used by most
/// display controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb565 {
    /// Red channel (0..=31)
    pub r: u8,
    /// Green channel (0..=63)
    pub g: u8,
    /// Blue channel (0..=31)
    pub b: u8,
}

impl Rgb565 {
    /// Create a color from unpacked channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into a 16-bit word, red in the high bits.
    ///
    /// Channel bits beyond each field's width are dropped.
    ///
    /// # Example
    /// ```
    /// use okcolor::Rgb565;
    /// assert_eq!(Rgb565::new(31, 0, 0).pack(), 0xF800);
    /// assert_eq!(Rgb565::new(0, 63, 0).pack(), 0x07E0);
    /// ```
    #[inline]
    pub const fn pack(self) -> u16 {
        ((self.r as u16 & 0x1F) << 11) | ((self.g as u16 & 0x3F) << 5) | (self.b as u16 & 0x1F)
    }

    /// Unpack a 16-bit `rrrrrggggggbbbbb` word.
    #[inline]
    pub const fn unpack(word: u16) -> Self {
        Self {
            r: (word >> 11) as u8,
            g: ((word >> 5) & 0x3F) as u8,
            b: (word & 0x1F) as u8,
        }
    }
}

/// 24-bit sRGB, as used in PC graphics, `#rrggbb` codes and image files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb888 {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb888 {
    /// Create a color from 8-bit channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as a lowercase `#rrggbb` string.
    ///
    /// # Example
    /// ```
    /// use okcolor::Rgb888;
    /// assert_eq!(Rgb888::new(255, 136, 0).to_hex(), "#ff8800");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::LowerHex for Rgb888 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb888 {
    type Err = ParseColorError;

    /// Parse a hex color code.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`, case-insensitive, with
    /// surrounding whitespace trimmed. Shorthand digits are doubled
    /// (`#F80` is `#FF8800`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(c));
        }

        // All digits checked above
        let digits: Vec<u8> = s
            .chars()
            .map(|c| c.to_digit(16).unwrap_or(0) as u8)
            .collect();
        match digits[..] {
            [r, g, b] => Ok(Self::new(r * 17, g * 17, b * 17)),
            [r1, r0, g1, g0, b1, b0] => {
                Ok(Self::new((r1 << 4) | r0, (g1 << 4) | g0, (b1 << 4) | b0))
            }
            _ => Err(ParseColorError::InvalidLength(digits.len())),
        }
    }
}

/// 48-bit sRGB (0-65535 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb16 {
    /// Red channel (0..=65535)
    pub r: u16,
    /// Green channel (0..=65535)
    pub g: u16,
    /// Blue channel (0..=65535)
    pub b: u16,
}

impl Rgb16 {
    /// Create a color from 16-bit channels.
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }
}

color_value!(Rgb565, Rgb565, [r: 31, g: 63, b: 31]);
color_value!(Rgb888, Rgb888, [r: 255, g: 255, b: 255]);
color_value!(Rgb16, Rgb16, [r: 65535, g: 65535, b: 65535]);

rescale_channels! {
    Rgb565, Rgb888 { r: widen(U5_U8), g: widen(U6_U8), b: widen(U5_U8) }
}
rescale_channels! {
    Rgb565, Rgb16 { r: widen(U5_U16), g: widen(U6_U16), b: widen(U5_U16) }
}
rescale_channels! {
    Rgb888, Rgb16 { r: widen(U8_U16), g: widen(U8_U16), b: widen(U8_U16) }
}
