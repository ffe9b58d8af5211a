//! HSV color types
//!
//! HSV values here are based on gamma-encoded sRGB, matching what color
//! pickers and LED effect code expect. Hue 0 is red in every encoding.

use super::rgb::{Rgb16, Rgb888};
use crate::hsv_rgb::{RGB16_HSV48, RGB888_HSV32, RGB888_HSV_DECIMAL};
use crate::range::{DEG_HUE16, HUE8_DEG, HUE8_HUE16, PCT_U16, PCT_U8, U16_U16, U8_U16, U8_U8};

/// 24-bit HSV. All channels 0-255; hue 0 = red, 85 = green, 171 = blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hsv888 {
    /// Hue (wraps at 256)
    pub h: u8,
    /// Saturation (0..=255)
    pub s: u8,
    /// Value (0..=255)
    pub v: u8,
}

/// "Decimal" HSV: hue in degrees (0-359), saturation and value in percent (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HsvDecimal {
    /// Hue in degrees (wraps at 360)
    pub h: u16,
    /// Saturation in percent (0..=100)
    pub s: u8,
    /// Value in percent (0..=100)
    pub v: u8,
}

/// 32-bit HSV: 16-bit hue, 8-bit saturation and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hsv32 {
    /// Hue (wraps at 65536)
    pub h: u16,
    /// Saturation (0..=255)
    pub s: u8,
    /// Value (0..=255)
    pub v: u8,
}

/// 48-bit HSV. All channels 0-65535; hue 0 = red, 21845 = green, 43690 = blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hsv48 {
    /// Hue (wraps at 65536)
    pub h: u16,
    /// Saturation (0..=65535)
    pub s: u16,
    /// Value (0..=65535)
    pub v: u16,
}

impl Hsv888 {
    /// Create a color from 8-bit hue, saturation and value.
    #[inline]
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

impl HsvDecimal {
    /// Create a color from hue in degrees, saturation and value in percent.
    ///
    /// ```
    /// use okcolor::{HsvDecimal, Rgb888};
    ///
    /// let orange = HsvDecimal::new(30, 100, 100);
    /// assert_eq!(Rgb888::from(orange), Rgb888::new(255, 127, 0));
    /// ```
    #[inline]
    pub const fn new(h: u16, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

impl Hsv32 {
    /// Create a color from 16-bit hue, 8-bit saturation and value.
    #[inline]
    pub const fn new(h: u16, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

impl Hsv48 {
    /// Create a color from 16-bit hue, saturation and value.
    #[inline]
    pub const fn new(h: u16, s: u16, v: u16) -> Self {
        Self { h, s, v }
    }
}

color_value!(Hsv888, Hsv888, [h: 255, s: 255, v: 255]);
color_value!(HsvDecimal, HsvDecimal, [h: 359, s: 100, v: 100]);
color_value!(Hsv32, Hsv32, [h: 65535, s: 255, v: 255]);
color_value!(Hsv48, Hsv48, [h: 65535, s: 65535, v: 65535]);

// Between HSV encodings each channel rescales on its own; hue as an angle.
rescale_channels! {
    Hsv888, Hsv32 { h: widen(HUE8_HUE16), s: widen(U8_U8), v: widen(U8_U8) }
}
rescale_channels! {
    Hsv888, Hsv48 { h: widen(HUE8_HUE16), s: widen(U8_U16), v: widen(U8_U16) }
}
rescale_channels! {
    Hsv888, HsvDecimal { h: widen(HUE8_DEG), s: narrow(PCT_U8), v: narrow(PCT_U8) }
}
rescale_channels! {
    HsvDecimal, Hsv32 { h: widen(DEG_HUE16), s: widen(PCT_U8), v: widen(PCT_U8) }
}
rescale_channels! {
    HsvDecimal, Hsv48 { h: widen(DEG_HUE16), s: widen(PCT_U16), v: widen(PCT_U16) }
}
rescale_channels! {
    Hsv32, Hsv48 { h: widen(U16_U16), s: widen(U8_U16), v: widen(U8_U16) }
}

/// `From` impls in both directions between an RGB type and an HSV type,
/// through the hue-sector transform.
macro_rules! hue_sectors {
    ($rgb:ident, $hsv:ident, $geometry:path) => {
        impl From<$rgb> for $hsv {
            #[inline]
            fn from(rgb: $rgb) -> Self {
                let [h, s, v] = $geometry.hsv_from_rgb([rgb.r as u16, rgb.g as u16, rgb.b as u16]);
                Self {
                    h: h as _,
                    s: s as _,
                    v: v as _,
                }
            }
        }

        impl From<$hsv> for $rgb {
            #[inline]
            fn from(hsv: $hsv) -> Self {
                let [r, g, b] = $geometry.rgb_from_hsv([hsv.h as u16, hsv.s as u16, hsv.v as u16]);
                Self {
                    r: r as _,
                    g: g as _,
                    b: b as _,
                }
            }
        }
    };
}

hue_sectors!(Rgb888, Hsv32, RGB888_HSV32);
hue_sectors!(Rgb888, HsvDecimal, RGB888_HSV_DECIMAL);
hue_sectors!(Rgb16, Hsv48, RGB16_HSV48);
