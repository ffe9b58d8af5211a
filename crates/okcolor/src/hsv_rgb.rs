//! Integer hue-sector conversion between HSV and RGB
//!
//! The hue wheel is split into six sectors (red-yellow, yellow-green,
//! green-cyan, cyan-blue, blue-magenta, magenta-red). Within a sector one RGB
//! channel sits at the top of the color's range, one at the bottom, and the
//! third moves linearly between them as hue advances.
//!
//! [`HsvGeometry`] describes one pairing of encodings: the RGB channel maximum,
//! the number of hue steps per full turn, and the saturation/value maximum.
//! All arithmetic is integer; channels are at most 16 bits wide.
//!
//! # Example
//!
//! ```
//! use okcolor::hsv_rgb::RGB888_HSV_DECIMAL;
//!
//! let hsv = RGB888_HSV_DECIMAL.hsv_from_rgb([0, 255, 0]);
//! assert_eq!(hsv, [120, 100, 100]);
//! assert_eq!(RGB888_HSV_DECIMAL.rgb_from_hsv(hsv), [0, 255, 0]);
//! ```

/// Channel ranges for one HSV/RGB encoding pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HsvGeometry {
    max_rgb: u32,
    h_wrap: u32,
    max_sv: u32,
}

/// `(n / d)` rounded half up.
#[inline]
const fn div_round(n: u64, d: u64) -> u64 {
    (n + d / 2) / d
}

impl HsvGeometry {
    /// Create a geometry.
    ///
    /// # Arguments
    /// * `max_rgb` - Largest RGB channel value (e.g. 255)
    /// * `h_wrap` - Hue steps per full turn (e.g. 360 or 65536)
    /// * `max_sv` - Largest saturation/value (e.g. 100 or 255)
    ///
    /// # Panics
    /// Panics if any parameter is zero or exceeds 65536.
    pub const fn new(max_rgb: u32, h_wrap: u32, max_sv: u32) -> Self {
        assert!(max_rgb > 0 && max_rgb <= 65536);
        assert!(h_wrap > 0 && h_wrap <= 65536);
        assert!(max_sv > 0 && max_sv <= 65536);
        Self {
            max_rgb,
            h_wrap,
            max_sv,
        }
    }

    /// Largest RGB channel value.
    pub const fn max_rgb(self) -> u32 {
        self.max_rgb
    }

    /// Hue steps per full turn.
    pub const fn h_wrap(self) -> u32 {
        self.h_wrap
    }

    /// Largest saturation/value.
    pub const fn max_sv(self) -> u32 {
        self.max_sv
    }

    /// Convert `[h, s, v]` to `[r, g, b]`.
    ///
    /// Out-of-range inputs give a defined but meaningless color; this never
    /// panics.
    pub fn rgb_from_hsv(self, [h, s, v]: [u16; 3]) -> [u16; 3] {
        let (h, s, v) = (h as u64, s as u64, v as u64);
        let max_rgb = self.max_rgb as u64;
        let h_wrap = self.h_wrap as u64;
        let max_sv = self.max_sv as u64;

        // Chroma in HSV units (floored), then rescaled into RGB units
        let top = div_round(v * max_rgb, max_sv);
        let range_hsv = v * s / max_sv;
        let range = div_round(range_hsv * max_rgb, max_sv);
        let bot = top.saturating_sub(range);

        let sixths = h * 6;
        let partial = (sixths % h_wrap) * range / h_wrap;
        let rising = bot + partial;
        let falling = top.saturating_sub(partial);

        let [r, g, b] = match sixths / h_wrap {
            1 => [falling, top, bot],
            2 => [bot, top, rising],
            3 => [bot, falling, top],
            4 => [rising, bot, top],
            5 => [top, bot, falling],
            // Sector 0, and anything past the wrap point
            _ => [top, rising, bot],
        };
        [r as u16, g as u16, b as u16]
    }

    /// Convert `[r, g, b]` to `[h, s, v]`.
    ///
    /// Grays (including black) have hue 0 and saturation 0.
    pub fn hsv_from_rgb(self, [r, g, b]: [u16; 3]) -> [u16; 3] {
        let (r, g, b) = (r as u64, g as u64, b as u64);
        let max_rgb = self.max_rgb as u64;
        let h_wrap = self.h_wrap as u64;
        let max_sv = self.max_sv as u64;

        let top = r.max(g).max(b);
        let bot = r.min(g).min(b);
        let range = top - bot;
        let v = div_round(top * max_sv, max_rgb);
        if range == 0 {
            return [0, 0, v as u16];
        }

        // top >= range > 0 here, so the division is safe
        let s = div_round(range * max_sv, top);

        let term = if top == r && bot == b {
            g - bot
        } else if top == g && bot == b {
            top - r + range
        } else if top == g && bot == r {
            b - bot + 2 * range
        } else if top == b && bot == r {
            top - g + 3 * range
        } else if top == b && bot == g {
            r - bot + 4 * range
        } else {
            top - b + 5 * range
        };
        let h = term * h_wrap / (range * 6);

        [h as u16, s as u16, v as u16]
    }
}

/// 24-bit sRGB and 32-bit HSV (16-bit hue, 8-bit saturation/value).
pub const RGB888_HSV32: HsvGeometry = HsvGeometry::new(255, 65536, 255);
/// 24-bit sRGB and degrees/percent HSV.
pub const RGB888_HSV_DECIMAL: HsvGeometry = HsvGeometry::new(255, 360, 100);
/// 48-bit sRGB and 48-bit HSV.
pub const RGB16_HSV48: HsvGeometry = HsvGeometry::new(65535, 65536, 65535);
