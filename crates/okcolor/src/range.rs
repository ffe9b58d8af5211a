//! Integer range rescaling between channel encodings
//!
//! Every channel conversion in this crate reduces to mapping an integer from a
//! "small" range onto a "large" range and back. Both directions round half up,
//! which makes the small -> large -> small round trip exact for every value.
//!
//! Hue is an angle, so hue ranges are described by their wrap modulus rather
//! than their maximum (256 for an 8-bit hue, 360 for degrees, 65536 for a
//! 16-bit hue). The wrap point aliases to zero, so the largest small hue does
//! not map onto the largest large hue.
//!
//! # Example
//!
//! ```
//! use okcolor::range::{U5_U8, HUE8_DEG};
//!
//! assert_eq!(U5_U8.to_large(31), 255);
//! assert_eq!(U5_U8.to_small(U5_U8.to_large(17)), 17);
//!
//! // 8-bit hue 255 is just short of a full turn
//! assert_eq!(HUE8_DEG.to_large(255), 359);
//! assert_eq!(HUE8_DEG.to_small(359), 255);
//! ```

/// A mapping between a small integer range and a large one.
///
/// Construct with [`Rescale::linear`] for bounded channels or
/// [`Rescale::angle`] for wrapping hue channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rescale {
    // Maximum value for bounded ranges, wrap modulus for angles.
    small: u32,
    large: u32,
    wrapping: bool,
}

impl Rescale {
    /// A bounded mapping between `[0, small_max]` and `[0, large_max]`.
    ///
    /// # Panics
    /// Panics if `small_max` is zero or larger than `large_max`.
    pub const fn linear(small_max: u32, large_max: u32) -> Self {
        assert!(small_max > 0 && small_max <= large_max);
        Self {
            small: small_max,
            large: large_max,
            wrapping: false,
        }
    }

    /// A wrapping mapping between hue ranges with `small_wrap` and
    /// `large_wrap` distinct values per full turn.
    ///
    /// # Panics
    /// Panics if `small_wrap` is zero or larger than `large_wrap`.
    pub const fn angle(small_wrap: u32, large_wrap: u32) -> Self {
        assert!(small_wrap > 0 && small_wrap <= large_wrap);
        Self {
            small: small_wrap,
            large: large_wrap,
            wrapping: true,
        }
    }

    /// Largest valid value on the small side.
    pub const fn small_max(self) -> u32 {
        if self.wrapping {
            self.small - 1
        } else {
            self.small
        }
    }

    /// Largest valid value on the large side.
    pub const fn large_max(self) -> u32 {
        if self.wrapping {
            self.large - 1
        } else {
            self.large
        }
    }

    /// Whether this mapping treats its values as angles.
    pub const fn is_angle(self) -> bool {
        self.wrapping
    }

    /// Map a small-range value onto the large range, rounding half up.
    #[inline]
    pub const fn to_large(self, x: u32) -> u32 {
        let (small, large) = (self.small as u64, self.large as u64);
        ((x as u64 * large + small / 2) / small) as u32
    }

    /// Map a large-range value onto the small range, rounding half up.
    ///
    /// For angles, a value that rounds up to the wrap point comes back as zero.
    #[inline]
    pub const fn to_small(self, y: u32) -> u32 {
        let (small, large) = (self.small as u64, self.large as u64);
        let q = (y as u64 * small + large / 2) / large;
        if self.wrapping {
            (q % small) as u32
        } else {
            q as u32
        }
    }
}

/// 5-bit channel (RGB565 red/blue) and 8-bit channel.
pub const U5_U8: Rescale = Rescale::linear(31, 255);
/// 5-bit channel and 16-bit channel.
pub const U5_U16: Rescale = Rescale::linear(31, 65535);
/// 6-bit channel (RGB565 green) and 8-bit channel.
pub const U6_U8: Rescale = Rescale::linear(63, 255);
/// 6-bit channel and 16-bit channel.
pub const U6_U16: Rescale = Rescale::linear(63, 65535);
/// 8-bit channel onto itself.
pub const U8_U8: Rescale = Rescale::linear(255, 255);
/// 8-bit channel and 16-bit channel.
pub const U8_U16: Rescale = Rescale::linear(255, 65535);
/// 16-bit channel onto itself.
pub const U16_U16: Rescale = Rescale::linear(65535, 65535);
/// Percentage (0-100) and 8-bit channel.
pub const PCT_U8: Rescale = Rescale::linear(100, 255);
/// Percentage (0-100) and 16-bit channel.
pub const PCT_U16: Rescale = Rescale::linear(100, 65535);
/// 8-bit hue (wraps at 256) and degrees (wrap at 360).
pub const HUE8_DEG: Rescale = Rescale::angle(256, 360);
/// Degrees and 16-bit hue (wraps at 65536).
pub const DEG_HUE16: Rescale = Rescale::angle(360, 65536);
/// 8-bit hue and 16-bit hue.
pub const HUE8_HUE16: Rescale = Rescale::angle(256, 65536);

/// Every supported range pair.
pub const ALL: [Rescale; 12] = [
    U5_U8, U5_U16, U6_U8, U6_U16, U8_U8, U8_U16, U16_U16, PCT_U8, PCT_U16, HUE8_DEG, DEG_HUE16,
    HUE8_HUE16,
];
