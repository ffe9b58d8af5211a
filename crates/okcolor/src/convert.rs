//! Composed conversions
//!
//! Pairs without a direct transform convert through one named intermediate
//! type. Where some type has a direct transform to both ends, that type is
//! the intermediate, preferring the most precise one unless an 8-bit source
//! makes the 8-bit route equivalent. Where no such type exists, one leg is
//! itself composed:
//!
//! - `Rgb565 <-> Hsv888` via `Rgb888`, then `Rgb888 <-> Hsv32 <-> Hsv888`
//! - `LinearRgb888 <-> Hsv888` via `Rgb888`, then `Rgb888 <-> Hsv32 <-> Hsv888`
//! - `LinearRgb888 <-> Hsv48` via `Rgb16`, reached through `LinearRgb16`
//! - `LinearRgb16 <-> Hsv888` via `Rgb16`, then `Rgb16 <-> Hsv48 <-> Hsv888`
//!
//! `LinearRgb16 <-> Hsv32` and `LinearRgb16 <-> HsvDecimal` go through
//! `Rgb16` and `Hsv48` rather than the direct legs through `Rgb888`. The
//! 8-bit route would quantize RGB before the hue is computed.

use crate::color::{
    Hsv32, Hsv48, Hsv888, HsvDecimal, LinearRgb16, LinearRgb888, Rgb16, Rgb565, Rgb888,
};

/// `A <-> C` by way of `B`, in both directions.
macro_rules! compose {
    ($a:ident via $b:ident <=> $c:ident) => {
        impl From<$c> for $a {
            #[inline]
            fn from(x: $c) -> Self {
                $a::from($b::from(x))
            }
        }

        impl From<$a> for $c {
            #[inline]
            fn from(x: $a) -> Self {
                $c::from($b::from(x))
            }
        }
    };
}

// sRGB <-> HSV
compose!(Rgb565 via Rgb888 <=> Hsv888);
compose!(Rgb565 via Rgb888 <=> HsvDecimal);
compose!(Rgb565 via Rgb888 <=> Hsv32);
compose!(Rgb565 via Rgb16 <=> Hsv48);
compose!(Rgb888 via Hsv32 <=> Hsv888);
compose!(Rgb888 via Hsv32 <=> Hsv48);
compose!(Rgb16 via Hsv48 <=> Hsv888);
compose!(Rgb16 via Hsv48 <=> HsvDecimal);
compose!(Rgb16 via Hsv48 <=> Hsv32);

// sRGB <-> linear
compose!(Rgb565 via Rgb888 <=> LinearRgb888);
compose!(Rgb565 via Rgb16 <=> LinearRgb16);
compose!(Rgb16 via LinearRgb16 <=> LinearRgb888);

// linear <-> HSV
compose!(LinearRgb888 via Rgb888 <=> Hsv888);
compose!(LinearRgb888 via Rgb888 <=> HsvDecimal);
compose!(LinearRgb888 via Rgb888 <=> Hsv32);
compose!(LinearRgb888 via Rgb16 <=> Hsv48);
compose!(LinearRgb16 via Rgb16 <=> Hsv888);
compose!(LinearRgb16 via Rgb16 <=> HsvDecimal);
compose!(LinearRgb16 via Rgb16 <=> Hsv32);
compose!(LinearRgb16 via Rgb16 <=> Hsv48);
