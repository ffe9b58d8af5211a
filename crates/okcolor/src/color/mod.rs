//! Color value types and their direct conversions
//!
//! Each type is a plain triple of unsigned channels. Conversions are `From`
//! impls: `Hsv888::from(rgb)`, `let lin: LinearRgb16 = srgb.into()`.
//!
//! # Representations
//!
//! | Type | Channels | Notes |
//! |------|----------|-------|
//! | [`Rgb565`] | r 0-31, g 0-63, b 0-31 | packed 16-bit sRGB |
//! | [`Rgb888`] | 0-255 | sRGB, `#rrggbb` codes |
//! | [`Rgb16`] | 0-65535 | sRGB |
//! | [`LinearRgb888`] | 0-255 | linear light, lossy |
//! | [`LinearRgb16`] | 0-65535 | linear light |
//! | [`Hsv888`] | 0-255 | hue wraps at 256 |
//! | [`HsvDecimal`] | h 0-359, s/v 0-100 | degrees and percent |
//! | [`Hsv32`] | h 0-65535, s/v 0-255 | |
//! | [`Hsv48`] | 0-65535 | |
//!
//! Conversions between types that are not directly related route through one
//! intermediate type; those are defined in the crate's `convert` module.

/// `From` impls in both directions for two encodings of the same model whose
/// channels rescale independently.
///
/// `widen` marks a channel whose range is larger in the right-hand type,
/// `narrow` one whose range is smaller there.
macro_rules! rescale_channels {
    ($a:ident, $b:ident { $($field:ident: $dir:ident($rescale:path)),+ $(,)? }) => {
        impl From<$b> for $a {
            #[inline]
            fn from(x: $b) -> Self {
                Self { $($field: rescale_channels!(@left $dir $rescale, x.$field)),+ }
            }
        }

        impl From<$a> for $b {
            #[inline]
            fn from(x: $a) -> Self {
                Self { $($field: rescale_channels!(@right $dir $rescale, x.$field)),+ }
            }
        }
    };
    (@left widen $rescale:path, $value:expr) => { $rescale.to_small($value as u32) as _ };
    (@left narrow $rescale:path, $value:expr) => { $rescale.to_large($value as u32) as _ };
    (@right widen $rescale:path, $value:expr) => { $rescale.to_large($value as u32) as _ };
    (@right narrow $rescale:path, $value:expr) => { $rescale.to_small($value as u32) as _ };
}

/// [`ColorValue`](crate::space::ColorValue) impl listing channels in order with
/// their maxima.
macro_rules! color_value {
    ($ty:ident, $space:ident, [$($field:ident: $max:expr),+ $(,)?]) => {
        impl crate::space::ColorValue for $ty {
            const SPACE: crate::space::ColorSpace = crate::space::ColorSpace::$space;
            const CHANNEL_NAMES: [&'static str; 3] = [$(stringify!($field)),+];
            const CHANNEL_MAXIMA: [u32; 3] = [$($max),+];

            #[inline]
            fn from_channels([$($field),+]: [u32; 3]) -> Self {
                Self { $($field: $field as _),+ }
            }

            #[inline]
            fn channels(self) -> [u32; 3] {
                [$(self.$field as u32),+]
            }
        }
    };
}

mod error;
mod hsv;
mod linear_rgb;
mod rgb;

pub use error::ParseColorError;
pub use hsv::{Hsv32, Hsv48, Hsv888, HsvDecimal};
pub use linear_rgb::{LinearRgb16, LinearRgb888};
pub use rgb::{Rgb16, Rgb565, Rgb888};
