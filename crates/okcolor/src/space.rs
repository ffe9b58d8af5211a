//! Runtime selection of color representations
//!
//! The `From` impls cover every pair of types at compile time. When the
//! source or target representation is only known at runtime (a command-line
//! flag, a config file), use [`ColorSpace`] to name it and [`Color`] to carry a
//! value of any representation.
//!
//! # Example
//!
//! ```
//! use okcolor::{Color, ColorSpace};
//!
//! let space: ColorSpace = "hsv-decimal".parse().unwrap();
//! let red = Color::from_channels(ColorSpace::Rgb888, [255, 0, 0]);
//!
//! let hsv = red.convert(space);
//! assert_eq!(hsv.channels(), [0, 100, 100]);
//! assert_eq!(hsv.to_string(), "hsv-decimal(0, 100, 100)");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::color::{
    Hsv32, Hsv48, Hsv888, HsvDecimal, LinearRgb16, LinearRgb888, Rgb16, Rgb565, Rgb888,
};

/// A three-channel color value with a fixed representation.
///
/// Implemented by every color type in this crate.
pub trait ColorValue: Copy {
    /// The representation this type implements.
    const SPACE: ColorSpace;
    /// Channel names in storage order, e.g. `["h", "s", "v"]`.
    const CHANNEL_NAMES: [&'static str; 3];
    /// Largest nominal value of each channel.
    const CHANNEL_MAXIMA: [u32; 3];

    /// Build a value from raw channels. Values wider than a channel are
    /// truncated, not validated.
    fn from_channels(channels: [u32; 3]) -> Self;

    /// The channels in storage order.
    fn channels(self) -> [u32; 3];
}

/// Error returned when a color space name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorSpaceError {
    name: String,
}

impl ParseColorSpaceError {
    /// The name that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseColorSpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color space '{}'", self.name)
    }
}

impl std::error::Error for ParseColorSpaceError {}

macro_rules! color_spaces {
    ($($variant:ident => $name:literal $(| $alias:literal)*),+ $(,)?) => {
        /// One of the supported color representations.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ColorSpace {
            $(
                #[doc = concat!("[`", stringify!($variant), "`] values")]
                $variant,
            )+
        }

        impl ColorSpace {
            /// Every representation, RGB family first.
            pub const ALL: [ColorSpace; 9] = [$(ColorSpace::$variant),+];

            /// Canonical name, as accepted by [`FromStr`].
            pub const fn name(self) -> &'static str {
                match self {
                    $(ColorSpace::$variant => $name,)+
                }
            }

            /// Channel names in storage order.
            pub const fn channel_names(self) -> [&'static str; 3] {
                match self {
                    $(ColorSpace::$variant => <$variant as ColorValue>::CHANNEL_NAMES,)+
                }
            }

            /// Largest nominal value of each channel.
            pub const fn channel_maxima(self) -> [u32; 3] {
                match self {
                    $(ColorSpace::$variant => <$variant as ColorValue>::CHANNEL_MAXIMA,)+
                }
            }
        }

        impl FromStr for ColorSpace {
            type Err = ParseColorSpaceError;

            /// Parse a canonical name or alias. Case-insensitive; `_` and `-`
            /// are interchangeable.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
                match normalized.as_str() {
                    $($name $(| $alias)* => Ok(ColorSpace::$variant),)+
                    _ => Err(ParseColorSpaceError { name: s.trim().to_string() }),
                }
            }
        }

        /// A color value in any supported representation.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Color {
            $($variant($variant),)+
        }

        impl Color {
            /// Build a value from raw channels without validating them.
            pub fn from_channels(space: ColorSpace, channels: [u32; 3]) -> Self {
                match space {
                    $(ColorSpace::$variant => Color::$variant($variant::from_channels(channels)),)+
                }
            }

            /// The representation of this value.
            pub fn space(self) -> ColorSpace {
                match self {
                    $(Color::$variant(_) => ColorSpace::$variant,)+
                }
            }

            /// The channels in storage order.
            pub fn channels(self) -> [u32; 3] {
                match self {
                    $(Color::$variant(c) => c.channels(),)+
                }
            }

            /// Convert to another representation. Converting to the value's
            /// own representation returns it unchanged.
            pub fn convert(self, target: ColorSpace) -> Color {
                match self {
                    $(Color::$variant(c) => convert_value(c, target),)+
                }
            }
        }

        fn convert_value<T>(value: T, target: ColorSpace) -> Color
        where
            $($variant: From<T>,)+
        {
            match target {
                $(ColorSpace::$variant => Color::$variant($variant::from(value)),)+
            }
        }

        $(
            impl From<$variant> for Color {
                fn from(value: $variant) -> Self {
                    Color::$variant(value)
                }
            }
        )+
    };
}

color_spaces! {
    Rgb565 => "rgb565" | "srgb565",
    Rgb888 => "rgb888" | "srgb888" | "srgb" | "rgb24",
    Rgb16 => "rgb16" | "srgb16" | "rgb48" | "srgb48",
    LinearRgb888 => "linear-rgb888" | "lrgb888" | "lrgb24",
    LinearRgb16 => "linear-rgb16" | "lrgb16" | "lrgb48",
    Hsv888 => "hsv888" | "hsv24",
    HsvDecimal => "hsv-decimal" | "hsv360" | "hsv-deg",
    Hsv32 => "hsv32",
    Hsv48 => "hsv48",
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.channels();
        write!(f, "{}({}, {}, {})", self.space(), a, b, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for space in ColorSpace::ALL {
            assert_eq!(space.name().parse::<ColorSpace>(), Ok(space));
            assert_eq!(space.to_string(), space.name());
        }
    }

    #[test]
    fn test_aliases_and_normalization() {
        assert_eq!("SRGB".parse(), Ok(ColorSpace::Rgb888));
        assert_eq!("rgb48".parse(), Ok(ColorSpace::Rgb16));
        assert_eq!("linear_rgb16".parse(), Ok(ColorSpace::LinearRgb16));
        assert_eq!(" HSV360 ".parse(), Ok(ColorSpace::HsvDecimal));
    }

    #[test]
    fn test_unknown_name() {
        let err = "cmyk".parse::<ColorSpace>().unwrap_err();
        assert_eq!(err.name(), "cmyk");
        assert_eq!(err.to_string(), "unknown color space 'cmyk'");
    }

    #[test]
    fn test_channel_metadata() {
        assert_eq!(ColorSpace::Rgb565.channel_maxima(), [31, 63, 31]);
        assert_eq!(ColorSpace::HsvDecimal.channel_maxima(), [359, 100, 100]);
        assert_eq!(ColorSpace::Hsv32.channel_names(), ["h", "s", "v"]);
        assert_eq!(ColorSpace::LinearRgb16.channel_names(), ["r", "g", "b"]);
    }

    #[test]
    fn test_from_channels_round_trip() {
        let color = Color::from_channels(ColorSpace::Hsv32, [40000, 12, 200]);
        assert_eq!(color, Color::Hsv32(Hsv32::new(40000, 12, 200)));
        assert_eq!(color.space(), ColorSpace::Hsv32);
        assert_eq!(color.channels(), [40000, 12, 200]);
    }

    #[test]
    fn test_convert_matches_from_impls() {
        let rgb = Rgb888::new(200, 100, 50);
        let color = Color::from(rgb);
        assert_eq!(color.convert(ColorSpace::Hsv48), Color::Hsv48(Hsv48::from(rgb)));
        assert_eq!(color.convert(ColorSpace::Rgb565), Color::Rgb565(Rgb565::from(rgb)));
        assert_eq!(
            color.convert(ColorSpace::LinearRgb888),
            Color::LinearRgb888(LinearRgb888::from(rgb))
        );
        assert_eq!(color.convert(ColorSpace::Rgb888), color);
    }

    #[test]
    fn test_every_pair_is_reachable() {
        for from in ColorSpace::ALL {
            for to in ColorSpace::ALL {
                let color = Color::from_channels(from, [1, 1, 1]).convert(to);
                assert_eq!(color.space(), to, "{from} -> {to}");
            }
        }
    }

    #[test]
    fn test_display() {
        let color = Color::from(HsvDecimal::new(120, 100, 50));
        assert_eq!(color.to_string(), "hsv-decimal(120, 100, 50)");
        let color = Color::from(Rgb16::new(1, 2, 3));
        assert_eq!(color.to_string(), "rgb16(1, 2, 3)");
        let color = Color::from(LinearRgb16::new(65535, 0, 14146));
        assert_eq!(color.to_string(), "linear-rgb16(65535, 0, 14146)");
        assert_eq!(Color::from(Hsv888::new(171, 255, 255)).to_string(), "hsv888(171, 255, 255)");
    }
}
