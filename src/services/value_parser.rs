//! Command-line color values
//!
//! A value is one of:
//! - a channel triple `a,b,c` in some source space
//! - a hex code `#rrggbb` / `#rgb`, always RGB888
//! - a packed word `0xhhhh`, always RGB565
//! - anything else is taken as a swatch name

use okcolor::{Color, ColorSpace, Rgb565, Rgb888};

use crate::error::ConvertError;

/// The syntactic form of a value, before any space is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSyntax<'a> {
    Channels(&'a str),
    Hex(&'a str),
    Packed(&'a str),
    Name(&'a str),
}

/// Classify a value by its shape.
pub fn classify(input: &str) -> ValueSyntax<'_> {
    let input = input.trim();
    if input.starts_with('#') {
        ValueSyntax::Hex(input)
    } else if let Some(digits) = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        ValueSyntax::Packed(digits)
    } else if input.contains(',') || input.starts_with(|c: char| c.is_ascii_digit()) {
        ValueSyntax::Channels(input)
    } else {
        ValueSyntax::Name(input)
    }
}

/// Parse a literal value (not a swatch name).
///
/// `space` is the source space for channel triples. For hex codes and packed
/// words it is optional, and must match their fixed space when given.
pub fn parse_literal(input: &str, space: Option<ColorSpace>) -> Result<Color, ConvertError> {
    match classify(input) {
        ValueSyntax::Hex(hex) => {
            expect_space(hex, ColorSpace::Rgb888, space)?;
            Ok(Color::from(hex.parse::<Rgb888>()?))
        }
        ValueSyntax::Packed(digits) => {
            expect_space(input.trim(), ColorSpace::Rgb565, space)?;
            let invalid = || ConvertError::InvalidPacked(input.trim().to_string());
            // from_str_radix would also take a sign
            if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let word = u16::from_str_radix(digits, 16).map_err(|_| invalid())?;
            Ok(Color::from(Rgb565::unpack(word)))
        }
        ValueSyntax::Channels(triple) => {
            let space = space.ok_or(ConvertError::MissingSource)?;
            Ok(Color::from_channels(space, parse_channels(triple, space)?))
        }
        ValueSyntax::Name(name) => Err(ConvertError::UnknownSwatch(name.to_string())),
    }
}

fn expect_space(
    value: &str,
    actual: ColorSpace,
    requested: Option<ColorSpace>,
) -> Result<(), ConvertError> {
    match requested {
        Some(space) if space != actual => Err(ConvertError::SourceMismatch {
            value: value.to_string(),
            space,
        }),
        _ => Ok(()),
    }
}

/// Parse `a,b,c` and check each channel against the space's maxima.
pub fn parse_channels(triple: &str, space: ColorSpace) -> Result<[u32; 3], ConvertError> {
    let parts: Vec<&str> = triple.split(',').map(str::trim).collect();
    let [a, b, c] = parts[..] else {
        return Err(ConvertError::WrongChannelCount {
            space,
            found: parts.len(),
        });
    };

    let mut channels = [0u32; 3];
    let limits = space.channel_names().into_iter().zip(space.channel_maxima());
    for ((slot, text), (channel, max)) in channels.iter_mut().zip([a, b, c]).zip(limits) {
        let value: u32 = text
            .parse()
            .map_err(|_| ConvertError::InvalidChannel(text.to_string()))?;
        if value > max {
            return Err(ConvertError::ChannelOutOfRange {
                space,
                channel,
                value,
                max,
            });
        }
        *slot = value;
    }
    Ok(channels)
}
