use okcolor::Color;
use serde::Serialize;

/// A color as printed in JSON output
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ColorReport {
    pub space: &'static str,
    pub channel_names: [&'static str; 3],
    pub channels: [u32; 3],

    /// `#rrggbb`, for RGB888 values only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,

    /// Packed `0xhhhh` word, for RGB565 values only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packed: Option<String>,
}

impl From<Color> for ColorReport {
    fn from(color: Color) -> Self {
        let space = color.space();
        let (hex, packed) = match color {
            Color::Rgb888(rgb) => (Some(rgb.to_hex()), None),
            Color::Rgb565(rgb) => (None, Some(format!("{:#06x}", rgb.pack()))),
            _ => (None, None),
        };

        Self {
            space: space.name(),
            channel_names: space.channel_names(),
            channels: color.channels(),
            hex,
            packed,
        }
    }
}

/// Input and output of one conversion
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConversionReport {
    pub input: ColorReport,
    pub output: ColorReport,
}
