use std::fmt;

use okcolor::{Color, ColorSpace};

use crate::error::ConvertError;
use crate::models::{AppConfig, ColorReport, ConversionReport};
use crate::services::value_parser::{self, ValueSyntax};

/// One finished conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    pub input: Color,
    pub output: Color,
}

impl Conversion {
    pub fn report(&self) -> ConversionReport {
        ConversionReport {
            input: ColorReport::from(self.input),
            output: ColorReport::from(self.output),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.input, self.output)
    }
}

/// Resolves command-line values against the configuration and converts them
pub struct Converter<'a> {
    config: &'a AppConfig,
}

impl<'a> Converter<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    /// Convert `value` into the target space.
    ///
    /// `from` and `to` are space names from the command line; when absent the
    /// config defaults apply. `from` is only needed for channel triples.
    pub fn convert(
        &self,
        value: &str,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<Conversion, ConvertError> {
        let from = parse_space(from)?;
        let to = parse_space(to)?
            .or(self.config.default_to)
            .ok_or(ConvertError::MissingTarget)?;

        let input = self.resolve(value, from)?;
        let output = input.convert(to);
        tracing::debug!(
            from = %input.space(),
            to = %to,
            input = ?input.channels(),
            output = ?output.channels(),
            "Converted"
        );

        Ok(Conversion { input, output })
    }

    /// Turn a value into a color in its source space.
    pub fn resolve(&self, value: &str, from: Option<ColorSpace>) -> Result<Color, ConvertError> {
        match value_parser::classify(value) {
            ValueSyntax::Name(name) => {
                let swatch = self
                    .config
                    .swatch(name)
                    .ok_or_else(|| ConvertError::UnknownSwatch(name.to_string()))?;
                if let Some(from) = from.filter(|from| *from != swatch.space) {
                    tracing::warn!(
                        swatch = name,
                        requested = %from,
                        declared = %swatch.space,
                        "Ignoring --from for a swatch"
                    );
                }
                value_parser::parse_literal(&swatch.value, Some(swatch.space))
            }
            ValueSyntax::Channels(_) => {
                value_parser::parse_literal(value, from.or(self.config.default_from))
            }
            ValueSyntax::Hex(_) | ValueSyntax::Packed(_) => {
                value_parser::parse_literal(value, from)
            }
        }
    }
}

fn parse_space(name: Option<&str>) -> Result<Option<ColorSpace>, ConvertError> {
    Ok(name.map(str::parse).transpose()?)
}

/// Table of supported spaces and their channel ranges
pub fn spaces_table() -> String {
    let mut out = String::new();
    for space in ColorSpace::ALL {
        let channels: Vec<String> = space
            .channel_names()
            .iter()
            .zip(space.channel_maxima())
            .map(|(name, max)| format!("{name} 0-{max}"))
            .collect();
        out.push_str(&format!("{:<15}{}\n", space.name(), channels.join(", ")));
    }
    out
}
