use std::path::PathBuf;

use okcolor::{ColorSpace, ParseColorError, ParseColorSpaceError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    UnknownSpace(#[from] ParseColorSpaceError),

    #[error("{space} takes 3 channels, found {found}")]
    WrongChannelCount { space: ColorSpace, found: usize },

    #[error("Invalid channel value '{0}'")]
    InvalidChannel(String),

    #[error("Channel {channel} = {value} is out of range for {space} (max {max})")]
    ChannelOutOfRange {
        space: ColorSpace,
        channel: &'static str,
        value: u32,
        max: u32,
    },

    #[error("Invalid packed RGB565 word '{0}'")]
    InvalidPacked(String),

    #[error("Invalid hex color: {0}")]
    ParseColor(#[from] ParseColorError),

    #[error("'{value}' is not a {space} value")]
    SourceMismatch { value: String, space: ColorSpace },

    #[error("Unknown swatch '{0}'")]
    UnknownSwatch(String),

    #[error("No source color space: pass --from or set default_from")]
    MissingSource,

    #[error("No target color space: pass --to or set default_to")]
    MissingTarget,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid swatch '{name}': {source}")]
    InvalidSwatch {
        name: String,
        #[source]
        source: ConvertError,
    },
}
