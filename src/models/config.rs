use okcolor::ColorSpace;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::services::value_parser;

/// Environment variable naming the config file when `--config` is not given
pub const CONFIG_ENV: &str = "OKCONV_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Source space for bare channel triples when `--from` is not given
    #[serde(default, deserialize_with = "optional_space")]
    pub default_from: Option<ColorSpace>,

    /// Target space when `--to` is not given
    #[serde(default, deserialize_with = "optional_space")]
    pub default_to: Option<ColorSpace>,

    /// Output format when `--format` is not given
    #[serde(default)]
    pub output: OutputFormat,

    /// Named colors usable in place of a value
    #[serde(default)]
    pub swatches: BTreeMap<String, Swatch>,
}

/// A named color with its source space
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Swatch {
    #[serde(deserialize_with = "space")]
    pub space: ColorSpace,

    /// Channel triple, `#hex` or packed `0xHHHH`, as on the command line
    pub value: String,
}

/// How conversion results are printed
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn space<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ColorSpace, D::Error> {
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

fn optional_space<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<ColorSpace>, D::Error> {
    let name: Option<String> = Option::deserialize(deserializer)?;
    name.map(|n| n.parse().map_err(serde::de::Error::custom))
        .transpose()
}

impl AppConfig {
    /// Config path from the command line, falling back to `OKCONV_CONFIG`
    pub fn locate(cli_path: Option<PathBuf>) -> Option<PathBuf> {
        cli_path.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    /// Load configuration from `path`.
    ///
    /// No path, or a path that does not exist, gives the defaults. A file
    /// that exists but cannot be read or parsed is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            tracing::debug!("No config file set, using defaults");
            return Ok(Self::default());
        };

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "Config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            swatches = config.swatches.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // An empty file is a valid, empty config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every swatch value parses in its declared space
    fn validate(&self) -> Result<(), ConfigError> {
        for (name, swatch) in &self.swatches {
            value_parser::parse_literal(&swatch.value, Some(swatch.space)).map_err(|source| {
                ConfigError::InvalidSwatch {
                    name: name.clone(),
                    source,
                }
            })?;
        }
        Ok(())
    }

    /// Look up a swatch by name, case-insensitively
    pub fn swatch(&self, name: &str) -> Option<&Swatch> {
        self.swatches.get(name).or_else(|| {
            self.swatches
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, swatch)| swatch)
        })
    }
}
