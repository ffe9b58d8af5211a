pub mod config;
pub mod report;

pub use config::{AppConfig, OutputFormat, Swatch};
pub use report::{ColorReport, ConversionReport};
