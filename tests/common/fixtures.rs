//! Test fixtures and constants.

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Config with defaults and a few swatches
pub const SAMPLE_CONFIG: &str = r##"
default_from: rgb888
default_to: hsv-decimal
swatches:
  brand:
    space: rgb888
    value: "#ff8800"
  panel-green:
    space: rgb565
    value: "0x07e0"
  warm-white:
    space: linear-rgb16
    value: "65535, 50000, 30000"
"##;

/// A config file that lives as long as the fixture
pub struct TestConfig {
    file: NamedTempFile,
}

impl TestConfig {
    pub fn new(yaml: &str) -> Self {
        let mut file = NamedTempFile::new().expect("Failed to create temp config");
        file.write_all(yaml.as_bytes())
            .expect("Failed to write temp config");
        Self { file }
    }

    pub fn sample() -> Self {
        Self::new(SAMPLE_CONFIG)
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn path_str(&self) -> &str {
        self.file.path().to_str().expect("Temp path is not UTF-8")
    }
}
