mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::log::{Level, LogConfig};

pub use loader::{config_dir, config_path, load, try_load};

/// Top-level configuration for rectops.
///
/// Loaded from `~/.config/rectops/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How results are printed.
    pub output: OutputConfig,
    /// File logging settings.
    pub logging: LogConfig,
}

/// Result printing settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format for command results.
    pub format: OutputFormat,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per result.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

impl Config {
    /// Normalizes values that are accepted by the parser but meaningless.
    ///
    /// Unknown log levels become `"info"` and the rotation size is kept
    /// between 1 MB and 1 GB.
    pub fn validate(&mut self) {
        let level = Level::parse(&self.logging.level);
        self.logging.level = format!("{level:?}").to_ascii_lowercase();
        self.logging.max_file_mb = self.logging.max_file_mb.clamp(1, 1024);
    }
}
