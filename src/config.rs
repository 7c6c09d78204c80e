use std::ffi::OsString;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use tracing::Level;

use crate::pipeline::AnalysisConfig;

/// Process-wide settings for the upload boundary.
///
/// Sources, lowest priority first: built-in defaults, an optional
/// `dustcheck.toml`, then `DUSTCHECK_*` environment variables (nested keys
/// use `__`, e.g. `DUSTCHECK_ANALYSIS__CLEAN_CUTOFF`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub upload_dir: PathBuf,
    pub annotated_prefix: String,
    pub log_level: String,
    pub analysis: AnalysisConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads"),
            annotated_prefix: "dusty_".to_string(),
            log_level: "info".to_string(),
            analysis: AnalysisConfig::default(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("dustcheck")
    }

    pub fn load_from(file: &str) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .add_source(File::with_name(file).required(false))
            .add_source(
                Environment::with_prefix("DUSTCHECK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.max_log_level()?;
        Ok(settings)
    }

    pub fn with_upload_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.upload_dir = dir.into();
        self
    }

    /// Where the annotated copy of `source` is written, or `None` when the
    /// path has no file name.
    pub fn annotated_path_for(&self, source: &Path) -> Option<PathBuf> {
        let file_name = source.file_name()?;
        let mut name = OsString::from(&self.annotated_prefix);
        name.push(file_name);
        Some(self.upload_dir.join(name))
    }

    pub fn max_log_level(&self) -> Result<Level, ConfigError> {
        self.log_level.parse().map_err(|_| {
            ConfigError::Message(format!(
                "log_level must be one of trace, debug, info, warn or error, got {:?}",
                self.log_level
            ))
        })
    }
}
