//! Logger configuration
//!
//! ```toml
//! report_path = "out/report.txt"
//! log_path = "out/run.log"
//! log_enabled = true   # optional, defaults to true
//! ```

use crate::errors::{Result, TrilogError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Destinations and the log-sink switch
///
/// Immutable once built; the enable flag only changes what calls do.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    report_path: PathBuf,
    log_path: PathBuf,
    #[serde(default = "default_log_enabled")]
    log_enabled: bool,
}

fn default_log_enabled() -> bool {
    true
}

impl LoggerConfig {
    pub fn new(
        report_path: impl Into<PathBuf>,
        log_path: impl Into<PathBuf>,
        log_enabled: bool,
    ) -> Self {
        Self {
            report_path: report_path.into(),
            log_path: log_path.into(),
            log_enabled,
        }
    }

    /// Parse a TOML document
    ///
    /// # Errors
    ///
    /// Returns `TrilogError::Config` on malformed TOML, missing destinations
    /// or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| TrilogError::Config {
            origin: None,
            message: e.to_string(),
        })
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    ///
    /// Returns `TrilogError::Io` if the file cannot be read and
    /// `TrilogError::Config` if it does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).map_err(|e| TrilogError::io("read_config", path, e))?;
        toml::from_str(&text).map_err(|e| TrilogError::Config {
            origin: Some(path.to_path_buf()),
            message: e.to_string(),
        })
    }

    pub fn report_path(&self) -> &Path {
        &self.report_path
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    pub fn log_enabled(&self) -> bool {
        self.log_enabled
    }

    /// Copy with the report destination replaced
    #[must_use]
    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = path.into();
        self
    }

    /// Copy with the log destination replaced
    #[must_use]
    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }

    /// Copy with the log sink switched on or off
    #[must_use]
    pub fn with_log_enabled(mut self, enabled: bool) -> Self {
        self.log_enabled = enabled;
        self
    }
}
