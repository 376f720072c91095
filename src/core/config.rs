//! Serializable logger configuration
//!
//! Mirrors the construction options of [`LoggerBuilder`](super::LoggerBuilder)
//! that can be expressed as data. Callbacks and custom appenders can only be
//! set on the builder.
//!
//! ```
//! use marvin_logger::LoggerConfig;
//!
//! let config = LoggerConfig::from_json_str(r#"{
//!     "level": "warn",
//!     "logOutputDirectory": "./logs",
//!     "logFormat": "{{DATETIME}} {{LOG}}",
//!     "debugFilter": { "literal": "[Db]" },
//!     "httpFilter": { "pattern": "^\\[(GET|POST)\\]" }
//! }"#).unwrap();
//!
//! assert_eq!(config.level.as_deref(), Some("warn"));
//! assert_eq!(config.filters().count(), 2);
//! ```

use super::channel::Channel;
use super::error::{LoggerError, Result};
use super::filter::FilterSpec;
use crate::appenders::RotationFrequency;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggerConfig {
    /// Minimum severity name, parsed permissively (default `debug`)
    pub level: Option<String>,
    pub log_output_directory: Option<PathBuf>,
    /// Line template (default `{{DATETIME}} {{PID}} {{LOG}}`)
    pub log_format: Option<String>,
    /// Embed `PID_<pid>` in log file names
    pub pid_in_filename: bool,
    pub use_colors: Option<bool>,
    pub rotation: Option<RotationFrequency>,
    pub debug_filter: Option<FilterSpec>,
    pub info_filter: Option<FilterSpec>,
    pub warn_filter: Option<FilterSpec>,
    pub error_filter: Option<FilterSpec>,
    pub important_filter: Option<FilterSpec>,
    pub http_filter: Option<FilterSpec>,
}

impl LoggerConfig {
    /// Parse a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns a JSON error for malformed input.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be read, or a JSON error for
    /// malformed content.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger configuration",
                format!("Failed to read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json_str(&content)
    }

    /// Configured filters with their channel
    pub fn filters(&self) -> impl Iterator<Item = (Channel, &FilterSpec)> {
        [
            (Channel::Debug, &self.debug_filter),
            (Channel::Info, &self.info_filter),
            (Channel::Warn, &self.warn_filter),
            (Channel::Error, &self.error_filter),
            (Channel::Important, &self.important_filter),
            (Channel::Http, &self.http_filter),
        ]
        .into_iter()
        .filter_map(|(channel, spec)| spec.as_ref().map(|spec| (channel, spec)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_config_is_default() {
        let config = LoggerConfig::from_json_str("{}").unwrap();
        assert_eq!(config, LoggerConfig::default());
        assert_eq!(config.filters().count(), 0);
    }

    #[test]
    fn test_camel_case_keys() {
        let config = LoggerConfig::from_json_str(
            r#"{"pidInFilename": true, "useColors": false, "rotation": "hourly",
                "importantFilter": {"literal": "!"}}"#,
        )
        .unwrap();
        assert!(config.pid_in_filename);
        assert_eq!(config.use_colors, Some(false));
        assert_eq!(config.rotation, Some(RotationFrequency::Hourly));

        let filters: Vec<_> = config.filters().collect();
        assert_eq!(filters, vec![(Channel::Important, &FilterSpec::Literal("!".to_string()))]);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = LoggerConfig::from_json_str(r#"{"level": "info", "colour": "red"}"#).unwrap();
        assert_eq!(config.level.as_deref(), Some("info"));
    }

    #[test]
    fn test_malformed_json() {
        let err = LoggerConfig::from_json_str("{level:").unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logger.json");
        fs::write(&path, r#"{"level": "error", "logFormat": "{{LOG}}"}"#).unwrap();

        let config = LoggerConfig::from_file(&path).unwrap();
        assert_eq!(config.level.as_deref(), Some("error"));
        assert_eq!(config.log_format.as_deref(), Some("{{LOG}}"));

        let err = LoggerConfig::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
    }
}
