//! Period-rotating append stream
//!
//! This module provides the stream behind the file sink: it appends lines to
//! a file whose name embeds the current period (day or hour), and switches to
//! a new dated file when the period changes.

use crate::core::clock::Clock;
use crate::core::error::{LoggerError, Result};
use crate::core::timestamp::TimestampFormat;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Placeholder replaced by the period stamp in a [`FilenamePattern`]
const DATE_PLACEHOLDER: &str = "%DATE%";

/// How often the stream starts a new dated file
///
/// # Examples
///
/// ```
/// use marvin_logger::appenders::RotationFrequency;
/// use chrono::{Local, TimeZone};
///
/// let at = Local.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(RotationFrequency::Daily.period_key(&at), "2025-01-08");
/// assert_eq!(RotationFrequency::Hourly.period_key(&at), "2025-01-08-10");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationFrequency {
    /// New file every calendar day (default)
    #[default]
    Daily,

    /// New file every hour
    Hourly,
}

impl RotationFrequency {
    /// Stamp identifying the period that contains `at`
    #[must_use]
    pub fn period_key(&self, at: &DateTime<Local>) -> String {
        self.timestamp_format().format(at)
    }

    fn timestamp_format(&self) -> TimestampFormat {
        match self {
            RotationFrequency::Daily => TimestampFormat::FileDate,
            RotationFrequency::Hourly => TimestampFormat::FileHour,
        }
    }
}

/// Log file name containing a `%DATE%` placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenamePattern(String);

impl FilenamePattern {
    /// Create a pattern.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `pattern` lacks `%DATE%` or contains a
    /// path separator.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if !pattern.contains(DATE_PLACEHOLDER) {
            return Err(LoggerError::config(
                "FilenamePattern",
                format!("'{}' does not contain {}", pattern, DATE_PLACEHOLDER),
            ));
        }
        if pattern.contains('/') || pattern.contains('\\') {
            return Err(LoggerError::config(
                "FilenamePattern",
                format!("'{}' must be a file name, not a path", pattern),
            ));
        }
        Ok(Self(pattern))
    }

    /// `PID_<pid>-%DATE%.log`
    #[must_use]
    pub fn with_pid() -> Self {
        Self(format!("PID_{}-{}.log", std::process::id(), DATE_PLACEHOLDER))
    }

    #[must_use]
    pub fn file_name(&self, period_key: &str) -> String {
        self.0.replace(DATE_PLACEHOLDER, period_key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FilenamePattern {
    fn default() -> Self {
        Self(format!("{}.log", DATE_PLACEHOLDER))
    }
}

/// Append stream that rotates to a new dated file once per period
///
/// # Examples
///
/// ```no_run
/// use marvin_logger::appenders::{FilenamePattern, RotatingFileStream, RotationFrequency};
/// use marvin_logger::SystemClock;
/// use std::sync::Arc;
///
/// let mut stream = RotatingFileStream::open(
///     "/var/log/myapp",
///     FilenamePattern::default(),
///     RotationFrequency::Daily,
///     Arc::new(SystemClock),
/// ).unwrap();
/// stream.write("2025/01/08 10:30:45 PID_42 started\n").unwrap();
/// ```
pub struct RotatingFileStream {
    directory: PathBuf,
    pattern: FilenamePattern,
    frequency: RotationFrequency,
    clock: Arc<dyn Clock>,
    period: String,
    path: PathBuf,
    writer: BufWriter<File>,
}

impl RotatingFileStream {
    /// Open the file for the current period inside `directory`.
    ///
    /// The directory must already exist.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be created or opened
    pub fn open<P: AsRef<Path>>(
        directory: P,
        pattern: FilenamePattern,
        frequency: RotationFrequency,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let directory = directory.as_ref().to_path_buf();
        let period = frequency.period_key(&clock.now());
        let path = directory.join(pattern.file_name(&period));
        let writer = BufWriter::new(Self::open_file(&path)?);

        Ok(Self {
            directory,
            pattern,
            frequency,
            clock,
            period,
            path,
            writer,
        })
    }

    fn open_file(path: &Path) -> Result<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::file_appender(
                    path.display().to_string(),
                    format!("Failed to open: {}", e),
                )
            })
    }

    /// Append `data` to the file of the current period.
    ///
    /// # Errors
    ///
    /// Returns error if rotation or the write itself fails
    pub fn write(&mut self, data: &str) -> Result<()> {
        let period = self.frequency.period_key(&self.clock.now());
        if period != self.period {
            self.rotate(period)?;
        }

        self.writer
            .write_all(data.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|e| {
                LoggerError::file_appender(
                    self.path.display().to_string(),
                    format!("Failed to write log line: {}", e),
                )
            })
    }

    /// Switch to the file of `period`. On failure the current file stays open.
    fn rotate(&mut self, period: String) -> Result<()> {
        let path = self.directory.join(self.pattern.file_name(&period));
        let file = Self::open_file(&path)?;

        let previous = std::mem::replace(&mut self.writer, BufWriter::new(file));
        if let Err(e) = previous.into_inner().map_err(|e| e.into_error()) {
            eprintln!(
                "[LOGGER WARNING] Failed to flush {} before rotation: {}",
                self.path.display(),
                e
            );
        }

        self.period = period;
        self.path = path;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| {
            LoggerError::file_appender(
                self.path.display().to_string(),
                format!("Failed to flush: {}", e),
            )
        })
    }

    /// Path of the file currently written to
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
