//! Timestamp formatting utilities
//!
//! Provides the timestamp formats used for console lines, file lines and
//! dated log file names.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use marvin_logger::TimestampFormat;
/// use chrono::{Local, TimeZone};
///
/// let at = Local.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::ConsoleTime.format(&at), "10:30:45");
/// assert_eq!(TimestampFormat::FileDateTime.format(&at), "2025/01/08 10:30:45");
/// assert_eq!(TimestampFormat::FileDate.format(&at), "2025-01-08");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Time of day: `10:30:45`
    ///
    /// Default for console lines.
    #[default]
    ConsoleTime,

    /// Date and time: `2025/01/08 10:30:45`
    ///
    /// Default for file lines.
    FileDateTime,

    /// Calendar date: `2025-01-08`
    ///
    /// Used in daily log file names.
    FileDate,

    /// Calendar date and hour: `2025-01-08-10`
    ///
    /// Used in hourly log file names.
    FileHour,

    /// Custom strftime format
    ///
    /// # Examples
    ///
    /// ```
    /// use marvin_logger::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a datetime according to this format
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        datetime.format(self.pattern()).to_string()
    }

    /// The strftime pattern behind this format
    #[must_use]
    pub fn pattern(&self) -> &str {
        match self {
            TimestampFormat::ConsoleTime => "%H:%M:%S",
            TimestampFormat::FileDateTime => "%Y/%m/%d %H:%M:%S",
            TimestampFormat::FileDate => "%Y-%m-%d",
            TimestampFormat::FileHour => "%Y-%m-%d-%H",
            TimestampFormat::Custom(format_str) => format_str,
        }
    }
}
