//! Severity definitions

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Minimum severity threshold of a logger.
///
/// `None` sits above every real severity, so a logger configured with it
/// suppresses all severity-gated channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    None = 4,
}

impl Severity {
    /// Parse a severity from its name.
    ///
    /// This parser is permissive: only the first character is inspected,
    /// case-insensitively (`n`, `e`, `w`, `i`), and everything else,
    /// including an empty string, yields [`Severity::Debug`].
    ///
    /// ```
    /// use marvin_logger::Severity;
    ///
    /// assert_eq!(Severity::parse("Warning"), Severity::Warn);
    /// assert_eq!(Severity::parse("e"), Severity::Error);
    /// assert_eq!(Severity::parse("#"), Severity::Debug);
    /// ```
    pub fn parse(text: &str) -> Self {
        match text.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('n') => Severity::None,
            Some('e') => Severity::Error,
            Some('w') => Severity::Warn,
            Some('i') => Severity::Info,
            _ => Severity::Debug,
        }
    }

    #[inline]
    pub fn is_at_least(self, minimum: Severity) -> bool {
        self >= minimum
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::None => "NONE",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Severity::parse(s))
    }
}
