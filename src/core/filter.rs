//! Per-channel content filters
//!
//! A filter is evaluated against the plain (uncolored) argument string of a
//! logging call. A message whose text does not satisfy the filter of its
//! channel is not emitted.

use super::channel::Channel;
use super::error::{LoggerError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default)]
pub enum Filter {
    /// Every message passes
    #[default]
    None,
    /// Message passes iff it contains the substring
    Literal(String),
    /// Message passes iff the pattern matches somewhere in it
    Pattern(Regex),
}

impl Filter {
    pub fn literal(text: impl Into<String>) -> Self {
        Filter::Literal(text.into())
    }

    /// Compile a pattern filter.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidPattern`] if `pattern` is not a valid regex.
    pub fn pattern(pattern: &str) -> Result<Self> {
        Ok(Filter::Pattern(Regex::new(pattern)?))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Filter::None)
    }

    /// Whether `rendered` is rejected by this filter.
    pub fn is_excluded(&self, rendered: &str) -> bool {
        match self {
            Filter::None => false,
            Filter::Literal(needle) => !rendered.contains(needle.as_str()),
            Filter::Pattern(re) => !re.is_match(rendered),
        }
    }
}

impl From<&str> for Filter {
    fn from(text: &str) -> Self {
        Filter::literal(text)
    }
}

impl From<String> for Filter {
    fn from(text: String) -> Self {
        Filter::Literal(text)
    }
}

impl From<Regex> for Filter {
    fn from(re: Regex) -> Self {
        Filter::Pattern(re)
    }
}

/// Serializable filter description used by [`LoggerConfig`](super::LoggerConfig).
///
/// ```json
/// { "literal": "[Database]" }
/// { "pattern": "^\\[(Auth|Session)\\]" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterSpec {
    Literal(String),
    Pattern(String),
}

impl TryFrom<FilterSpec> for Filter {
    type Error = LoggerError;

    fn try_from(spec: FilterSpec) -> Result<Self> {
        match spec {
            FilterSpec::Literal(text) => Ok(Filter::Literal(text)),
            FilterSpec::Pattern(pattern) => Filter::pattern(&pattern),
        }
    }
}

/// One filter slot per channel.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    slots: [Filter; 6],
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, channel: Channel) -> &Filter {
        &self.slots[channel.index()]
    }

    pub fn set(&mut self, channel: Channel, filter: Filter) {
        self.slots[channel.index()] = filter;
    }

    pub fn is_excluded(&self, channel: Channel, rendered: &str) -> bool {
        self.get(channel).is_excluded(rendered)
    }
}
