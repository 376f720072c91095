//! Logging channels

use super::severity::Severity;
use std::fmt;

/// One of the six named entry points of a [`Logger`](super::Logger).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Debug,
    Info,
    Warn,
    Error,
    Important,
    Http,
}

impl Channel {
    pub const ALL: [Channel; 6] = [
        Channel::Debug,
        Channel::Info,
        Channel::Warn,
        Channel::Error,
        Channel::Important,
        Channel::Http,
    ];

    /// Severity used for the minimum-level gate.
    ///
    /// `Important` and `Http` have none and are never gated by level.
    pub fn severity(&self) -> Option<Severity> {
        match self {
            Channel::Debug => Some(Severity::Debug),
            Channel::Info => Some(Severity::Info),
            Channel::Warn => Some(Severity::Warn),
            Channel::Error => Some(Severity::Error),
            Channel::Important | Channel::Http => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Channel::Debug => "debug",
            Channel::Info => "info",
            Channel::Warn => "warn",
            Channel::Error => "error",
            Channel::Important => "important",
            Channel::Http => "http",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
