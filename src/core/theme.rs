//! Console color theme

use super::channel::Channel;
use colored::Color;

/// Colors used for console rendering.
///
/// Each channel has one color, applied to the message (or to its leading
/// `[Tag]`). The datetime and pid tokens have their own colors, and structured
/// arguments use the `json_*` colors token by token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTheme {
    pub datetime: Color,
    pub pid: Color,
    pub debug: Color,
    pub info: Color,
    pub warn: Color,
    pub error: Color,
    pub important: Color,
    pub http: Color,
    pub json_key: Color,
    pub json_string: Color,
    pub json_number: Color,
    pub json_literal: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            datetime: Color::BrightBlack,
            pid: Color::Magenta,
            debug: Color::Blue,
            info: Color::Green,
            warn: Color::Yellow,
            error: Color::Red,
            important: Color::Magenta,
            http: Color::Cyan,
            json_key: Color::BrightBlue,
            json_string: Color::Green,
            json_number: Color::Yellow,
            json_literal: Color::BrightBlack,
        }
    }
}

impl ColorTheme {
    pub fn channel(&self, channel: Channel) -> Color {
        match channel {
            Channel::Debug => self.debug,
            Channel::Info => self.info,
            Channel::Warn => self.warn,
            Channel::Error => self.error,
            Channel::Important => self.important,
            Channel::Http => self.http,
        }
    }

    #[must_use]
    pub fn with_channel(mut self, channel: Channel, color: Color) -> Self {
        match channel {
            Channel::Debug => self.debug = color,
            Channel::Info => self.info = color,
            Channel::Warn => self.warn = color,
            Channel::Error => self.error = color,
            Channel::Important => self.important = color,
            Channel::Http => self.http = color,
        }
        self
    }
}
