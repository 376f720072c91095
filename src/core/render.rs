//! Line rendering
//!
//! Every emitted call is rendered twice: once for the console (colored,
//! time-of-day datetime) and once for the file (plain, full date, trailing
//! newline). Both renders go through the same [`LineTemplate`].

use super::channel::Channel;
use super::line_template::LineTemplate;
use super::log_arg::LogArg;
use super::theme::ColorTheme;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Local};
use colored::{Color, Colorize};
use serde_json::Value;

const INDENT: &str = "  ";

/// Space-join the arguments of a call.
///
/// Structured arguments are pretty printed with a two-space indent. With a
/// theme, keys, strings, numbers and literals are colored individually; the
/// text with color codes removed is identical to the plain render.
pub fn render_arguments(args: &[LogArg], theme: Option<&ColorTheme>) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match arg {
            LogArg::Text(text) => out.push_str(text),
            LogArg::Structured(value) => write_value(&mut out, value, 0, theme),
        }
    }
    out
}

fn write_value(out: &mut String, value: &Value, depth: usize, theme: Option<&ColorTheme>) {
    match value {
        Value::Null => paint(out, "null", theme.map(|t| t.json_literal)),
        Value::Bool(b) => paint(out, if *b { "true" } else { "false" }, theme.map(|t| t.json_literal)),
        Value::Number(n) => paint(out, &n.to_string(), theme.map(|t| t.json_number)),
        Value::String(s) => paint(out, &quote(s), theme.map(|t| t.json_string)),
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                push_indent(out, depth + 1);
                write_value(out, item, depth + 1, theme);
                out.push_str(if i + 1 < items.len() { ",\n" } else { "\n" });
            }
            push_indent(out, depth);
            out.push(']');
        }
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push_str("{\n");
            for (i, (key, item)) in map.iter().enumerate() {
                push_indent(out, depth + 1);
                paint(out, &quote(key), theme.map(|t| t.json_key));
                out.push_str(": ");
                write_value(out, item, depth + 1, theme);
                out.push_str(if i + 1 < map.len() { ",\n" } else { "\n" });
            }
            push_indent(out, depth);
            out.push('}');
        }
    }
}

fn quote(s: &str) -> String {
    Value::from(s).to_string()
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn paint(out: &mut String, token: &str, color: Option<Color>) {
    match color {
        Some(color) => out.push_str(&token.color(color).to_string()),
        None => out.push_str(token),
    }
}

/// Color a message with its channel color.
///
/// A message starting with a `[Tag]` only gets the tag's interior colored,
/// leaving the brackets and the rest of the message untouched. Any other
/// message is colored as a whole.
pub fn apply_channel_color(text: &str, color: Color) -> String {
    let tag_end = text.strip_prefix('[').and_then(|rest| rest.find(']'));
    match tag_end {
        Some(end) => {
            let tag = &text[1..=end];
            let remainder = &text[end + 1..];
            format!("[{}{}", tag.color(color), remainder)
        }
        None => text.color(color).to_string(),
    }
}

/// Produces the console and file renders of a call.
#[derive(Debug, Clone)]
pub struct LineRenderer {
    template: LineTemplate,
    theme: ColorTheme,
    use_colors: bool,
    pid: String,
    console_timestamp: TimestampFormat,
    file_timestamp: TimestampFormat,
}

impl LineRenderer {
    pub fn new(template: LineTemplate) -> Self {
        Self {
            template,
            theme: ColorTheme::default(),
            use_colors: true,
            pid: pid_token(),
            console_timestamp: TimestampFormat::ConsoleTime,
            file_timestamp: TimestampFormat::FileDateTime,
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[must_use]
    pub fn with_console_timestamp(mut self, format: TimestampFormat) -> Self {
        self.console_timestamp = format;
        self
    }

    #[must_use]
    pub fn with_file_timestamp(mut self, format: TimestampFormat) -> Self {
        self.file_timestamp = format;
        self
    }

    pub fn template(&self) -> &LineTemplate {
        &self.template
    }

    pub fn pid(&self) -> &str {
        &self.pid
    }

    /// Console render. `plain` is the uncolored argument string of `args`.
    pub fn console_line(
        &self,
        channel: Channel,
        args: &[LogArg],
        plain: &str,
        now: &DateTime<Local>,
    ) -> String {
        let datetime = self.console_timestamp.format(now);
        if !self.use_colors {
            return self.template.render(&datetime, &self.pid, plain);
        }

        let text = if args.iter().any(LogArg::is_structured) {
            render_arguments(args, Some(&self.theme))
        } else {
            plain.to_string()
        };

        self.template.render(
            &datetime.color(self.theme.datetime).to_string(),
            &self.pid.as_str().color(self.theme.pid).to_string(),
            &apply_channel_color(&text, self.theme.channel(channel)),
        )
    }

    /// File render: plain tokens and a trailing newline.
    pub fn file_line(&self, plain: &str, now: &DateTime<Local>) -> String {
        let mut line = self
            .template
            .render(&self.file_timestamp.format(now), &self.pid, plain);
        line.push('\n');
        line
    }
}

impl Default for LineRenderer {
    fn default() -> Self {
        Self::new(LineTemplate::default())
    }
}

/// Process identity token, `PID_<pid>`.
pub fn pid_token() -> String {
    format!("PID_{}", std::process::id())
}
