//! Line templates
//!
//! A template arranges the three tokens of a rendered line. It may contain
//! `{{DATETIME}}`, `{{PID}}` and `{{LOG}}` in any order and any number of
//! times. Any other `{{...}}` sequence is kept as literal text.

use std::fmt;

pub const DEFAULT_LOG_FORMAT: &str = "{{DATETIME}} {{PID}} {{LOG}}";

const DATETIME: &str = "{{DATETIME}}";
const PID: &str = "{{PID}}";
const LOG: &str = "{{LOG}}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Datetime,
    Pid,
    Log,
}

/// A parsed line template.
///
/// ```
/// use marvin_logger::LineTemplate;
///
/// let template = LineTemplate::parse("[{{PID}}] {{LOG}} {{UNKNOWN}}");
/// assert_eq!(template.render("12:00:00", "PID_1", "hello"), "[PID_1] hello {{UNKNOWN}}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl LineTemplate {
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(start) = rest.find("{{") {
            literal.push_str(&rest[..start]);
            let candidate = &rest[start..];

            let placeholder = [(DATETIME, Segment::Datetime), (PID, Segment::Pid), (LOG, Segment::Log)]
                .into_iter()
                .find(|(token, _)| candidate.starts_with(token));

            match placeholder {
                Some((token, segment)) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(segment);
                    rest = &candidate[token.len()..];
                }
                None => {
                    // advance one brace so "{{{LOG}}}" still finds "{{LOG}}"
                    literal.push('{');
                    rest = &candidate[1..];
                }
            }
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self {
            source: source.to_string(),
            segments,
        }
    }

    /// Substitute every placeholder occurrence with its token.
    pub fn render(&self, datetime: &str, pid: &str, log: &str) -> String {
        let mut line = String::with_capacity(self.source.len() + datetime.len() + pid.len() + log.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => line.push_str(text),
                Segment::Datetime => line.push_str(datetime),
                Segment::Pid => line.push_str(pid),
                Segment::Log => line.push_str(log),
            }
        }
        line
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Default for LineTemplate {
    fn default() -> Self {
        Self::parse(DEFAULT_LOG_FORMAT)
    }
}

impl fmt::Display for LineTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
