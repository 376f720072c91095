//! Callback appender
//!
//! Hands rendered lines to a user supplied function instead of a device.

use crate::core::{Appender, Result};
use std::fmt;
use std::sync::Arc;

/// Receives one rendered line per emitted call.
pub type LineCallback = Arc<dyn Fn(&str) + Send + Sync>;

pub struct CallbackAppender {
    callback: LineCallback,
    name: String,
}

impl CallbackAppender {
    pub fn new(callback: LineCallback) -> Self {
        Self {
            callback,
            name: "callback".to_string(),
        }
    }

    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self::new(Arc::new(f))
    }

    /// Hand `line` to the callback; needs no exclusive access.
    pub fn send(&self, line: &str) {
        (self.callback)(line);
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl fmt::Debug for CallbackAppender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackAppender").field("name", &self.name).finish()
    }
}

impl Appender for CallbackAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        self.send(line);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_callback_receives_lines() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&lines);
        let mut appender = CallbackAppender::from_fn(move |line| sink.lock().push(line.to_string()))
            .with_name("capture");

        appender.append("one").unwrap();
        appender.append("two").unwrap();
        appender.flush().unwrap();

        assert_eq!(appender.name(), "capture");
        assert_eq!(*lines.lock(), vec!["one".to_string(), "two".to_string()]);
    }
}
