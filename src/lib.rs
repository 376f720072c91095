//! # Marvin Logger
//!
//! A leveled logger that renders every call twice: a colored line for the
//! console and a plain line for a daily rotating log file.
//!
//! ## Features
//!
//! - **Six Channels**: `debug`, `info`, `warn`, `error` gated by a minimum
//!   severity, plus `important` and `http` which always pass the level gate
//! - **Channel Filters**: literal substring or regex per channel
//! - **Line Templates**: `{{DATETIME}}`, `{{PID}}` and `{{LOG}}` placeholders
//! - **Rotating Files**: one file per day (or hour), directory created lazily
//! - **Request Logging**: one `http` line per finished HTTP request
//!
//! ```
//! use marvin_logger::prelude::*;
//!
//! let logger = Logger::builder()
//!     .level("info")
//!     .console_callback(|line| println!("{}", line))
//!     .build();
//!
//! logger.info(["[Webserver]", "Listening on port 4200"]).unwrap();
//! logger.important(["ready"]).unwrap();
//! ```

pub mod appenders;
pub mod core;
pub mod macros;
pub mod request_log;

pub mod prelude {
    pub use crate::appenders::{
        CallbackAppender, ConsoleAppender, FileSink, FilenamePattern, RotationFrequency,
    };
    pub use crate::core::{
        set_shared_instance, shared_instance, Appender, Channel, Clock, ColorTheme, Filter,
        LogArg, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result,
        Severity, TimestampFormat,
    };
    pub use crate::request_log::{RequestInfo, RequestTimer, ResponseInfo};
}

pub use crate::appenders::{
    CallbackAppender, ConsoleAppender, FileSink, FilenamePattern, LineCallback,
    RotatingFileStream, RotationFrequency,
};
pub use crate::core::{
    set_shared_instance, shared_instance, Appender, Channel, Clock, ColorTheme, FixedClock,
    Filter, FilterSpec, LineTemplate, LogArg, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    LoggerMetrics, Result, Severity, SystemClock, TimestampFormat,
};
pub use crate::request_log::{format_request_line, RequestInfo, RequestTimer, ResponseInfo};
