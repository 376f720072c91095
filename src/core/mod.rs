//! Core logger types and traits

pub mod appender;
pub mod channel;
pub mod clock;
pub mod config;
pub mod error;
pub mod filter;
pub mod line_template;
pub mod log_arg;
pub mod logger;
pub mod metrics;
pub mod render;
pub mod severity;
pub mod shared;
pub mod theme;
pub mod timestamp;

pub use appender::Appender;
pub use channel::Channel;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use filter::{Filter, FilterSet, FilterSpec};
pub use line_template::{LineTemplate, DEFAULT_LOG_FORMAT};
pub use log_arg::LogArg;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use render::{apply_channel_color, pid_token, render_arguments, LineRenderer};
pub use severity::Severity;
pub use shared::{set_shared_instance, shared_instance};
pub use theme::ColorTheme;
pub use timestamp::TimestampFormat;
