//! Logging macros for variadic call sites.
//!
//! Each argument may be of a different type; every one is converted with
//! [`LogArg::from`](crate::LogArg). The macros evaluate to the `Result<bool>`
//! of the emit call.
//!
//! # Examples
//!
//! ```
//! use marvin_logger::prelude::*;
//! use marvin_logger::{info, important};
//! use serde_json::json;
//!
//! let logger = Logger::builder().console_callback(|_| {}).build();
//!
//! info!(logger, "[Webserver]", "port", 4200).unwrap();
//! important!(logger, "config:", json!({"workers": 4})).unwrap();
//! ```

/// Build a `Vec<LogArg>` from heterogeneous values.
///
/// # Examples
///
/// ```
/// use marvin_logger::{log_args, LogArg};
///
/// let args = log_args!["count", 3, true];
/// assert_eq!(args, vec![LogArg::from("count"), LogArg::from("3"), LogArg::from("true")]);
/// ```
#[macro_export]
macro_rules! log_args {
    () => {
        ::std::vec::Vec::<$crate::LogArg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::LogArg::from($arg)),+]
    };
}

/// Emit on any channel.
///
/// # Examples
///
/// ```
/// # use marvin_logger::prelude::*;
/// # let logger = Logger::builder().console_callback(|_| {}).build();
/// use marvin_logger::log;
/// log!(logger, Channel::Warn, "disk at", 91, "%").unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $channel:expr, $($arg:expr),+ $(,)?) => {
        $logger.emit($channel, $crate::log_args![$($arg),+])
    };
}

/// Emit on the `debug` channel.
///
/// ```
/// # use marvin_logger::prelude::*;
/// # let logger = Logger::builder().console_callback(|_| {}).build();
/// use marvin_logger::debug;
/// assert!(debug!(logger, "counter", 10).unwrap());
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::Channel::Debug, $($arg),+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::Channel::Info, $($arg),+)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::Channel::Warn, $($arg),+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::Channel::Error, $($arg),+)
    };
}

/// Emit on the `important` channel; only its filter can suppress it.
#[macro_export]
macro_rules! important {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::Channel::Important, $($arg),+)
    };
}

/// Emit on the `http` channel; only its filter can suppress it.
#[macro_export]
macro_rules! http {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::Channel::Http, $($arg),+)
    };
}
