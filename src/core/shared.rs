//! Process-wide shared logger
//!
//! Modules that do not want to thread a [`Logger`] through their call graph
//! can use the shared instance. It is created with default configuration on
//! first access and lives for the rest of the process.

use super::logger::Logger;
use std::sync::OnceLock;

static SHARED: OnceLock<Logger> = OnceLock::new();

/// The shared logger, created with [`Logger::new`] on first access.
///
/// Every call returns the same instance. Configure it through its `&self`
/// mutators:
///
/// ```
/// use marvin_logger::{shared_instance, Severity};
///
/// shared_instance().set_log_level("warn");
/// assert_eq!(shared_instance().min_level(), Severity::Warn);
/// assert!(std::ptr::eq(shared_instance(), shared_instance()));
/// ```
pub fn shared_instance() -> &'static Logger {
    SHARED.get_or_init(Logger::new)
}

/// Does nothing: the shared instance is never replaced.
///
/// `logger` is dropped. Kept so callers written against a replaceable shared
/// logger still compile; reconfigure [`shared_instance`] instead.
pub fn set_shared_instance(logger: Logger) {
    drop(logger);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::severity::Severity;

    #[test]
    fn test_same_instance() {
        let first = shared_instance();
        let second = shared_instance();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_set_shared_instance_is_noop() {
        let before = shared_instance() as *const Logger;
        set_shared_instance(Logger::builder().min_level(Severity::None).build());
        assert!(std::ptr::eq(before, shared_instance()));
    }
}
