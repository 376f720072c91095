//! Logger metrics for observability
//!
//! Counts what happened to each logging call: emitted, suppressed by the
//! minimum level, suppressed by a channel filter, or failed in a sink.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use marvin_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_emitted();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.emitted(), 1);
/// assert_eq!(metrics.suppressed(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Calls rendered and dispatched to both sinks
    emitted: AtomicU64,

    /// Calls rejected by the minimum severity
    level_suppressed: AtomicU64,

    /// Calls rejected by their channel filter
    filter_suppressed: AtomicU64,

    /// Calls whose dispatch returned an error
    sink_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            emitted: AtomicU64::new(0),
            level_suppressed: AtomicU64::new(0),
            filter_suppressed: AtomicU64::new(0),
            sink_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn emitted(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn level_suppressed(&self) -> u64 {
        self.level_suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filter_suppressed(&self) -> u64 {
        self.filter_suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_failures(&self) -> u64 {
        self.sink_failures.load(Ordering::Relaxed)
    }

    /// Calls suppressed by either gate
    pub fn suppressed(&self) -> u64 {
        self.level_suppressed() + self.filter_suppressed()
    }

    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.emitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_level_suppressed(&self) -> u64 {
        self.level_suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filter_suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_sink_failure(&self) -> u64 {
        self.sink_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.emitted.store(0, Ordering::Relaxed);
        self.level_suppressed.store(0, Ordering::Relaxed);
        self.filter_suppressed.store(0, Ordering::Relaxed);
        self.sink_failures.store(0, Ordering::Relaxed);
    }
}
