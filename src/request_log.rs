//! HTTP request logging
//!
//! Host web frameworks expose their request and response objects through
//! [`RequestInfo`] and [`ResponseInfo`]. A [`RequestTimer`] is started when the
//! request arrives, marked when the response headers go out, and handed to
//! [`Logger::log_request`] when the response is finished. The resulting
//! `http` channel line looks like:
//!
//! ```text
//! [GET] /index.html (1.234 ms) 200 127.0.0.1
//! ```

use crate::core::{Logger, Result};
use std::time::Instant;

/// Request side of an HTTP exchange
pub trait RequestInfo {
    fn method(&self) -> &str;
    fn url(&self) -> &str;
    /// Peer address, if the framework can resolve it
    fn remote_addr(&self) -> Option<String>;
}

/// Response side of an HTTP exchange
pub trait ResponseInfo {
    fn status_code(&self) -> u16;
}

/// Measures the time between request start and response headers.
#[derive(Debug, Clone, Copy)]
pub struct RequestTimer {
    started: Instant,
    headers_sent: Option<Instant>,
}

impl RequestTimer {
    /// Start timing now
    pub fn start() -> Self {
        Self::started_at(Instant::now())
    }

    pub fn started_at(started: Instant) -> Self {
        Self {
            started,
            headers_sent: None,
        }
    }

    /// Record that the response headers were sent. Later calls are ignored.
    pub fn mark_headers_sent(&mut self) {
        self.mark_headers_sent_at(Instant::now());
    }

    pub fn mark_headers_sent_at(&mut self, at: Instant) {
        if self.headers_sent.is_none() {
            self.headers_sent = Some(at);
        }
    }

    pub fn headers_sent(&self) -> bool {
        self.headers_sent.is_some()
    }

    /// Milliseconds from start to headers sent, or to now if the headers
    /// were never marked.
    pub fn elapsed_ms(&self) -> f64 {
        let end = self.headers_sent.unwrap_or_else(Instant::now);
        end.saturating_duration_since(self.started).as_secs_f64() * 1000.0
    }
}

impl Default for RequestTimer {
    fn default() -> Self {
        Self::start()
    }
}

/// `[METHOD] URL (ELAPSED ms) STATUS REMOTE_ADDR`, elapsed with three
/// decimals and `-` for an unknown address.
pub fn format_request_line(
    method: &str,
    url: &str,
    elapsed_ms: f64,
    status: u16,
    remote_addr: Option<&str>,
) -> String {
    format!(
        "[{}] {} ({:.3} ms) {} {}",
        method,
        url,
        elapsed_ms,
        status,
        remote_addr.unwrap_or("-")
    )
}

impl Logger {
    /// Emit the summary line of a finished request on the `http` channel.
    ///
    /// # Errors
    ///
    /// Same as [`Logger::http`].
    pub fn log_request<Req, Res>(&self, timer: &RequestTimer, req: &Req, res: &Res) -> Result<bool>
    where
        Req: RequestInfo + ?Sized,
        Res: ResponseInfo + ?Sized,
    {
        let remote = req.remote_addr();
        let line = format_request_line(
            req.method(),
            req.url(),
            timer.elapsed_ms(),
            res.status_code(),
            remote.as_deref(),
        );
        self.http([line])
    }
}
