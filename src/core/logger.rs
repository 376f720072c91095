//! Main logger implementation

use super::{
    appender::Appender,
    channel::Channel,
    clock::{Clock, SystemClock},
    config::LoggerConfig,
    error::Result,
    filter::{Filter, FilterSet},
    line_template::LineTemplate,
    log_arg::LogArg,
    metrics::LoggerMetrics,
    render::{render_arguments, LineRenderer},
    severity::Severity,
    theme::ColorTheme,
    timestamp::TimestampFormat,
};
use crate::appenders::{
    CallbackAppender, ConsoleAppender, FileSink, FilenamePattern, LineCallback, RotationFrequency,
};
use parking_lot::{Mutex, RwLock};
use std::path::PathBuf;
use std::sync::Arc;

/// Leveled logger with a console sink and a file sink.
///
/// Each emit operation returns `Ok(true)` when the message was rendered and
/// dispatched, `Ok(false)` when the minimum severity or the channel filter
/// suppressed it, and `Err` when the file sink failed (including the lazy
/// creation of the log directory).
///
/// Callbacks run without any logger lock held and may log through the same
/// logger. Custom appenders run under their own lock and must not.
///
/// # Example
///
/// ```
/// use marvin_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .level("info")
///     .console_callback(|line| println!("{}", line))
///     .build();
///
/// assert!(!logger.debug(["hidden"]).unwrap());
/// assert!(logger.info(["[Webserver]", "listening"]).unwrap());
/// ```
pub struct Logger {
    min_level: RwLock<Severity>,
    filters: RwLock<FilterSet>,
    renderer: LineRenderer,
    clock: Arc<dyn Clock>,
    console: Sink,
    /// Replaces the built-in file sink when set
    file: Option<Sink>,
    file_sink: Mutex<FileSink>,
    metrics: LoggerMetrics,
}

enum Sink {
    Callback(CallbackAppender),
    Appender(Mutex<Box<dyn Appender>>),
}

impl Sink {
    fn appender<A: Appender + 'static>(appender: A) -> Self {
        Sink::Appender(Mutex::new(Box::new(appender)))
    }

    fn write(&self, line: &str) -> Result<()> {
        match self {
            Sink::Callback(callback) => {
                callback.send(line);
                Ok(())
            }
            Sink::Appender(appender) => appender.lock().append(line),
        }
    }

    fn flush(&self) -> Result<()> {
        match self {
            Sink::Callback(_) => Ok(()),
            Sink::Appender(appender) => appender.lock().flush(),
        }
    }
}

impl Logger {
    /// Logger with default configuration: level `debug`, stdout console,
    /// default template, no file output.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    /// Build a logger from a serializable configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a filter pattern does not compile.
    pub fn from_config(config: LoggerConfig) -> Result<Self> {
        Ok(LoggerBuilder::from_config(config)?.build())
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn debug<I, A>(&self, args: I) -> Result<bool>
    where
        I: IntoIterator<Item = A>,
        A: Into<LogArg>,
    {
        self.emit(Channel::Debug, args)
    }

    pub fn info<I, A>(&self, args: I) -> Result<bool>
    where
        I: IntoIterator<Item = A>,
        A: Into<LogArg>,
    {
        self.emit(Channel::Info, args)
    }

    pub fn warn<I, A>(&self, args: I) -> Result<bool>
    where
        I: IntoIterator<Item = A>,
        A: Into<LogArg>,
    {
        self.emit(Channel::Warn, args)
    }

    pub fn error<I, A>(&self, args: I) -> Result<bool>
    where
        I: IntoIterator<Item = A>,
        A: Into<LogArg>,
    {
        self.emit(Channel::Error, args)
    }

    /// Never suppressed by the minimum severity; only the channel filter applies.
    pub fn important<I, A>(&self, args: I) -> Result<bool>
    where
        I: IntoIterator<Item = A>,
        A: Into<LogArg>,
    {
        self.emit(Channel::Important, args)
    }

    /// Never suppressed by the minimum severity; only the channel filter applies.
    pub fn http<I, A>(&self, args: I) -> Result<bool>
    where
        I: IntoIterator<Item = A>,
        A: Into<LogArg>,
    {
        self.emit(Channel::Http, args)
    }

    /// Emit on any channel.
    ///
    /// Arguments are only converted and rendered once the severity gate has
    /// passed.
    pub fn emit<I, A>(&self, channel: Channel, args: I) -> Result<bool>
    where
        I: IntoIterator<Item = A>,
        A: Into<LogArg>,
    {
        if !self.passes_level(channel) {
            self.metrics.record_level_suppressed();
            return Ok(false);
        }

        let args: Vec<LogArg> = args.into_iter().map(Into::into).collect();
        self.emit_args(channel, &args)
    }

    fn passes_level(&self, channel: Channel) -> bool {
        match channel.severity() {
            Some(severity) => severity.is_at_least(*self.min_level.read()),
            None => true,
        }
    }

    fn emit_args(&self, channel: Channel, args: &[LogArg]) -> Result<bool> {
        let plain = render_arguments(args, None);
        if self.filters.read().is_excluded(channel, &plain) {
            self.metrics.record_filtered();
            return Ok(false);
        }

        let now = self.clock.now();
        let console_line = self.renderer.console_line(channel, args, &plain, &now);
        let file_line = self.renderer.file_line(&plain, &now);

        if let Err(e) = self.dispatch(&console_line, &file_line) {
            self.metrics.record_sink_failure();
            return Err(e);
        }

        self.metrics.record_emitted();
        Ok(true)
    }

    fn dispatch(&self, console_line: &str, file_line: &str) -> Result<()> {
        self.console.write(console_line)?;
        match &self.file {
            Some(file) => file.write(file_line),
            None => self.file_sink.lock().write(file_line),
        }
    }

    /// Whether a call on `channel` would pass the severity gate
    pub fn is_enabled(&self, channel: Channel) -> bool {
        self.passes_level(channel)
    }

    /// Set the minimum severity from a name, parsed permissively.
    pub fn set_log_level(&self, name: &str) {
        self.set_min_level(Severity::parse(name));
    }

    pub fn set_min_level(&self, level: Severity) {
        *self.min_level.write() = level;
    }

    pub fn min_level(&self) -> Severity {
        *self.min_level.read()
    }

    /// Direct the built-in file sink to `directory` for later calls.
    pub fn set_log_output_directory(&self, directory: impl Into<PathBuf>) {
        self.file_sink
            .lock()
            .set_output_directory(Some(directory.into()));
    }

    /// Disable the built-in file sink.
    pub fn clear_log_output_directory(&self) {
        self.file_sink.lock().set_output_directory(None);
    }

    pub fn log_output_directory(&self) -> Option<PathBuf> {
        self.file_sink
            .lock()
            .output_directory()
            .map(|dir| dir.to_path_buf())
    }

    pub fn set_filter(&self, channel: Channel, filter: impl Into<Filter>) {
        self.filters.write().set(channel, filter.into());
    }

    pub fn filter(&self, channel: Channel) -> Filter {
        self.filters.read().get(channel).clone()
    }

    pub fn set_debug_filter(&self, filter: impl Into<Filter>) {
        self.set_filter(Channel::Debug, filter);
    }

    pub fn set_info_filter(&self, filter: impl Into<Filter>) {
        self.set_filter(Channel::Info, filter);
    }

    pub fn set_warn_filter(&self, filter: impl Into<Filter>) {
        self.set_filter(Channel::Warn, filter);
    }

    pub fn set_error_filter(&self, filter: impl Into<Filter>) {
        self.set_filter(Channel::Error, filter);
    }

    pub fn set_important_filter(&self, filter: impl Into<Filter>) {
        self.set_filter(Channel::Important, filter);
    }

    pub fn set_http_filter(&self, filter: impl Into<Filter>) {
        self.set_filter(Channel::Http, filter);
    }

    pub fn log_format(&self) -> &str {
        self.renderer.template().as_str()
    }

    /// Get the logger metrics for detailed observability
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.console.flush()?;
        match &self.file {
            Some(file) => file.flush(),
            None => self.file_sink.lock().flush(),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use marvin_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .level("warn")
///     .log_format("{{DATETIME}} {{LOG}}")
///     .debug_filter("[Db]")
///     .use_colors(false)
///     .console_callback(|line| eprintln!("{}", line))
///     .build();
///
/// assert_eq!(logger.min_level(), Severity::Warn);
/// ```
pub struct LoggerBuilder {
    min_level: Severity,
    output_directory: Option<PathBuf>,
    console: Option<Sink>,
    file: Option<Sink>,
    template: LineTemplate,
    filters: FilterSet,
    filename_pattern: Option<FilenamePattern>,
    pid_in_filename: bool,
    rotation: RotationFrequency,
    theme: ColorTheme,
    use_colors: bool,
    clock: Arc<dyn Clock>,
    console_timestamp: TimestampFormat,
    file_timestamp: TimestampFormat,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: Severity::Debug,
            output_directory: None,
            console: None,
            file: None,
            template: LineTemplate::default(),
            filters: FilterSet::new(),
            filename_pattern: None,
            pid_in_filename: false,
            rotation: RotationFrequency::Daily,
            theme: ColorTheme::default(),
            use_colors: true,
            clock: Arc::new(SystemClock),
            console_timestamp: TimestampFormat::ConsoleTime,
            file_timestamp: TimestampFormat::FileDateTime,
        }
    }

    /// Start from a serializable configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a filter pattern does not compile.
    pub fn from_config(config: LoggerConfig) -> Result<Self> {
        let mut builder = Self::new();
        for (channel, spec) in config.filters() {
            builder.filters.set(channel, Filter::try_from(spec.clone())?);
        }

        if let Some(level) = config.level.as_deref() {
            builder = builder.level(level);
        }
        if let Some(directory) = config.log_output_directory {
            builder = builder.log_output_directory(directory);
        }
        if let Some(format) = config.log_format.as_deref() {
            builder = builder.log_format(format);
        }
        if let Some(use_colors) = config.use_colors {
            builder = builder.use_colors(use_colors);
        }
        if let Some(rotation) = config.rotation {
            builder = builder.rotation(rotation);
        }
        Ok(builder.pid_in_filename(config.pid_in_filename))
    }

    /// Set minimum severity from a name, parsed permissively
    #[must_use = "builder methods return a new value"]
    pub fn level(self, name: &str) -> Self {
        self.min_level(Severity::parse(name))
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: Severity) -> Self {
        self.min_level = level;
        self
    }

    /// Enable the built-in daily file sink in `directory`
    #[must_use = "builder methods return a new value"]
    pub fn log_output_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.output_directory = Some(directory.into());
        self
    }

    /// Replace stdout printing with a callback receiving each console line
    #[must_use = "builder methods return a new value"]
    pub fn console_callback<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.console = Some(Sink::Callback(
            CallbackAppender::from_fn(f).with_name("console_callback"),
        ));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn console_appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.console = Some(Sink::appender(appender));
        self
    }

    /// Replace the built-in file sink with a callback receiving each file line
    #[must_use = "builder methods return a new value"]
    pub fn file_callback<F>(self, f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.file_line_callback(Arc::new(f))
    }

    /// Same as [`LoggerBuilder::file_callback`] for an already shared callback
    #[must_use = "builder methods return a new value"]
    pub fn file_line_callback(mut self, callback: LineCallback) -> Self {
        self.file = Some(Sink::Callback(
            CallbackAppender::new(callback).with_name("file_callback"),
        ));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.file = Some(Sink::appender(appender));
        self
    }

    /// Line template using `{{DATETIME}}`, `{{PID}}` and `{{LOG}}`
    #[must_use = "builder methods return a new value"]
    pub fn log_format(mut self, format: &str) -> Self {
        self.template = LineTemplate::parse(format);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn filter(mut self, channel: Channel, filter: impl Into<Filter>) -> Self {
        self.filters.set(channel, filter.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn debug_filter(self, filter: impl Into<Filter>) -> Self {
        self.filter(Channel::Debug, filter)
    }

    #[must_use = "builder methods return a new value"]
    pub fn info_filter(self, filter: impl Into<Filter>) -> Self {
        self.filter(Channel::Info, filter)
    }

    #[must_use = "builder methods return a new value"]
    pub fn warn_filter(self, filter: impl Into<Filter>) -> Self {
        self.filter(Channel::Warn, filter)
    }

    #[must_use = "builder methods return a new value"]
    pub fn error_filter(self, filter: impl Into<Filter>) -> Self {
        self.filter(Channel::Error, filter)
    }

    #[must_use = "builder methods return a new value"]
    pub fn important_filter(self, filter: impl Into<Filter>) -> Self {
        self.filter(Channel::Important, filter)
    }

    #[must_use = "builder methods return a new value"]
    pub fn http_filter(self, filter: impl Into<Filter>) -> Self {
        self.filter(Channel::Http, filter)
    }

    /// Name log files `PID_<pid>-<date>.log` instead of `<date>.log`
    #[must_use = "builder methods return a new value"]
    pub fn pid_in_filename(mut self, enabled: bool) -> Self {
        self.pid_in_filename = enabled;
        self
    }

    /// Custom log file name; takes precedence over `pid_in_filename`
    #[must_use = "builder methods return a new value"]
    pub fn filename_pattern(mut self, pattern: FilenamePattern) -> Self {
        self.filename_pattern = Some(pattern);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn rotation(mut self, frequency: RotationFrequency) -> Self {
        self.rotation = frequency;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn theme(mut self, theme: ColorTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Color console lines (default `true`)
    #[must_use = "builder methods return a new value"]
    pub fn use_colors(mut self, enabled: bool) -> Self {
        self.use_colors = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn console_timestamp(mut self, format: TimestampFormat) -> Self {
        self.console_timestamp = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_timestamp(mut self, format: TimestampFormat) -> Self {
        self.file_timestamp = format;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let pattern = match self.filename_pattern {
            Some(pattern) => pattern,
            None if self.pid_in_filename => FilenamePattern::with_pid(),
            None => FilenamePattern::default(),
        };

        let file_sink = FileSink::new(self.output_directory)
            .with_pattern(pattern)
            .with_frequency(self.rotation)
            .with_clock(Arc::clone(&self.clock));

        let renderer = LineRenderer::new(self.template)
            .with_theme(self.theme)
            .with_colors(self.use_colors)
            .with_console_timestamp(self.console_timestamp)
            .with_file_timestamp(self.file_timestamp);

        let console = self
            .console
            .unwrap_or_else(|| Sink::appender(ConsoleAppender::new()));

        Logger {
            min_level: RwLock::new(self.min_level),
            filters: RwLock::new(self.filters),
            renderer,
            clock: self.clock,
            console,
            file: self.file,
            file_sink: Mutex::new(file_sink),
            metrics: LoggerMetrics::new(),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
