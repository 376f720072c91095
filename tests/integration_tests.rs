//! Integration tests for marvin_logger
//!
//! These tests verify:
//! - Level gating across all channels
//! - Console and file line formats
//! - Channel filters
//! - Lazy directory and daily file creation
//! - Configuration loading
//! - Request logging

use chrono::{Local, TimeZone};
use colored::Colorize;
use marvin_logger::prelude::*;
use marvin_logger::{log_args, FixedClock};
use parking_lot::Mutex;
use regex::Regex;
use serde_json::json;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

type Lines = Arc<Mutex<Vec<String>>>;

struct Capture {
    logger: Logger,
    console: Lines,
    file: Lines,
}

fn capture(builder: LoggerBuilder) -> Capture {
    let console: Lines = Arc::default();
    let file: Lines = Arc::default();
    let console_sink = Arc::clone(&console);
    let file_sink = Arc::clone(&file);
    let logger = builder
        .console_callback(move |line| console_sink.lock().push(line.to_string()))
        .file_callback(move |line| file_sink.lock().push(line.to_string()))
        .build();
    Capture {
        logger,
        console,
        file,
    }
}

fn emit_every_channel(logger: &Logger) -> [bool; 6] {
    [
        logger.debug(["debug"]).expect("debug"),
        logger.info(["info"]).expect("info"),
        logger.warn(["warn"]).expect("warn"),
        logger.error(["error"]).expect("error"),
        logger.important(["important"]).expect("important"),
        logger.http(["http"]).expect("http"),
    ]
}

fn strip_ansi(s: &str) -> String {
    let re = Regex::new("\x1b\\[[0-9;]*m").expect("valid regex");
    re.replace_all(s, "").into_owned()
}

fn pid() -> String {
    format!("PID_{}", std::process::id())
}

fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        Local.with_ymd_and_hms(2024, 7, 9, 14, 3, 27).unwrap(),
    ))
}

#[test]
fn test_all_channels_emit_at_debug() {
    let c = capture(Logger::builder().level("debug"));
    assert_eq!(emit_every_channel(&c.logger), [true; 6]);
    assert_eq!(c.console.lock().len(), 6);
    assert_eq!(c.file.lock().len(), 6);
}

#[test]
fn test_only_ungated_channels_emit_at_none() {
    let c = capture(Logger::builder().level("none"));
    assert_eq!(
        emit_every_channel(&c.logger),
        [false, false, false, false, true, true]
    );
    let console = c.console.lock();
    assert_eq!(console.len(), 2);
    assert!(strip_ansi(&console[0]).ends_with("important"));
    assert!(strip_ansi(&console[1]).ends_with("http"));
}

#[test]
fn test_level_names_are_parsed_permissively() {
    for (name, expected) in [
        ("Warning", Severity::Warn),
        ("INFO", Severity::Info),
        ("e", Severity::Error),
        ("nothing", Severity::None),
        ("verbose", Severity::Debug),
        ("", Severity::Debug),
    ] {
        let logger = Logger::builder().level(name).console_callback(|_| {}).build();
        assert_eq!(logger.min_level(), expected, "level {:?}", name);
    }
}

#[test]
fn test_literal_filter() {
    let c = capture(Logger::builder().debug_filter("pass"));
    assert!(c.logger.debug(["should pass"]).unwrap());
    assert!(!c.logger.debug(["is filtered"]).unwrap());
    assert_eq!(c.console.lock().len(), 1);
    assert_eq!(c.file.lock().len(), 1);
}

#[test]
fn test_pattern_filter() {
    let c = capture(
        Logger::builder().error_filter(Filter::pattern(r"^\[(Db|Cache)\]").unwrap()),
    );
    assert!(c.logger.error(["[Db]", "connection lost"]).unwrap());
    assert!(c.logger.error(["[Cache]", "miss"]).unwrap());
    assert!(!c.logger.error(["[Web]", "timeout"]).unwrap());
    assert_eq!(c.console.lock().len(), 2);
}

#[test]
fn test_filters_are_per_channel() {
    let c = capture(Logger::builder().info_filter("keep"));
    assert!(!c.logger.info(["drop"]).unwrap());
    assert!(c.logger.warn(["drop"]).unwrap());
}

#[test]
fn test_log_format_with_log_only() {
    colored::control::set_override(true);
    let c = capture(Logger::builder().log_format("{{LOG}}"));
    c.logger.debug(["test"]).unwrap();
    assert_eq!(c.console.lock()[0], "test".blue().to_string());
    assert_eq!(c.file.lock()[0], "test\n");
}

#[test]
fn test_console_channel_colors() {
    colored::control::set_override(true);
    let c = capture(Logger::builder().log_format("{{LOG}}"));
    emit_every_channel(&c.logger);
    assert_eq!(
        *c.console.lock(),
        vec![
            "debug".blue().to_string(),
            "info".green().to_string(),
            "warn".yellow().to_string(),
            "error".red().to_string(),
            "important".magenta().to_string(),
            "http".cyan().to_string(),
        ]
    );
}

#[test]
fn test_console_datetime_and_pid() {
    colored::control::set_override(true);
    let c = capture(Logger::builder().clock(fixed_clock()));
    c.logger.debug(["[brackets]", "test"]).unwrap();

    let expected = format!(
        "{} {} [{}] test",
        "14:03:27".bright_black(),
        pid().magenta(),
        "brackets".blue()
    );
    assert_eq!(c.console.lock()[0], expected);
}

#[test]
fn test_console_without_colors() {
    let c = capture(Logger::builder().clock(fixed_clock()).use_colors(false));
    c.logger.warn(["[brackets]", "test"]).unwrap();
    assert_eq!(c.console.lock()[0], format!("14:03:27 {} [brackets] test", pid()));
}

#[test]
fn test_file_line_format() {
    let c = capture(Logger::builder().clock(fixed_clock()));
    c.logger.http(["[brackets]", "test"]).unwrap();

    let line = c.file.lock()[0].clone();
    assert_eq!(line, format!("2024/07/09 14:03:27 {} [brackets] test\n", pid()));

    let fields: Vec<&str> = line.split(' ').collect();
    assert_eq!(fields.len(), 5);
    assert_eq!(fields[3], "[brackets]");
    assert_eq!(fields[4], "test\n");
}

#[test]
fn test_object_argument_in_file() {
    let c = capture(Logger::builder());
    c.logger.debug([LogArg::from(json!({"foo": "bar"}))]).unwrap();

    let re = Regex::new(r#"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} PID_\d+ \{\n  "foo": "bar"\n\}\n$"#)
        .unwrap();
    assert!(re.is_match(&c.file.lock()[0]));
}

#[test]
fn test_object_argument_on_console() {
    colored::control::set_override(true);
    let c = capture(Logger::builder().log_format("{{LOG}}"));
    c.logger.debug([LogArg::from(json!({"foo": "bar"}))]).unwrap();

    let line = c.console.lock()[0].clone();
    assert!(line.contains('\x1b'));
    assert_eq!(strip_ansi(&line), "{\n  \"foo\": \"bar\"\n}");
}

#[test]
fn test_mixed_argument_types() {
    #[derive(serde::Serialize)]
    struct Payload {
        id: u32,
        tags: Vec<&'static str>,
    }

    let c = capture(Logger::builder().log_format("{{LOG}}").use_colors(false));
    let payload = LogArg::structured(&Payload {
        id: 7,
        tags: vec!["a"],
    })
    .unwrap();
    c.logger
        .info(log_args!["count", 3, 2.5, true, payload])
        .unwrap();

    assert_eq!(
        c.console.lock()[0],
        "count 3 2.5 true {\n  \"id\": 7,\n  \"tags\": [\n    \"a\"\n  ]\n}"
    );
}

#[test]
fn test_object_fields_keep_caller_order() {
    #[derive(serde::Serialize)]
    struct Payload {
        str: &'static str,
        count: u32,
        is_true: bool,
    }

    let c = capture(Logger::builder().log_format("{{LOG}}"));
    let payload = LogArg::structured(&Payload {
        str: "foo",
        count: 42,
        is_true: false,
    })
    .unwrap();
    c.logger.debug([payload]).unwrap();
    c.logger
        .debug([LogArg::from(json!({"str": "foo", "count": 42, "isTrue": false, "nullElement": null, "myArray": ["foo", "bar"]}))])
        .unwrap();

    let file = c.file.lock();
    assert_eq!(
        file[0],
        "{\n  \"str\": \"foo\",\n  \"count\": 42,\n  \"is_true\": false\n}\n"
    );
    assert_eq!(
        file[1],
        "{\n  \"str\": \"foo\",\n  \"count\": 42,\n  \"isTrue\": false,\n  \"nullElement\": null,\n  \"myArray\": [\n    \"foo\",\n    \"bar\"\n  ]\n}\n"
    );
}

#[test]
fn test_slice_of_args() {
    let c = capture(Logger::builder().log_format("{{LOG}}").use_colors(false));
    let args = log_args!["a", "b"];
    assert!(c.logger.info(&args).unwrap());
    assert!(c.logger.info(args.as_slice()).unwrap());
    assert_eq!(*c.console.lock(), vec!["a b", "a b"]);
}

#[test]
fn test_creates_directory_and_daily_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_dir = temp_dir.path().join("test-tmp");

    let logger = Logger::builder()
        .log_output_directory(&log_dir)
        .console_callback(|_| {})
        .build();

    assert!(!log_dir.exists());
    logger.debug(["test"]).unwrap();

    let file_name = format!("{}.log", Local::now().format("%Y-%m-%d"));
    let path = log_dir.join(file_name);
    assert!(path.exists());

    let content = fs::read_to_string(&path).expect("Failed to read log file");
    assert!(content.ends_with(&format!("{} test\n", pid())));
}

#[test]
fn test_file_appends_lines_in_order() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::builder()
        .log_output_directory(temp_dir.path())
        .clock(fixed_clock())
        .log_format("{{LOG}}")
        .console_callback(|_| {})
        .build();

    for i in 0..5 {
        logger.info(log_args!["line", i]).unwrap();
    }
    logger.flush().unwrap();

    let content = fs::read_to_string(temp_dir.path().join("2024-07-09.log")).unwrap();
    assert_eq!(content, "line 0\nline 1\nline 2\nline 3\nline 4\n");
}

#[test]
fn test_file_contains_no_color_codes() {
    colored::control::set_override(true);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::builder()
        .log_output_directory(temp_dir.path())
        .clock(fixed_clock())
        .console_callback(|_| {})
        .build();

    logger.error(["[Db]", "down"]).unwrap();
    logger.debug([LogArg::from(json!({"k": [1, 2]}))]).unwrap();

    let content = fs::read_to_string(temp_dir.path().join("2024-07-09.log")).unwrap();
    assert!(!content.contains('\x1b'));
    assert!(content.starts_with(&format!("2024/07/09 14:03:27 {} [Db] down\n", pid())));
}

#[test]
fn test_pid_in_filename() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::builder()
        .log_output_directory(temp_dir.path())
        .pid_in_filename(true)
        .clock(fixed_clock())
        .console_callback(|_| {})
        .build();

    logger.info(["x"]).unwrap();
    let expected = temp_dir
        .path()
        .join(format!("PID_{}-2024-07-09.log", std::process::id()));
    assert!(expected.exists());
}

#[test]
fn test_output_directory_can_be_set_later() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::builder()
        .clock(fixed_clock())
        .console_callback(|_| {})
        .build();

    logger.info(["before"]).unwrap();
    logger.set_log_output_directory(temp_dir.path().join("late"));
    logger.info(["after"]).unwrap();

    let content = fs::read_to_string(temp_dir.path().join("late").join("2024-07-09.log")).unwrap();
    assert!(!content.contains("before"));
    assert!(content.contains("after"));
}

#[test]
fn test_uncreatable_directory_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let console: Lines = Arc::default();
    let sink = Arc::clone(&console);
    let logger = Logger::builder()
        .log_output_directory(blocker.join("logs"))
        .console_callback(move |line| sink.lock().push(line.to_string()))
        .build();

    let err = logger.warn(["test"]).unwrap_err();
    assert!(matches!(err, LoggerError::DirectoryCreation { .. }));
    // the console sink runs before the file sink
    assert_eq!(console.lock().len(), 1);
}

#[test]
fn test_custom_file_callback_replaces_file_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let c = capture(Logger::builder().log_output_directory(temp_dir.path().join("unused")));
    c.logger.info(["x"]).unwrap();
    assert_eq!(c.file.lock().len(), 1);
    assert!(!temp_dir.path().join("unused").exists());
}

#[test]
fn test_config_from_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("logger.json");
    let config = json!({
        "level": "warn",
        "logOutputDirectory": temp_dir.path().join("logs"),
        "logFormat": "{{PID}} {{LOG}}",
        "useColors": false,
        "errorFilter": { "literal": "[Db]" },
        "httpFilter": { "pattern": "^\\[GET\\]" }
    });
    fs::write(&config_path, config.to_string()).unwrap();

    let builder = LoggerBuilder::from_config(LoggerConfig::from_file(&config_path).unwrap()).unwrap();
    let c = capture(builder);

    assert_eq!(c.logger.min_level(), Severity::Warn);
    assert_eq!(c.logger.log_format(), "{{PID}} {{LOG}}");
    assert!(!c.logger.info(["x"]).unwrap());
    assert!(!c.logger.error(["[Web]", "x"]).unwrap());
    assert!(c.logger.error(["[Db]", "x"]).unwrap());
    assert!(c.logger.http(["[GET] /"]).unwrap());
    assert!(!c.logger.http(["[PUT] /"]).unwrap());
    assert_eq!(*c.console.lock(), vec![format!("{} [Db] x", pid()), format!("{} [GET] /", pid())]);
}

#[test]
fn test_metrics_track_outcomes() {
    let c = capture(Logger::builder().level("warn").warn_filter("ok"));
    c.logger.debug(["x"]).unwrap();
    c.logger.warn(["x"]).unwrap();
    c.logger.warn(["ok"]).unwrap();
    c.logger.important(["x"]).unwrap();

    let metrics = c.logger.metrics();
    assert_eq!(metrics.emitted(), 2);
    assert_eq!(metrics.level_suppressed(), 1);
    assert_eq!(metrics.filter_suppressed(), 1);
}

#[test]
fn test_shared_instance_is_shared() {
    let first = shared_instance();
    let second = shared_instance();
    assert!(std::ptr::eq(first, second));

    set_shared_instance(Logger::new());
    assert!(std::ptr::eq(first, shared_instance()));
}

struct FakeRequest;

impl RequestInfo for FakeRequest {
    fn method(&self) -> &str {
        "GET"
    }

    fn url(&self) -> &str {
        "/"
    }

    fn remote_addr(&self) -> Option<String> {
        Some("127.0.0.1".to_string())
    }
}

struct FakeResponse;

impl ResponseInfo for FakeResponse {
    fn status_code(&self) -> u16 {
        404
    }
}

#[test]
fn test_request_logging() {
    colored::control::set_override(true);
    let c = capture(Logger::builder());

    let mut timer = RequestTimer::start();
    timer.mark_headers_sent();
    assert!(c.logger.log_request(&timer, &FakeRequest, &FakeResponse).unwrap());

    let console = strip_ansi(&c.console.lock()[0]);
    let re = Regex::new(r"\[.*?\] / \([0-9. ms]*\) \d{3} [0-9a-f.:]*").unwrap();
    assert!(re.is_match(&console));
    assert!(console.ends_with("404 127.0.0.1"));
    assert!(c.file.lock()[0].contains("[GET] / ("));
}
