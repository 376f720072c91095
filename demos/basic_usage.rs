//! Basic logger usage example
//!
//! Demonstrates the six channels, minimum severity and channel filters.
//!
//! Run with: cargo run --example basic_usage

use marvin_logger::prelude::*;
use marvin_logger::{debug, info};
use serde_json::json;

fn main() -> Result<()> {
    println!("=== Marvin Logger - Basic Usage Example ===\n");

    let logger = Logger::new();

    println!("1. Logging on every channel:");
    logger.debug(["[debug]", "debug message"])?;
    debug!(
        logger,
        "Another debug message with object",
        json!({"str": "foo", "count": 42, "isTrue": false, "nullElement": null, "myArray": ["foo", "bar"]})
    )?;
    logger.info(["[info]", "info message"])?;
    logger.warn(["[warning]", "warning message"])?;
    logger.error(["[error]", "error message"])?;
    logger.important(["[important]", "important message"])?;
    logger.http(["[http]", "http message"])?;

    println!("\n2. Minimum level set to ERROR, important and http still show:");
    logger.set_log_level("error");
    logger.debug(["Debug message (hidden)"])?;
    logger.warn(["Warning message (hidden)"])?;
    logger.error(["Error message (visible)"])?;
    logger.important(["Important message (visible)"])?;

    println!("\n3. Channel filters:");
    logger.set_log_level("debug");
    logger.set_info_filter("[Webserver]");
    info!(logger, "[Webserver]", "Listening on port", 4200)?;
    let shown = info!(logger, "[Database]", "Connected")?;
    println!("   [Database] line emitted: {}", shown);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
