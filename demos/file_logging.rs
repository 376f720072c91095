//! File logging example
//!
//! Writes plain lines into a daily log file next to the colored console output.
//!
//! Run with: cargo run --example file_logging

use marvin_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Marvin Logger - File Logging Example ===\n");

    let log_dir = std::env::temp_dir().join("marvin_logger_demo");

    let logger = Logger::builder()
        .level("info")
        .log_output_directory(&log_dir)
        .log_format("{{DATETIME}} {{PID}} {{LOG}}")
        .build();

    logger.important(["[Webserver]", "Starting"])?;
    logger.info(["[Webserver]", "Listening for incoming connections on port", "4200"])?;
    logger.warn(["[Cache]", "Miss ratio above threshold"])?;
    logger.debug(["Not written: below the minimum level"])?;
    logger.flush()?;

    println!("\nLogs written to: {}", log_dir.display());
    println!("Hourly rotation and PID file names are available through the builder:");
    println!("  .rotation(RotationFrequency::Hourly).pid_in_filename(true)");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
