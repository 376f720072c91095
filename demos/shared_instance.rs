//! Shared instance example
//!
//! Uses the process-wide logger from several modules without passing it around.
//!
//! Run with: cargo run --example shared_instance

use marvin_logger::{shared_instance, Result};

mod database {
    use marvin_logger::{shared_instance, Result};

    pub fn connect() -> Result<()> {
        shared_instance().info(["[Database]", "Connected"])?;
        Ok(())
    }
}

mod webserver {
    use marvin_logger::{log_args, shared_instance, Result};

    pub fn start(port: u16) -> Result<()> {
        shared_instance().important(["[Webserver]", "Starting"])?;
        shared_instance().info(log_args!["[Webserver]", "Listening on port", port])?;
        Ok(())
    }
}

fn main() -> Result<()> {
    println!("=== Marvin Logger - Shared Instance Example ===\n");

    shared_instance().set_log_level("info");
    shared_instance().set_debug_filter("[Database]");

    database::connect()?;
    webserver::start(4200)?;
    shared_instance().debug(["Hidden: below the minimum level"])?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
