//! Basic logger usage example
//!
//! Demonstrates threshold filtering and timed blocks with the console transport.
//!
//! Run with: cargo run --example basic_usage

use leveled_syslog::prelude::*;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Leveled Syslog - Basic Usage Example ===\n");

    let logger = Logger::builder()
        .app_name("basic_usage")
        .severity("debug")
        .facility("local0")
        .transport(ConsoleTransport::new())
        .build()?;

    println!("1. Logging at every severity:");
    for severity in Severity::ALL {
        logger.log(severity, format!("This is a {} message", severity))?;
    }

    println!("\n2. Raising the threshold to warning:");
    logger.set_threshold(Severity::Warning);
    logger.info("Info message (hidden)")?;
    logger.notice("Notice message (hidden)")?;
    logger.warning("Warning message (visible)")?;
    logger.err("Error message (visible)")?;

    println!("\n3. Timing a block of work:");
    logger.warning_timed("Slept for a while", || std::thread::sleep(Duration::from_millis(50)))?;
    logger.debug_timed("Never runs below the threshold", || unreachable!())?;

    let metrics = logger.metrics();
    println!(
        "\nWritten: {}, suppressed: {}",
        metrics.written(),
        metrics.suppressed()
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
