//! Vocabulary adapter example
//!
//! Demonstrates the debug/info/warn/error/fatal/unknown vocabulary on top of
//! syslog severities, including dispatch by numeric code.
//!
//! Run with: cargo run --example std_vocabulary

use leveled_syslog::prelude::*;

fn main() -> Result<()> {
    println!("=== Leveled Syslog - Std Vocabulary Example ===\n");

    let logger = StdLogger::with_transport(
        "std_vocabulary",
        StdLevel::Info,
        Facility::User,
        ConsoleTransport::new(),
    )?;

    println!("1. Named levels:");
    logger.debug("Debug message (hidden)")?;
    logger.info("Info message")?;
    logger.warn("Warn message")?;
    logger.error("Error message")?;
    logger.fatal("Fatal message")?;

    println!("\n2. Enabled checks:");
    for level in StdLevel::ALL {
        println!(
            "   {:<7} -> {:<7} enabled: {}",
            level,
            level.severity(),
            logger.is_enabled(level)
        );
    }

    println!("\n3. Dispatch by numeric code:");
    for code in [1, 3, 42] {
        logger.add(code, format!("Dispatched with code {}", code))?;
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
