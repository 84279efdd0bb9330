//! Access log example
//!
//! Wraps a toy request handler and writes one line per request at info.
//!
//! Run with: cargo run --example access_log

use leveled_syslog::prelude::*;
use std::sync::Arc;

fn handle(request: &RequestInfo) -> ResponseInfo {
    match request.path.as_str() {
        "/" => ResponseInfo {
            status: 200,
            content_length: Some(512),
        },
        _ => ResponseInfo {
            status: 404,
            content_length: None,
        },
    }
}

fn main() -> Result<()> {
    println!("=== Leveled Syslog - Access Log Example ===\n");

    let logger = StdLogger::with_transport(
        "access_log",
        StdLevel::Info,
        Facility::Local1,
        ConsoleTransport::new(),
    )?;
    let access = AccessLog::new(Arc::new(logger));

    let mut home = RequestInfo::new("GET", "/");
    home.remote_addr = Some("192.0.2.10".to_string());
    access.call(&home, handle)?;

    let mut missing = RequestInfo::new("POST", "/missing");
    missing.forwarded_for = Some("198.51.100.7".to_string());
    missing.remote_user = Some("alice".to_string());
    missing.query_string = "retry=1".to_string();
    access.call(&missing, handle)?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
