//! Log record handed to a transport

use super::severity::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One record, built and consumed inside a single emit call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub severity: Severity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl LogRecord {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Fold an elapsed duration into a message: `[time: 1.002345] message`
pub fn timed_message(elapsed: Duration, message: &str) -> String {
    format!("[time: {:.6}] {}", elapsed.as_secs_f64(), message)
}
