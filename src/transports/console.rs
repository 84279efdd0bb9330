//! Console transport implementation
//!
//! Prints one line per record in a syslog-like layout:
//! `Oct 19 10:30:45 app[4242]: <local0.err> message`. Records at `err` or
//! more urgent go to stderr, the rest to stdout.

use crate::core::{Facility, LogOptions, LogRecord, LoggerError, Result, Severity, Transport};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::Write;

/// Line layout for the console transport
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsoleFormat {
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Clone)]
struct OpenHandle {
    ident: String,
    options: LogOptions,
    facility: Facility,
}

pub struct ConsoleTransport {
    use_colors: bool,
    format: ConsoleFormat,
    timestamp_format: String,
    handle: Option<OpenHandle>,
}

impl ConsoleTransport {
    pub fn new() -> Self {
        Self {
            use_colors: cfg!(feature = "console"),
            format: ConsoleFormat::default(),
            timestamp_format: "%b %e %H:%M:%S".to_string(),
            handle: None,
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Set the line layout
    ///
    /// # Example
    ///
    /// ```
    /// use leveled_syslog::transports::{ConsoleFormat, ConsoleTransport};
    ///
    /// let transport = ConsoleTransport::new().with_format(ConsoleFormat::Json);
    /// ```
    #[must_use]
    pub fn with_format(mut self, format: ConsoleFormat) -> Self {
        self.format = format;
        self
    }

    /// Set a strftime-compatible timestamp format for text lines
    #[must_use]
    pub fn with_timestamp_format(mut self, format_str: &str) -> Self {
        self.timestamp_format = format_str.to_string();
        self
    }

    fn format_line(&self, handle: &OpenHandle, record: &LogRecord) -> Result<String> {
        let pid = handle
            .options
            .contains(LogOptions::PID)
            .then(std::process::id);

        match self.format {
            ConsoleFormat::Text => {
                let ident = match pid {
                    Some(pid) => format!("{}[{}]", handle.ident, pid),
                    None => handle.ident.clone(),
                };
                let tag = format!("<{}.{}>", handle.facility, record.severity);
                Ok(format!(
                    "{} {}: {} {}",
                    record.timestamp.format(&self.timestamp_format),
                    ident,
                    self.paint(tag, record.severity),
                    record.message
                ))
            }
            ConsoleFormat::Json => {
                let line = serde_json::json!({
                    "timestamp": record.timestamp.to_rfc3339(),
                    "ident": handle.ident,
                    "pid": pid,
                    "facility": handle.facility,
                    "severity": record.severity,
                    "message": record.message,
                });
                serde_json::to_string(&line)
                    .map_err(|e| LoggerError::facility_write(self.name(), e.to_string()))
            }
        }
    }

    fn flush_streams(&self, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
        out.flush()
            .and_then(|()| err.flush())
            .map_err(|e| LoggerError::facility_write(self.name(), e.to_string()))
    }

    #[cfg(feature = "console")]
    fn paint(&self, tag: String, severity: Severity) -> String {
        use colored::Color::*;

        if !self.use_colors {
            return tag;
        }
        let color = match severity {
            Severity::Emerg | Severity::Alert | Severity::Crit => BrightRed,
            Severity::Err => Red,
            Severity::Warning => Yellow,
            Severity::Notice => Cyan,
            Severity::Info => Green,
            Severity::Debug => BrightBlack,
        };
        tag.color(color).to_string()
    }

    #[cfg(not(feature = "console"))]
    fn paint(&self, tag: String, _severity: Severity) -> String {
        tag
    }
}

impl Default for ConsoleTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ConsoleTransport {
    fn open(&mut self, ident: &str, options: LogOptions, facility: Facility) -> Result<()> {
        self.handle = Some(OpenHandle {
            ident: ident.to_string(),
            options,
            facility,
        });
        Ok(())
    }

    fn write(&mut self, record: &LogRecord) -> Result<()> {
        let handle = self
            .handle
            .as_ref()
            .ok_or_else(|| LoggerError::facility_write(self.name(), "transport not open"))?;
        let line = self.format_line(handle, record)?;

        let result = if record.severity.passes(Severity::Err) {
            writeln!(std::io::stderr().lock(), "{}", line)
        } else {
            writeln!(std::io::stdout().lock(), "{}", line)
        };
        result.map_err(|e| LoggerError::facility_write(self.name(), e.to_string()))
    }

    fn close(&mut self) -> Result<()> {
        self.handle = None;
        self.flush_streams(&mut std::io::stdout(), &mut std::io::stderr())
    }

    fn name(&self) -> &str {
        "console"
    }
}
