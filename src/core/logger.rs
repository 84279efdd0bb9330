//! Main logger implementation
//!
//! [`Logger`] holds a validated configuration (application name, facility,
//! threshold) plus the transport behind an instance-wide lock. Every emit
//! is synchronous: filter, optionally run and time a work block, then one
//! open/write/close sequence on the transport with the lock held.

use super::{
    error::{LoggerError, Result, WorkError},
    facility::Facility,
    metrics::LoggerMetrics,
    record::{timed_message, LogRecord},
    severity::Severity,
    transport::{LogOptions, Transport},
};
use parking_lot::{Mutex, RwLock};
use std::convert::Infallible;
use std::fmt;
use std::time::Instant;

pub struct Logger {
    app_name: String,
    facility: Facility,
    options: LogOptions,
    threshold: RwLock<Severity>,
    /// Instance lock; held only around open/write/close
    transport: Mutex<Box<dyn Transport>>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Build a logger over the platform default transport.
    ///
    /// Fails with [`LoggerError::MissingParameter`] when `app_name` is empty.
    pub fn new(app_name: impl Into<String>, threshold: Severity, facility: Facility) -> Result<Self> {
        Self::from_boxed(
            app_name.into(),
            threshold,
            facility,
            crate::transports::default_transport(),
        )
    }

    pub fn with_transport<T: Transport + 'static>(
        app_name: impl Into<String>,
        threshold: Severity,
        facility: Facility,
        transport: T,
    ) -> Result<Self> {
        Self::from_boxed(app_name.into(), threshold, facility, Box::new(transport))
    }

    fn from_boxed(
        app_name: String,
        threshold: Severity,
        facility: Facility,
        transport: Box<dyn Transport>,
    ) -> Result<Self> {
        if app_name.is_empty() {
            return Err(LoggerError::missing("app_name"));
        }

        Ok(Self {
            app_name,
            facility,
            options: LogOptions::default(),
            threshold: RwLock::new(threshold),
            transport: Mutex::new(transport),
            metrics: LoggerMetrics::new(),
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn facility(&self) -> Facility {
        self.facility
    }

    pub fn options(&self) -> LogOptions {
        self.options
    }

    /// The least urgent severity currently written
    pub fn threshold(&self) -> Severity {
        *self.threshold.read()
    }

    /// Replace the threshold. Only emits that start filtering afterwards see it.
    pub fn set_threshold(&self, threshold: Severity) {
        *self.threshold.write() = threshold;
    }

    /// Replace the threshold by name, leaving it untouched on an unknown name
    pub fn set_threshold_name(&self, name: &str) -> Result<()> {
        let threshold: Severity = name.parse()?;
        self.set_threshold(threshold);
        Ok(())
    }

    #[inline]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity.passes(self.threshold())
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Emit `message` at `severity`.
    ///
    /// A message below the threshold returns `Ok(())` without touching the
    /// transport. Transport failures are returned as-is and not retried.
    pub fn log(&self, severity: Severity, message: impl Into<String>) -> Result<()> {
        if !self.admit(severity) {
            return Ok(());
        }
        self.dispatch(LogRecord::new(severity, message))
    }

    /// Emit a message that is only built when `severity` survives filtering
    pub fn log_with<F>(&self, severity: Severity, message: F) -> Result<()>
    where
        F: FnOnce() -> String,
    {
        if !self.admit(severity) {
            return Ok(());
        }
        self.dispatch(LogRecord::new(severity, message()))
    }

    /// Run `work`, then emit `message` prefixed with the elapsed time.
    ///
    /// `work` is skipped entirely when `severity` is filtered out.
    pub fn time<F>(&self, severity: Severity, message: impl Into<String>, work: F) -> Result<()>
    where
        F: FnOnce(),
    {
        self.try_time(severity, message, || {
            work();
            Ok::<(), Infallible>(())
        })
    }

    /// Fallible form of [`Logger::time`].
    ///
    /// If `work` fails, nothing is written and [`LoggerError::WorkFailed`]
    /// carries the measured duration and the block's error.
    pub fn try_time<F, E>(&self, severity: Severity, message: impl Into<String>, work: F) -> Result<()>
    where
        F: FnOnce() -> std::result::Result<(), E>,
        E: Into<WorkError>,
    {
        if !self.admit(severity) {
            return Ok(());
        }

        let started = Instant::now();
        let outcome = work();
        let elapsed = started.elapsed();

        if let Err(e) = outcome {
            self.metrics.record_failed();
            return Err(LoggerError::WorkFailed {
                elapsed,
                source: e.into(),
            });
        }

        let message = timed_message(elapsed, &message.into());
        self.dispatch(LogRecord::new(severity, message))
    }

    /// Threshold check; counts the suppression when the message is dropped
    fn admit(&self, severity: Severity) -> bool {
        if self.is_enabled(severity) {
            true
        } else {
            self.metrics.record_suppressed();
            false
        }
    }

    /// One scoped write: open, write, close under the instance lock
    fn dispatch(&self, record: LogRecord) -> Result<()> {
        let mut transport = self.transport.lock();

        if let Err(e) = transport.open(&self.app_name, self.options, self.facility) {
            self.metrics.record_failed();
            return Err(e);
        }

        let written = transport.write(&record);
        let closed = transport.close();
        drop(transport);

        match (written, closed) {
            (Ok(()), Ok(())) => {
                self.metrics.record_written();
                Ok(())
            }
            // the record was delivered
            (Ok(()), Err(close_err)) => {
                eprintln!(
                    "[LOGGER ERROR] Transport close failed after successful write: {}",
                    close_err
                );
                self.metrics.record_written();
                Ok(())
            }
            (Err(e), Ok(())) => {
                self.metrics.record_failed();
                Err(e)
            }
            (Err(write_err), Err(close_err)) => {
                eprintln!(
                    "[LOGGER ERROR] Transport close failed after write error: {}",
                    close_err
                );
                self.metrics.record_failed();
                Err(write_err)
            }
        }
    }
}

macro_rules! severity_methods {
    ($($name:ident, $timed:ident => $severity:ident;)+) => {
        impl Logger {
            $(
                #[inline]
                pub fn $name(&self, message: impl Into<String>) -> Result<()> {
                    self.log(Severity::$severity, message)
                }

                #[inline]
                pub fn $timed<F: FnOnce()>(&self, message: impl Into<String>, work: F) -> Result<()> {
                    self.time(Severity::$severity, message, work)
                }
            )+
        }
    };
}

severity_methods! {
    emerg, emerg_timed => Emerg;
    alert, alert_timed => Alert;
    crit, crit_timed => Crit;
    err, err_timed => Err;
    warning, warning_timed => Warning;
    notice, notice_timed => Notice;
    info, info_timed => Info;
    debug, debug_timed => Debug;
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("app_name", &self.app_name)
            .field("facility", &self.facility)
            .field("threshold", &self.threshold())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a [`Logger`] from names or typed values
///
/// # Example
/// ```
/// use leveled_syslog::prelude::*;
///
/// let logger = Logger::builder()
///     .app_name("billing")
///     .severity("warning")
///     .facility("local0")
///     .transport(MemoryTransport::new())
///     .build()
///     .unwrap();
///
/// assert_eq!(logger.threshold(), Severity::Warning);
/// ```
#[derive(Default)]
pub struct LoggerBuilder {
    app_name: Option<String>,
    severity: Option<String>,
    threshold: Option<Severity>,
    facility: Option<String>,
    options: Option<LogOptions>,
    transport: Option<Box<dyn Transport>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Set the threshold by name; the name is checked by `build`
    #[must_use = "builder methods return a new value"]
    pub fn severity(mut self, name: impl Into<String>) -> Self {
        self.severity = Some(name.into());
        self.threshold = None;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, severity: Severity) -> Self {
        self.threshold = Some(severity);
        self.severity = None;
        self
    }

    /// Set the facility by name; the name is checked by `build`
    #[must_use = "builder methods return a new value"]
    pub fn facility(mut self, name: impl Into<String>) -> Self {
        self.facility = Some(name.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn category(mut self, facility: Facility) -> Self {
        self.facility = Some(facility.name().to_string());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn options(mut self, options: LogOptions) -> Self {
        self.options = Some(options);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    pub(crate) fn boxed_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the logger, parsing the severity in the core vocabulary
    pub fn build(self) -> Result<Logger> {
        self.build_with(|name| name.parse::<Severity>(), Ok)
    }

    /// Build with a caller-supplied severity parser.
    ///
    /// A name set with `severity` goes through `parse_severity`; a typed
    /// value set with `threshold` goes through `check_threshold`. Presence
    /// of all three parameters is checked before either runs.
    pub(crate) fn build_with<P, C>(self, parse_severity: P, check_threshold: C) -> Result<Logger>
    where
        P: FnOnce(&str) -> Result<Severity>,
        C: FnOnce(Severity) -> Result<Severity>,
    {
        let app_name = self
            .app_name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| LoggerError::missing("app_name"))?;
        let threshold = match (self.threshold, self.severity) {
            (Some(threshold), _) => ThresholdInput::Typed(threshold),
            (None, Some(name)) => ThresholdInput::Named(name),
            (None, None) => return Err(LoggerError::missing("severity")),
        };
        let facility = self.facility.ok_or_else(|| LoggerError::missing("facility"))?;

        let threshold = match threshold {
            ThresholdInput::Typed(threshold) => check_threshold(threshold)?,
            ThresholdInput::Named(name) => parse_severity(&name)?,
        };
        let facility: Facility = facility.parse()?;
        let transport = self
            .transport
            .unwrap_or_else(crate::transports::default_transport);

        let mut logger = Logger::from_boxed(app_name, threshold, facility, transport)?;
        if let Some(options) = self.options {
            logger.options = options;
        }
        Ok(logger)
    }
}

enum ThresholdInput {
    Typed(Severity),
    Named(String),
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
