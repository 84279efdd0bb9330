//! The debug/info/warn/error/fatal/unknown vocabulary
//!
//! Numeric codes follow the common logger convention (`debug` = 0 up to
//! `unknown` = 5), which is what [`Adapter::add`] dispatches on.

use super::{Adapter, ForeignLevel};
use crate::core::{LoggerError, Result, Severity};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StdLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Unknown,
}

impl StdLevel {
    pub const ALL: [StdLevel; 6] = [
        StdLevel::Debug,
        StdLevel::Info,
        StdLevel::Warn,
        StdLevel::Error,
        StdLevel::Fatal,
        StdLevel::Unknown,
    ];
}

impl ForeignLevel for StdLevel {
    const MAPPING: &'static [(Self, Severity, i32)] = &[
        (StdLevel::Debug, Severity::Debug, 0),
        (StdLevel::Info, Severity::Info, 1),
        (StdLevel::Warn, Severity::Warning, 2),
        (StdLevel::Error, Severity::Err, 3),
        (StdLevel::Fatal, Severity::Alert, 4),
        (StdLevel::Unknown, Severity::Emerg, 5),
    ];

    // Unrecognized codes go to the most urgent level so they are never filtered.
    const FALLBACK: Self = StdLevel::Unknown;

    fn name(self) -> &'static str {
        match self {
            StdLevel::Debug => "debug",
            StdLevel::Info => "info",
            StdLevel::Warn => "warn",
            StdLevel::Error => "error",
            StdLevel::Fatal => "fatal",
            StdLevel::Unknown => "unknown",
        }
    }
}

impl fmt::Display for StdLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for StdLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// A logger speaking the debug/info/warn/error/fatal/unknown vocabulary
///
/// # Example
/// ```
/// use leveled_syslog::prelude::*;
///
/// let transport = MemoryTransport::new();
/// let logger = StdLogger::with_transport("test_app", StdLevel::Warn, Facility::Local0, transport.clone())
///     .unwrap();
///
/// logger.info("x").unwrap();
/// logger.error("y").unwrap();
///
/// assert_eq!(transport.len(), 1);
/// assert_eq!(transport.records()[0].severity, Severity::Err);
/// ```
pub type StdLogger = Adapter<StdLevel>;

macro_rules! std_level_methods {
    ($($name:ident, $timed:ident, $enabled:ident => $level:ident;)+) => {
        impl Adapter<StdLevel> {
            $(
                #[inline]
                pub fn $name(&self, message: impl Into<String>) -> Result<()> {
                    self.log(StdLevel::$level, message)
                }

                #[inline]
                pub fn $timed<F: FnOnce()>(&self, message: impl Into<String>, work: F) -> Result<()> {
                    self.time(StdLevel::$level, message, work)
                }

                #[inline]
                pub fn $enabled(&self) -> bool {
                    self.is_enabled(StdLevel::$level)
                }
            )+
        }
    };
}

std_level_methods! {
    debug, debug_timed, is_debug => Debug;
    info, info_timed, is_info => Info;
    warn, warn_timed, is_warn => Warn;
    error, error_timed, is_error => Error;
    fatal, fatal_timed, is_fatal => Fatal;
    unknown, unknown_timed, is_unknown => Unknown;
}
