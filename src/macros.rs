//! Logging macros for ergonomic log message formatting.
//!
//! These macros format their arguments like `format!` and forward to
//! [`Logger::log`](crate::Logger::log), returning its `Result`.
//!
//! # Examples
//!
//! ```
//! use leveled_syslog::prelude::*;
//! use leveled_syslog::{err, info};
//!
//! let logger = Logger::with_transport("web", Severity::Info, Facility::Local0, MemoryTransport::new())
//!     .unwrap();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//! err!(logger, "Upstream {} returned {}", "billing", 503).unwrap();
//! ```

/// Log a formatted message at the given severity.
///
/// ```
/// # use leveled_syslog::prelude::*;
/// # let logger = Logger::with_transport("app", Severity::Debug, Facility::User, MemoryTransport::new()).unwrap();
/// use leveled_syslog::log;
/// log!(logger, Severity::Notice, "Simple message").unwrap();
/// log!(logger, Severity::Err, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, format!($($arg)+))
    };
}

#[macro_export]
macro_rules! emerg {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Emerg, $($arg)+)
    };
}

#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Alert, $($arg)+)
    };
}

#[macro_export]
macro_rules! crit {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Crit, $($arg)+)
    };
}

#[macro_export]
macro_rules! err {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Err, $($arg)+)
    };
}

#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Notice, $($arg)+)
    };
}

/// Log an info-level message.
///
/// ```
/// # use leveled_syslog::prelude::*;
/// # let logger = Logger::with_transport("app", Severity::Info, Facility::User, MemoryTransport::new()).unwrap();
/// use leveled_syslog::info;
/// info!(logger, "Processing {} items", 100).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}
