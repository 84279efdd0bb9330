//! # Leveled Syslog
//!
//! A leveled logging facade in front of syslog(3).
//!
//! ## Features
//!
//! - **Severity Filtering**: Messages below the threshold cost nothing, not even their work block
//! - **Timed Blocks**: Run a closure and fold its elapsed time into the message
//! - **Vocabulary Adapters**: Log with debug/info/warn/error/fatal names over syslog severities
//! - **Thread Safe**: One lock per logger serializes the open/write/close sequence
//! - **Injectable Transports**: syslog(3), console, or an in-memory recorder for tests
//!
//! ```
//! use leveled_syslog::prelude::*;
//!
//! let transport = MemoryTransport::new();
//! let logger = Logger::with_transport("test_app", Severity::Warning, Facility::Local0, transport.clone())
//!     .unwrap();
//!
//! logger.info("hidden").unwrap();
//! logger.err("shown").unwrap();
//!
//! assert_eq!(transport.len(), 1);
//! ```

pub mod access_log;
pub mod adapters;
pub mod core;
pub mod macros;
pub mod transports;

pub mod prelude {
    pub use crate::access_log::{AccessLog, AccessRecord, RequestInfo, ResponseInfo};
    pub use crate::adapters::{Adapter, ForeignLevel, StdLevel, StdLogger};
    pub use crate::core::{
        Facility, LogOptions, LogRecord, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
        LoggerSettings, Result, Severity, Transport, TransportKind, WorkError,
    };
    #[cfg(unix)]
    pub use crate::transports::SyslogTransport;
    pub use crate::transports::{ConsoleFormat, ConsoleTransport, MemoryTransport};
}

pub use access_log::{AccessLog, AccessRecord, RequestInfo, ResponseInfo};
pub use adapters::{Adapter, ForeignLevel, StdLevel, StdLogger};
pub use core::{
    Facility, LogOptions, LogRecord, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
    LoggerSettings, Result, Severity, Transport, TransportKind, WorkError,
};
#[cfg(unix)]
pub use transports::SyslogTransport;
pub use transports::{ConsoleFormat, ConsoleTransport, MemoryTransport};
