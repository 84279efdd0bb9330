//! Core logger types and traits

pub mod config;
pub mod error;
pub mod facility;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod severity;
pub mod transport;

pub use config::{LoggerSettings, TransportKind};
pub use error::{LoggerError, Result, WorkError};
pub use facility::Facility;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use record::LogRecord;
pub use severity::Severity;
pub use transport::{LogOptions, Transport};
