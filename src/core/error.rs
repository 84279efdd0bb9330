//! Error types for the logger system

use std::time::Duration;

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Boxed error returned by a failing timed work block
pub type WorkError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A required construction parameter was absent
    #[error("The '{parameter}' parameter is required.")]
    MissingParameter { parameter: &'static str },

    /// Severity name not present in the severity table
    #[error("The 'severity' parameter is invalid: '{value}'. Valid options are: {options}")]
    InvalidSeverity { value: String, options: String },

    /// Facility name not present in the facility table
    #[error("The 'facility' parameter is invalid: '{value}'. Valid options are: {options}")]
    InvalidFacility { value: String, options: String },

    /// The transport refused to open a handle
    #[error("Failed to open {transport} transport: {message}")]
    FacilityOpen { transport: String, message: String },

    /// The transport failed while writing a record
    #[error("Failed to write to {transport} transport: {message}")]
    FacilityWrite { transport: String, message: String },

    /// A timed work block failed; no record was written
    #[error("Timed block failed after {elapsed:?}: {source}")]
    WorkFailed {
        elapsed: Duration,
        #[source]
        source: WorkError,
    },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create a missing parameter error
    pub fn missing(parameter: &'static str) -> Self {
        LoggerError::MissingParameter { parameter }
    }

    /// Create an invalid severity error listing the accepted names
    pub fn invalid_severity(value: impl Into<String>, options: &[&str]) -> Self {
        LoggerError::InvalidSeverity {
            value: value.into(),
            options: options.join(", "),
        }
    }

    /// Create an invalid facility error listing the accepted names
    pub fn invalid_facility(value: impl Into<String>, options: &[&str]) -> Self {
        LoggerError::InvalidFacility {
            value: value.into(),
            options: options.join(", "),
        }
    }

    pub fn facility_open(transport: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FacilityOpen {
            transport: transport.into(),
            message: message.into(),
        }
    }

    pub fn facility_write(transport: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FacilityWrite {
            transport: transport.into(),
            message: message.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// True for errors raised while validating names or settings
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LoggerError::MissingParameter { .. }
                | LoggerError::InvalidSeverity { .. }
                | LoggerError::InvalidFacility { .. }
                | LoggerError::InvalidConfiguration { .. }
        )
    }
}
