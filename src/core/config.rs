//! Logger settings loaded from TOML
//!
//! ```toml
//! app_name = "billing"
//! severity = "warning"
//! facility = "local0"
//! options = ["pid", "cons"]
//! transport = "syslog"
//! ```
//!
//! Settings are kept as raw names; validation happens when they are turned
//! into a logger, so a bad file fails with the same errors as a bad
//! constructor call.

use super::{
    error::{LoggerError, Result},
    logger::LoggerBuilder,
    transport::{LogOptions, Transport},
};
use crate::transports::ConsoleTransport;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which transport a settings file asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    Syslog,
    Console,
}

impl Default for TransportKind {
    fn default() -> Self {
        if cfg!(unix) {
            TransportKind::Syslog
        } else {
            TransportKind::Console
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerSettings {
    pub app_name: Option<String>,
    pub severity: Option<String>,
    pub facility: Option<String>,
    /// Open flag names; empty means the default `pid` + `cons`
    pub options: Vec<String>,
    pub transport: TransportKind,
}

impl LoggerSettings {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| LoggerError::config("LoggerSettings", e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation("reading logger settings", path.display().to_string(), e)
        })?;
        Self::from_toml_str(&source)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| LoggerError::config("LoggerSettings", e.to_string()))
    }

    /// Resolve the option names into flags
    pub fn log_options(&self) -> Result<LogOptions> {
        if self.options.is_empty() {
            return Ok(LogOptions::default());
        }
        self.options.iter().try_fold(LogOptions::NONE, |acc, name| {
            LogOptions::from_name(name)
                .map(|opt| acc | opt)
                .ok_or_else(|| {
                    LoggerError::config("LoggerSettings", format!("unknown option '{}'", name))
                })
        })
    }

    /// A builder carrying these settings and the requested transport.
    ///
    /// Missing or unknown names are reported when the builder is built.
    pub fn builder(&self) -> Result<LoggerBuilder> {
        let mut builder = LoggerBuilder::new()
            .options(self.log_options()?)
            .boxed_transport(self.make_transport());
        if let Some(app_name) = &self.app_name {
            builder = builder.app_name(app_name.clone());
        }
        if let Some(severity) = &self.severity {
            builder = builder.severity(severity.clone());
        }
        if let Some(facility) = &self.facility {
            builder = builder.facility(facility.clone());
        }
        Ok(builder)
    }

    fn make_transport(&self) -> Box<dyn Transport> {
        match self.transport {
            TransportKind::Console => Box::new(ConsoleTransport::new()),
            TransportKind::Syslog => crate::transports::default_transport(),
        }
    }
}
