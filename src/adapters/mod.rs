//! Vocabulary adapters
//!
//! An [`Adapter`] wraps one [`Logger`] and speaks a different severity
//! vocabulary. The vocabulary is a [`ForeignLevel`] type that carries a
//! fixed table to and from core [`Severity`] values. Every adapter
//! validates and filters through the same core logger.

pub mod std_level;

pub use std_level::{StdLevel, StdLogger};

use crate::core::{
    Facility, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Result, Severity, Transport,
    WorkError,
};
use std::fmt;
use std::marker::PhantomData;

/// A severity vocabulary with a fixed mapping onto core severities
pub trait ForeignLevel: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Every level with its core severity and foreign numeric code
    const MAPPING: &'static [(Self, Severity, i32)];

    /// Level used for a foreign code that is not in the table
    const FALLBACK: Self;

    fn name(self) -> &'static str;

    fn severity(self) -> Severity {
        Self::entry(|(level, _, _)| *level == self)
            .map(|(_, severity, _)| severity)
            .unwrap_or(Severity::Emerg)
    }

    fn code(self) -> i32 {
        Self::entry(|(level, _, _)| *level == self)
            .map(|(_, _, code)| code)
            .unwrap_or(i32::MAX)
    }

    fn from_severity(severity: Severity) -> Option<Self> {
        Self::entry(|(_, s, _)| *s == severity).map(|(level, _, _)| level)
    }

    fn from_code(code: i32) -> Option<Self> {
        Self::entry(|(_, _, c)| *c == code).map(|(level, _, _)| level)
    }

    fn from_name(name: &str) -> Result<Self> {
        let lowered = name.to_ascii_lowercase();
        Self::MAPPING
            .iter()
            .map(|(level, _, _)| *level)
            .find(|level| level.name() == lowered)
            .ok_or_else(|| LoggerError::invalid_severity(name, &Self::names()))
    }

    fn names() -> Vec<&'static str> {
        Self::MAPPING.iter().map(|(level, _, _)| level.name()).collect()
    }

    #[doc(hidden)]
    fn entry<P>(predicate: P) -> Option<(Self, Severity, i32)>
    where
        P: Fn(&&(Self, Severity, i32)) -> bool,
    {
        Self::MAPPING.iter().find(predicate).copied()
    }
}

/// A [`Logger`] seen through the vocabulary `L`
pub struct Adapter<L: ForeignLevel> {
    core: Logger,
    _vocabulary: PhantomData<L>,
}

impl<L: ForeignLevel> Adapter<L> {
    /// Build an adapter over the platform default transport
    pub fn new(app_name: impl Into<String>, level: L, facility: Facility) -> Result<Self> {
        Logger::new(app_name, level.severity(), facility).map(Self::wrap)
    }

    pub fn with_transport<T: Transport + 'static>(
        app_name: impl Into<String>,
        level: L,
        facility: Facility,
        transport: T,
    ) -> Result<Self> {
        Logger::with_transport(app_name, level.severity(), facility, transport).map(Self::wrap)
    }

    fn wrap(core: Logger) -> Self {
        Self {
            core,
            _vocabulary: PhantomData,
        }
    }

    pub fn app_name(&self) -> &str {
        self.core.app_name()
    }

    pub fn facility(&self) -> Facility {
        self.core.facility()
    }

    /// The current threshold in this vocabulary
    pub fn level(&self) -> L {
        L::from_severity(self.core.threshold()).unwrap_or(L::FALLBACK)
    }

    /// The current threshold as a foreign numeric code
    pub fn level_code(&self) -> i32 {
        self.level().code()
    }

    pub fn set_level(&self, level: L) {
        self.core.set_threshold(level.severity());
    }

    pub fn set_level_name(&self, name: &str) -> Result<()> {
        let level = L::from_name(name)?;
        self.set_level(level);
        Ok(())
    }

    pub fn is_enabled(&self, level: L) -> bool {
        self.core.is_enabled(level.severity())
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        self.core.metrics()
    }

    pub fn log(&self, level: L, message: impl Into<String>) -> Result<()> {
        self.core.log(level.severity(), message)
    }

    pub fn log_with<F>(&self, level: L, message: F) -> Result<()>
    where
        F: FnOnce() -> String,
    {
        self.core.log_with(level.severity(), message)
    }

    pub fn time<F: FnOnce()>(&self, level: L, message: impl Into<String>, work: F) -> Result<()> {
        self.core.time(level.severity(), message, work)
    }

    pub fn try_time<F, E>(&self, level: L, message: impl Into<String>, work: F) -> Result<()>
    where
        F: FnOnce() -> std::result::Result<(), E>,
        E: Into<WorkError>,
    {
        self.core.try_time(level.severity(), message, work)
    }

    /// Emit by foreign numeric code. An unknown code is logged at `L::FALLBACK`.
    pub fn add(&self, code: i32, message: impl Into<String>) -> Result<()> {
        self.log(Self::resolve_code(code), message)
    }

    /// Timed form of [`Adapter::add`]
    pub fn add_timed<F: FnOnce()>(&self, code: i32, message: impl Into<String>, work: F) -> Result<()> {
        self.time(Self::resolve_code(code), message, work)
    }

    fn resolve_code(code: i32) -> L {
        L::from_code(code).unwrap_or(L::FALLBACK)
    }
}

impl<L: ForeignLevel> fmt::Debug for Adapter<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("level", &self.level())
            .field("core", &self.core)
            .finish()
    }
}

impl LoggerBuilder {
    /// Build an adapter, parsing the severity name in the vocabulary `L`.
    ///
    /// A typed threshold is accepted when some level of `L` maps to it.
    pub fn build_adapter<L: ForeignLevel>(self) -> Result<Adapter<L>> {
        self.build_with(
            |name| L::from_name(name).map(L::severity),
            |severity| {
                L::from_severity(severity)
                    .map(L::severity)
                    .ok_or_else(|| LoggerError::invalid_severity(severity.name(), &L::names()))
            },
        )
        .map(Adapter::wrap)
    }
}
