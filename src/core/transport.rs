//! Transport trait for the underlying logging facility

use super::{error::Result, facility::Facility, record::LogRecord};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Open flags passed to [`Transport::open`], mirroring syslog(3) `LOG_*` options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogOptions(u32);

impl LogOptions {
    pub const NONE: LogOptions = LogOptions(0);
    /// Tag each record with the process id
    pub const PID: LogOptions = LogOptions(0x01);
    /// Fall back to the console when the facility is unavailable
    pub const CONS: LogOptions = LogOptions(0x02);
    pub const ODELAY: LogOptions = LogOptions(0x04);
    pub const NDELAY: LogOptions = LogOptions(0x08);
    pub const NOWAIT: LogOptions = LogOptions(0x10);
    /// Also print to stderr
    pub const PERROR: LogOptions = LogOptions(0x20);

    const NAMED: [(&'static str, LogOptions); 6] = [
        ("pid", LogOptions::PID),
        ("cons", LogOptions::CONS),
        ("odelay", LogOptions::ODELAY),
        ("ndelay", LogOptions::NDELAY),
        ("nowait", LogOptions::NOWAIT),
        ("perror", LogOptions::PERROR),
    ];

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: LogOptions) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let lowered = name.to_ascii_lowercase();
        Self::NAMED
            .iter()
            .find(|(n, _)| *n == lowered)
            .map(|(_, opt)| *opt)
    }

    /// Names of the flags set in `self`
    pub fn names(self) -> Vec<&'static str> {
        Self::NAMED
            .iter()
            .filter(|(_, opt)| self.contains(*opt))
            .map(|(n, _)| *n)
            .collect()
    }
}

impl Default for LogOptions {
    fn default() -> Self {
        LogOptions::PID | LogOptions::CONS
    }
}

impl BitOr for LogOptions {
    type Output = LogOptions;

    fn bitor(self, rhs: LogOptions) -> LogOptions {
        LogOptions(self.0 | rhs.0)
    }
}

impl BitOrAssign for LogOptions {
    fn bitor_assign(&mut self, rhs: LogOptions) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for LogOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join("|"))
    }
}

/// The open/write/close capability of a logging facility.
///
/// A logger calls `open`, `write` and `close` in that order while holding
/// its instance lock, once per surviving record. `close` is called even
/// when `write` fails. Implementations therefore never see two sequences
/// interleave on the same logger. A `close` error after a successful
/// `write` is reported on stderr and the record counts as written.
pub trait Transport: Send {
    fn open(&mut self, ident: &str, options: LogOptions, facility: Facility) -> Result<()>;
    fn write(&mut self, record: &LogRecord) -> Result<()>;
    fn close(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn open(&mut self, ident: &str, options: LogOptions, facility: Facility) -> Result<()> {
        (**self).open(ident, options, facility)
    }

    fn write(&mut self, record: &LogRecord) -> Result<()> {
        (**self).write(record)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
