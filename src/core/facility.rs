//! Facility table
//!
//! Syslog facility codes. The numeric values are the standard `LOG_*`
//! constants from `<syslog.h>`, already shifted into the facility bits.

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facility {
    Kern,
    #[default]
    User,
    Mail,
    Daemon,
    Auth,
    Syslog,
    Lpr,
    News,
    Uucp,
    Cron,
    Authpriv,
    Ftp,
    Local0,
    Local1,
    Local2,
    Local3,
    Local4,
    Local5,
    Local6,
    Local7,
}

impl Facility {
    pub const ALL: [Facility; 20] = [
        Facility::Kern,
        Facility::User,
        Facility::Mail,
        Facility::Daemon,
        Facility::Auth,
        Facility::Syslog,
        Facility::Lpr,
        Facility::News,
        Facility::Uucp,
        Facility::Cron,
        Facility::Authpriv,
        Facility::Ftp,
        Facility::Local0,
        Facility::Local1,
        Facility::Local2,
        Facility::Local3,
        Facility::Local4,
        Facility::Local5,
        Facility::Local6,
        Facility::Local7,
    ];

    /// The syslog(3) facility code
    pub const fn code(self) -> i32 {
        match self {
            Facility::Kern => 0,
            Facility::User => 1 << 3,
            Facility::Mail => 2 << 3,
            Facility::Daemon => 3 << 3,
            Facility::Auth => 4 << 3,
            Facility::Syslog => 5 << 3,
            Facility::Lpr => 6 << 3,
            Facility::News => 7 << 3,
            Facility::Uucp => 8 << 3,
            Facility::Cron => 9 << 3,
            Facility::Authpriv => 10 << 3,
            Facility::Ftp => 11 << 3,
            Facility::Local0 => 16 << 3,
            Facility::Local1 => 17 << 3,
            Facility::Local2 => 18 << 3,
            Facility::Local3 => 19 << 3,
            Facility::Local4 => 20 << 3,
            Facility::Local5 => 21 << 3,
            Facility::Local6 => 22 << 3,
            Facility::Local7 => 23 << 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Facility::Kern => "kern",
            Facility::User => "user",
            Facility::Mail => "mail",
            Facility::Daemon => "daemon",
            Facility::Auth => "auth",
            Facility::Syslog => "syslog",
            Facility::Lpr => "lpr",
            Facility::News => "news",
            Facility::Uucp => "uucp",
            Facility::Cron => "cron",
            Facility::Authpriv => "authpriv",
            Facility::Ftp => "ftp",
            Facility::Local0 => "local0",
            Facility::Local1 => "local1",
            Facility::Local2 => "local2",
            Facility::Local3 => "local3",
            Facility::Local4 => "local4",
            Facility::Local5 => "local5",
            Facility::Local6 => "local6",
            Facility::Local7 => "local7",
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.code() == code)
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|f| f.name()).collect()
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Facility {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_ascii_lowercase();
        if lowered == "kernel" {
            return Ok(Facility::Kern);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|facility| facility.name() == lowered)
            .ok_or_else(|| LoggerError::invalid_facility(s, &Self::names()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_names() {
        for facility in Facility::ALL {
            assert_eq!(facility.name().parse::<Facility>().unwrap(), facility);
            assert_eq!(Facility::from_code(facility.code()), Some(facility));
        }
    }

    #[test]
    fn test_default_is_user() {
        assert_eq!(Facility::default(), Facility::User);
    }

    #[test]
    fn test_kernel_alias() {
        assert_eq!("kernel".parse::<Facility>().unwrap(), Facility::Kern);
        assert_eq!("LOCAL3".parse::<Facility>().unwrap(), Facility::Local3);
    }

    #[test]
    fn test_rejects_unknown() {
        for bad in ["junk", "", "local8", "LOG_DAEMON"] {
            let err = bad.parse::<Facility>().unwrap_err();
            assert!(matches!(err, LoggerError::InvalidFacility { .. }), "accepted '{bad}'");
        }
    }

    #[test]
    fn test_codes_are_distinct() {
        let mut codes: Vec<i32> = Facility::ALL.iter().map(|f| f.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), Facility::ALL.len());
    }

    #[cfg(unix)]
    #[test]
    fn test_codes_match_libc() {
        assert_eq!(Facility::Kern.code(), libc::LOG_KERN);
        assert_eq!(Facility::User.code(), libc::LOG_USER);
        assert_eq!(Facility::Daemon.code(), libc::LOG_DAEMON);
        assert_eq!(Facility::Cron.code(), libc::LOG_CRON);
        assert_eq!(Facility::Local0.code(), libc::LOG_LOCAL0);
        assert_eq!(Facility::Local7.code(), libc::LOG_LOCAL7);
    }
}
