//! Syslog transport
//!
//! Routes records to syslog(3) through libc `openlog`/`syslog`/`closelog`.
//! `open` prepares the ident, and `write` runs the whole
//! openlog/syslog/closelog sequence under a process-wide lock, because
//! syslog's connection and ident pointer are global to the process and
//! several loggers may share it.

use crate::core::{Facility, LogOptions, LogRecord, LoggerError, Result, Transport};
use parking_lot::Mutex;
use std::ffi::CString;

static SYSLOG_LOCK: Mutex<()> = parking_lot::const_mutex(());

#[derive(Debug)]
struct OpenHandle {
    ident: CString,
    options: LogOptions,
    facility: Facility,
}

/// Transport backed by the host's syslog(3)
///
/// # Example
///
/// ```no_run
/// use leveled_syslog::prelude::*;
///
/// let logger = Logger::with_transport("my-daemon", Severity::Info, Facility::Daemon, SyslogTransport::new())
///     .unwrap();
/// logger.info("daemon started").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct SyslogTransport {
    handle: Option<OpenHandle>,
}

impl SyslogTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for SyslogTransport {
    fn open(&mut self, ident: &str, options: LogOptions, facility: Facility) -> Result<()> {
        let ident = CString::new(ident)
            .map_err(|_| LoggerError::facility_open(self.name(), "ident contains a NUL byte"))?;
        self.handle = Some(OpenHandle {
            ident,
            options,
            facility,
        });
        Ok(())
    }

    fn write(&mut self, record: &LogRecord) -> Result<()> {
        let handle = self
            .handle
            .as_ref()
            .ok_or_else(|| LoggerError::facility_write(self.name(), "transport not open"))?;
        let message = CString::new(record.message.as_str())
            .map_err(|_| LoggerError::facility_write(self.name(), "message contains a NUL byte"))?;

        let _process = SYSLOG_LOCK.lock();

        // LogOptions bits are the glibc/BSD LOG_* option values.
        // SAFETY: ident and message are valid C strings that outlive the
        // closelog call; the format string is a NUL-terminated literal, so
        // `%` in the message is never interpreted.
        unsafe {
            libc::openlog(
                handle.ident.as_ptr(),
                handle.options.bits() as libc::c_int,
                handle.facility.code(),
            );
            libc::syslog(
                record.severity.code(),
                b"%s\0".as_ptr().cast::<libc::c_char>(),
                message.as_ptr(),
            );
            libc::closelog();
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.handle = None;
        Ok(())
    }

    fn name(&self) -> &str {
        "syslog"
    }
}
