//! In-memory transport
//!
//! Records every write so tests can inspect exactly what reached the
//! facility. Clones share the same storage. It also detects overlapping
//! open/write/close sequences and can be told to fail writes.

use crate::core::{Facility, LogOptions, LogRecord, LoggerError, Result, Severity, Transport};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::sync::Arc;

/// A record as seen by the facility
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenRecord {
    pub ident: String,
    pub facility: Facility,
    pub options: LogOptions,
    /// Present when the handle was opened with [`LogOptions::PID`]
    pub pid: Option<u32>,
    pub severity: Severity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct MemoryState {
    records: Vec<WrittenRecord>,
    open: Option<(String, LogOptions, Facility)>,
    opens: usize,
    closes: usize,
    fail_writes: bool,
    fail_closes: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryTransport {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far
    pub fn records(&self) -> Vec<WrittenRecord> {
        self.state.lock().records.clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.state
            .lock()
            .records
            .iter()
            .map(|r| r.message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.state.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn open_count(&self) -> usize {
        self.state.lock().opens
    }

    pub fn close_count(&self) -> usize {
        self.state.lock().closes
    }

    /// Make subsequent writes fail with [`LoggerError::FacilityWrite`]
    pub fn fail_writes(&self, fail: bool) {
        self.state.lock().fail_writes = fail;
    }

    /// Make subsequent closes fail after releasing the handle
    pub fn fail_closes(&self, fail: bool) {
        self.state.lock().fail_closes = fail;
    }

    pub fn clear(&self) {
        self.state.lock().records.clear();
    }
}

impl Transport for MemoryTransport {
    fn open(&mut self, ident: &str, options: LogOptions, facility: Facility) -> Result<()> {
        let mut state = self.state.lock();
        if state.open.is_some() {
            return Err(LoggerError::facility_open(
                self.name(),
                "handle already open; sequences interleaved",
            ));
        }
        state.open = Some((ident.to_string(), options, facility));
        state.opens += 1;
        Ok(())
    }

    fn write(&mut self, record: &LogRecord) -> Result<()> {
        let mut state = self.state.lock();
        if state.fail_writes {
            return Err(LoggerError::facility_write(self.name(), "write refused"));
        }
        let (ident, options, facility) = state
            .open
            .clone()
            .ok_or_else(|| LoggerError::facility_write(self.name(), "write without open"))?;

        state.records.push(WrittenRecord {
            pid: options
                .contains(LogOptions::PID)
                .then(std::process::id),
            ident,
            facility,
            options,
            severity: record.severity,
            message: record.message.clone(),
            timestamp: record.timestamp,
        });
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        let mut state = self.state.lock();
        state.open = None;
        state.closes += 1;
        if state.fail_closes {
            return Err(LoggerError::facility_write(self.name(), "close refused"));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
