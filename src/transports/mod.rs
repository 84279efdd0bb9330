//! Transport implementations

pub mod console;
pub mod memory;
#[cfg(unix)]
pub mod syslog;

pub use console::{ConsoleFormat, ConsoleTransport};
pub use memory::{MemoryTransport, WrittenRecord};
#[cfg(unix)]
pub use syslog::SyslogTransport;

// Re-export the trait for convenience
pub use crate::core::Transport;

/// The transport used when none is configured: syslog(3) on unix, the console elsewhere
pub fn default_transport() -> Box<dyn Transport> {
    #[cfg(unix)]
    {
        Box::new(SyslogTransport::new())
    }
    #[cfg(not(unix))]
    {
        Box::new(ConsoleTransport::new())
    }
}
