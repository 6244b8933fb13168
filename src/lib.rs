//! Best-effort file access reporting.
//!
//! Each reported access is resolved to a process name, logged locally and,
//! when a collector endpoint is configured, sent to it as one protobuf
//! message over its own TCP connection. Failures are logged and dropped;
//! the instrumented caller never sees them.

pub mod report;
pub mod utils;

pub use report::process::{PlatformLookup, ProcessNameLookup, UnsupportedLookup};
#[cfg(target_os = "linux")]
pub use report::process::ProcFsLookup;
pub use report::sink::{LogSink, WarnSink};
pub use report::{report_access, Reporter};
pub use utils::{AccessEvent, AccessLogError, AccessType, Result};
