pub mod event;
pub mod process;
pub mod sink;
pub mod transport;

#[cfg(test)]
mod tests;

use crate::utils::{AccessType, Result};
use process::{PlatformLookup, ProcessNameLookup};
use sink::{LogSink, WarnSink};
use std::time::Duration;

/// Fire-and-forget access reporter.
///
/// Holds only immutable configuration, so one instance can be shared by
/// every instrumented thread. Each report resolves the accessor, logs
/// locally, then opens its own connection for a single write.
#[derive(Debug, Clone, Default)]
pub struct Reporter<L = PlatformLookup, W = LogSink> {
    lookup: L,
    sink: W,
    timeout: Option<Duration>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: ProcessNameLookup, W: WarnSink> Reporter<L, W> {
    pub fn with_parts(lookup: L, sink: W) -> Self {
        Self {
            lookup,
            sink,
            timeout: None,
        }
    }

    /// Bounds the connect and the write separately. A zero duration keeps
    /// the OS defaults, since sockets reject a zero timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = if timeout.is_zero() { None } else { Some(timeout) };
        self
    }

    /// Reports one access. Never fails and never panics on collector
    /// errors: every stage failure is logged to the sink and the event is
    /// dropped.
    pub fn report_access(
        &self,
        endpoint: &str,
        access_type: AccessType,
        file_path: &str,
        file_size: u64,
        process_id: u32,
    ) {
        let process_name = process::process_label(&self.lookup, process_id, &self.sink);

        self.sink.warn(&format!(
            "Access log: {} {} {} {} {}",
            endpoint, access_type, file_path, file_size, process_name
        ));

        if endpoint.is_empty() {
            return;
        }

        let event = event::create_event(access_type, file_path, file_size, process_id, process_name);
        if let Err(e) = self.deliver(endpoint, &event) {
            self.sink.warn(&e.to_string());
        }
    }

    fn deliver(&self, endpoint: &str, event: &crate::utils::AccessEvent) -> Result<()> {
        let payload = event.encode_payload()?;
        let mut stream = transport::connect(endpoint, self.timeout)?;
        transport::send(&mut stream, &payload)
    }
}

/// Reports one access with the platform lookup and the `log` facade.
pub fn report_access(
    endpoint: &str,
    access_type: AccessType,
    file_path: &str,
    file_size: u64,
    process_id: u32,
) {
    Reporter::new().report_access(endpoint, access_type, file_path, file_size, process_id)
}
