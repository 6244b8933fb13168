use crate::report::sink::WarnSink;
use crate::utils::{AccessLogError, Result};

/// Resolves a PID to a human-readable process name.
pub trait ProcessNameLookup {
    fn process_name(&self, pid: u32) -> Result<String>;
}

/// Reads `<root>/<pid>/comm` from procfs.
#[cfg(target_os = "linux")]
#[derive(Debug, Clone)]
pub struct ProcFsLookup {
    root: std::path::PathBuf,
}

#[cfg(target_os = "linux")]
impl ProcFsLookup {
    pub fn new() -> Self {
        Self::with_root("/proc")
    }

    /// Uses an alternative procfs mount, e.g. a host `/proc` bind-mounted
    /// into a container.
    pub fn with_root(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[cfg(target_os = "linux")]
impl Default for ProcFsLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_os = "linux")]
impl ProcessNameLookup for ProcFsLookup {
    fn process_name(&self, pid: u32) -> Result<String> {
        let comm_path = self.root.join(pid.to_string()).join("comm");
        let content = std::fs::read_to_string(&comm_path).map_err(|e| {
            // ENOENT: /proc/{pid} is gone, ESRCH: the process exited mid-read
            match e.kind() {
                std::io::ErrorKind::NotFound => AccessLogError::ProcessGone(pid),
                _ if e.raw_os_error() == Some(nix::errno::Errno::ESRCH as i32) => {
                    AccessLogError::ProcessGone(pid)
                }
                _ => AccessLogError::Resolve {
                    pid,
                    reason: format!("cannot read {}: {}", comm_path.display(), e),
                },
            }
        })?;

        let name = content.trim();
        if name.is_empty() {
            return Err(AccessLogError::Resolve {
                pid,
                reason: "empty process name".to_string(),
            });
        }
        Ok(name.to_string())
    }
}

/// Fallback for platforms without process introspection.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedLookup;

impl ProcessNameLookup for UnsupportedLookup {
    fn process_name(&self, _pid: u32) -> Result<String> {
        Err(AccessLogError::Unsupported)
    }
}

#[cfg(target_os = "linux")]
pub type PlatformLookup = ProcFsLookup;

#[cfg(not(target_os = "linux"))]
pub type PlatformLookup = UnsupportedLookup;

impl<T: ProcessNameLookup + ?Sized> ProcessNameLookup for &T {
    fn process_name(&self, pid: u32) -> Result<String> {
        (**self).process_name(pid)
    }
}

pub fn synthesized_label(pid: u32) -> String {
    format!("PID {}", pid)
}

/// Resolves the accessor's name, falling back to `PID <pid>`.
///
/// Never fails: a lookup error is reported to `sink` and replaced by the
/// synthesized label.
pub fn process_label<L, W>(lookup: &L, pid: u32, sink: &W) -> String
where
    L: ProcessNameLookup + ?Sized,
    W: WarnSink + ?Sized,
{
    match lookup.process_name(pid) {
        Ok(name) => name,
        Err(e) => {
            sink.warn(&format!("Error getting process name: {}", e));
            synthesized_label(pid)
        }
    }
}
