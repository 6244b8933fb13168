use serde::Serialize;

/// Kind of file access, as understood by the collector.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    prost::Enumeration,
    clap::ValueEnum,
    Serialize,
)]
#[repr(i32)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessType {
    Read = 0,
    Write = 1,
    Open = 2,
}

impl std::fmt::Display for AccessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            AccessType::Read => "READ",
            AccessType::Write => "WRITE",
            AccessType::Open => "OPEN",
        })
    }
}

/// One file access, as sent to the collector.
///
/// Built once per report and never mutated afterwards: fields are private
/// and only readable. The protobuf wire form lives in `report::event`.
///
/// ```compile_fail
/// use accesslog::{AccessEvent, AccessType};
/// let mut event = AccessEvent::new(AccessType::Open, "/etc/hosts", 1, 1, "cat");
/// event.set_access_type(AccessType::Write);
/// ```
///
/// ```compile_fail
/// use accesslog::{AccessEvent, AccessType};
/// use prost::Message;
/// let mut event = AccessEvent::new(AccessType::Open, "/etc/hosts", 1, 1, "cat");
/// event.merge(&b"\x22\x01x"[..]).unwrap();
/// ```
///
/// ```compile_fail
/// let _ = accesslog::AccessEvent::default();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessEvent {
    access_type: AccessType,
    file_path: String,
    file_size: u64,
    process_name: String,
    process_id: u32,
}

impl AccessEvent {
    pub fn new(
        access_type: AccessType,
        file_path: impl Into<String>,
        file_size: u64,
        process_id: u32,
        process_name: impl Into<String>,
    ) -> Self {
        Self {
            access_type,
            file_path: file_path.into(),
            file_size,
            process_name: process_name.into(),
            process_id,
        }
    }

    pub fn access_type(&self) -> AccessType {
        self.access_type
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    pub fn process_id(&self) -> u32 {
        self.process_id
    }

    pub fn process_name(&self) -> &str {
        &self.process_name
    }
}
