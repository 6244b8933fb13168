use crate::utils::{AccessEvent, AccessLogError, AccessType, Result};
use prost::Message;

/// Wire form of an access event (`AccessInfo`, tags 1 to 5).
#[derive(Clone, PartialEq, prost::Message)]
struct AccessInfo {
    #[prost(enumeration = "AccessType", tag = "1")]
    access_type: i32,
    #[prost(string, tag = "2")]
    file_path: String,
    #[prost(uint64, tag = "3")]
    file_size: u64,
    #[prost(string, tag = "4")]
    process_name: String,
    #[prost(uint32, tag = "5")]
    process_id: u32,
}

impl From<&AccessEvent> for AccessInfo {
    fn from(event: &AccessEvent) -> Self {
        Self {
            access_type: event.access_type() as i32,
            file_path: event.file_path().to_string(),
            file_size: event.file_size(),
            process_name: event.process_name().to_string(),
            process_id: event.process_id(),
        }
    }
}

impl TryFrom<AccessInfo> for AccessEvent {
    type Error = AccessLogError;

    fn try_from(info: AccessInfo) -> Result<Self> {
        let access_type = AccessType::try_from(info.access_type)
            .map_err(|e| AccessLogError::UnknownAccessType(e.0))?;
        Ok(AccessEvent::new(
            access_type,
            info.file_path,
            info.file_size,
            info.process_id,
            info.process_name,
        ))
    }
}

impl AccessEvent {
    /// Serializes the event into a single protobuf payload, no length prefix.
    pub fn encode_payload(&self) -> Result<Vec<u8>> {
        let info = AccessInfo::from(self);
        let mut buf = Vec::with_capacity(info.encoded_len());
        info.encode(&mut buf)?;
        Ok(buf)
    }

    /// Decodes a payload into a new event. The decoded record is a fresh
    /// value; nothing is merged into an existing event.
    pub fn decode_payload(payload: &[u8]) -> Result<AccessEvent> {
        AccessEvent::try_from(AccessInfo::decode(payload)?)
    }
}

pub fn create_event(
    access_type: AccessType,
    file_path: &str,
    file_size: u64,
    process_id: u32,
    process_name: String,
) -> AccessEvent {
    AccessEvent::new(access_type, file_path, file_size, process_id, process_name)
}
