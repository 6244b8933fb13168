use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccessLogError {
    #[error("Process {0} no longer exists")]
    ProcessGone(u32),

    #[error("Cannot resolve process {pid}: {reason}")]
    Resolve { pid: u32, reason: String },

    #[error("Process name lookup is not supported on this platform")]
    Unsupported,

    #[error("Encode error: {0}")]
    Encode(#[from] prost::EncodeError),

    #[error("Decode error: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("Unknown access type {0}")]
    UnknownAccessType(i32),

    #[error("Cannot connect to {endpoint}: {source}")]
    Connect {
        endpoint: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot send access info: {0}")]
    Write(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AccessLogError>;
