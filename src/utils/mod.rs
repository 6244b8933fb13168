pub mod error;
pub mod types;

pub use error::{AccessLogError, Result};
pub use types::{AccessEvent, AccessType};
