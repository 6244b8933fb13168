use crate::utils::{AccessLogError, Result};
use std::io::Write;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Opens a fresh single-use connection to the collector.
///
/// Without a timeout the OS connect timeout applies. With one, every
/// resolved address is tried in turn, each bounded by `timeout`. Name
/// resolution itself is not bounded: a slow resolver can stall the caller
/// past `timeout`, so latency-sensitive callers should pass a literal
/// socket address.
pub fn connect(endpoint: &str, timeout: Option<Duration>) -> Result<TcpStream> {
    let connect_err = |source: std::io::Error| AccessLogError::Connect {
        endpoint: endpoint.to_string(),
        source,
    };

    let timeout = match timeout {
        None => return TcpStream::connect(endpoint).map_err(connect_err),
        Some(t) => t,
    };

    let mut last_err = None;
    for addr in endpoint.to_socket_addrs().map_err(connect_err)? {
        match TcpStream::connect_timeout(&addr, timeout) {
            Ok(stream) => {
                stream.set_write_timeout(Some(timeout)).map_err(connect_err)?;
                return Ok(stream);
            }
            Err(e) => last_err = Some(e),
        }
    }

    Err(connect_err(last_err.unwrap_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "endpoint resolved to no addresses",
        )
    })))
}

/// Writes the whole payload in one operation; the stream is closed when
/// dropped by the caller.
pub fn send(stream: &mut TcpStream, payload: &[u8]) -> Result<()> {
    stream.write_all(payload).map_err(AccessLogError::Write)?;
    stream.flush().map_err(AccessLogError::Write)
}
