//! Byte transport abstraction.
//!
//! The session layer is written against a minimal blocking transport: send
//! bytes, receive up to a bound, close. A lost connection is a distinct
//! failure mode because the session recovers from it by reconnecting; every
//! other I/O failure is passed through.
//!
//! The concrete implementation here speaks TCP, which is how serial and BLE
//! bridge daemons expose the orb on the local machine. Native Bluetooth
//! pairing and discovery are out of scope.

use std::io::{ErrorKind, Read, Write};
use std::net::{Shutdown, TcpStream};

use thiserror::Error;

/// Errors reported by a transport.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The connection to the device is gone. The session reconnects on this.
    #[error("connection lost")]
    ConnectionLost,

    /// Any other I/O failure.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A blocking byte pipe to the orb.
pub trait Transport {
    /// Write the full byte slice to the device.
    fn send(&mut self, bytes: &[u8]) -> Result<(), TransportError>;

    /// Read up to `max_len` bytes from the device.
    fn receive(&mut self, max_len: usize) -> Result<Vec<u8>, TransportError>;

    /// Shut the connection down. Best effort; errors are ignored.
    fn close(&mut self);
}

/// Opens transports to a device address. The session keeps its connector so
/// it can re-establish the transport after a connection loss.
pub trait Connector {
    /// Transport type this connector produces.
    type Transport: Transport;

    /// Open a fresh transport to `address`.
    fn connect(&mut self, address: &str) -> Result<Self::Transport, TransportError>;
}

/// Map the I/O errors that mean "the peer is gone" to [`TransportError::ConnectionLost`].
fn classify(err: std::io::Error) -> TransportError {
    match err.kind() {
        ErrorKind::BrokenPipe
        | ErrorKind::ConnectionReset
        | ErrorKind::ConnectionAborted
        | ErrorKind::UnexpectedEof => TransportError::ConnectionLost,
        _ => TransportError::Io(err),
    }
}

/// TCP transport to a bridge daemon.
#[derive(Debug)]
pub struct TcpTransport {
    stream: TcpStream,
}

impl Transport for TcpTransport {
    fn send(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        self.stream.write_all(bytes).map_err(classify)
    }

    fn receive(&mut self, max_len: usize) -> Result<Vec<u8>, TransportError> {
        let mut buf = vec![0u8; max_len];
        let n = self.stream.read(&mut buf).map_err(classify)?;
        if n == 0 {
            // Orderly shutdown by the peer reads as zero bytes.
            return Err(TransportError::ConnectionLost);
        }
        buf.truncate(n);
        Ok(buf)
    }

    fn close(&mut self) {
        let _ = self.stream.shutdown(Shutdown::Both);
    }
}

/// Connector producing [`TcpTransport`]s.
#[derive(Debug, Default)]
pub struct TcpConnector;

impl Connector for TcpConnector {
    type Transport = TcpTransport;

    fn connect(&mut self, address: &str) -> Result<Self::Transport, TransportError> {
        let stream = TcpStream::connect(address)?;
        stream.set_nodelay(true)?;
        Ok(TcpTransport { stream })
    }
}
