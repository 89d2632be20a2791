//! Client error types.

use thiserror::Error;

use crate::transport::TransportError;
use orbctl_protocol::ProtocolError;

/// Errors surfaced by the session layer.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The wire protocol layer rejected data or configuration.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The transport failed in a way the session does not recover from.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}
