//! Protocol error types.
//!
//! Malformed candidate frames are deliberately not errors: the stream
//! parser treats them as non-matches and keeps scanning. Errors here are
//! the cases a caller must act on.

use thiserror::Error;

/// Errors that can occur when working with the orb wire protocol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Unknown response code.
    #[error("unknown response code: 0x{0:02X}")]
    UnknownResponseCode(u8),

    /// Unknown async id.
    #[error("unknown async id: 0x{0:02X}")]
    UnknownAsyncId(u8),

    /// No recognizable packet anywhere in the buffer. The caller must
    /// supply more data and retry; nothing was consumed.
    #[error("no valid packet in {searched} bytes")]
    NoPacket {
        /// Number of bytes scanned without a match.
        searched: usize,
    },

    /// Two packet kinds were registered for the same marker/discriminator
    /// pair.
    #[error("duplicate packet kind for sop2 0x{sop2:02X}, discriminator 0x{discriminator:02X}")]
    DuplicateKind {
        /// Second start-of-packet byte of the colliding kinds.
        sop2: u8,
        /// Discriminator byte of the colliding kinds.
        discriminator: u8,
    },
}
