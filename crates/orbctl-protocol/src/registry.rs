//! Registry of recognizable packet kinds.
//!
//! Each kind binds a start-of-packet marker and a discriminator byte to a
//! concrete packet constructor. The registry is built once and validated:
//! two kinds claiming the same marker/discriminator pair would make
//! recognition ambiguous, so construction rejects duplicates.

use crate::constants::*;
use crate::error::ProtocolError;
use crate::frame::checksum;
use crate::packets::{AsyncKind, AsyncPacket, Packet, ResponseCode, ResponsePacket};

/// Frame layout class a kind decodes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KindClass {
    /// Synchronous response: one-byte length, carries a sequence byte.
    Response(ResponseCode),
    /// Asynchronous notification: two-byte big-endian length, no sequence.
    Async(AsyncKind),
}

/// A concrete, recognizable packet kind.
#[derive(Debug, Clone, Copy)]
pub struct PacketKind {
    sop2: u8,
    discriminator: u8,
    class: KindClass,
}

/// Bytes before the payload in every frame: SOP1, SOP2, discriminator, and
/// the length field (seq + 1-byte len for responses, 2-byte len for asyncs).
const HEADER_LEN: usize = 5;

impl PacketKind {
    /// Kind for a synchronous response carrying the given result code.
    pub fn response(code: ResponseCode) -> Self {
        PacketKind {
            sop2: SOP2_SYNC,
            discriminator: code.into(),
            class: KindClass::Response(code),
        }
    }

    /// Kind for an asynchronous notification of the given kind.
    pub fn notification(kind: AsyncKind) -> Self {
        PacketKind {
            sop2: SOP2_ASYNC,
            discriminator: kind.into(),
            class: KindClass::Async(kind),
        }
    }

    /// Second start-of-packet byte this kind matches.
    pub fn sop2(&self) -> u8 {
        self.sop2
    }

    /// Discriminator byte this kind matches (result code or async id).
    pub fn discriminator(&self) -> u8 {
        self.discriminator
    }

    /// Width in bytes of the frame's payload length field.
    pub fn length_width(&self) -> usize {
        match self.class {
            KindClass::Response(_) => 1,
            KindClass::Async(_) => 2,
        }
    }

    /// Whether frames of this kind carry a sequence byte.
    pub fn carries_sequence(&self) -> bool {
        matches!(self.class, KindClass::Response(_))
    }

    /// Try to match a frame of this kind at the start of `buf`.
    ///
    /// Returns the decoded packet and the number of bytes the frame
    /// occupies, or `None` on any fixed-byte mismatch, on a payload length
    /// exceeding the remaining buffer, or on a checksum mismatch. A `None`
    /// is an expected outcome during resynchronization, not an error.
    pub(crate) fn try_match(&self, buf: &[u8]) -> Option<(Packet, usize)> {
        if buf.len() < HEADER_LEN + 1 {
            return None;
        }
        if buf[0] != SOP1 || buf[1] != self.sop2 || buf[2] != self.discriminator {
            return None;
        }

        let len = match self.class {
            KindClass::Response(_) => buf[4] as usize,
            KindClass::Async(_) => u16::from_be_bytes([buf[3], buf[4]]) as usize,
        };

        let total = HEADER_LEN + len + 1;
        if buf.len() < total {
            return None;
        }
        if checksum(&buf[2..HEADER_LEN + len]) != buf[HEADER_LEN + len] {
            return None;
        }

        let payload = buf[HEADER_LEN..HEADER_LEN + len].to_vec();
        let packet = match self.class {
            KindClass::Response(code) => Packet::Response(ResponsePacket {
                code,
                sequence: buf[3],
                payload,
            }),
            KindClass::Async(kind) => Packet::Async(AsyncPacket { kind, payload }),
        };

        Some((packet, total))
    }
}

/// The set of packet kinds recognized by the stream parser.
#[derive(Debug, Clone)]
pub struct PacketRegistry {
    kinds: Vec<PacketKind>,
}

impl PacketRegistry {
    /// Build the registry covering every response code and async id.
    pub fn new() -> Result<Self, ProtocolError> {
        let mut kinds =
            Vec::with_capacity(ResponseCode::ALL.len() + AsyncKind::ALL.len());
        kinds.extend(ResponseCode::ALL.map(PacketKind::response));
        kinds.extend(AsyncKind::ALL.map(PacketKind::notification));
        Self::from_kinds(kinds)
    }

    /// Build a registry from an explicit kind list, rejecting any two kinds
    /// that claim the same marker/discriminator pair.
    pub fn from_kinds(kinds: Vec<PacketKind>) -> Result<Self, ProtocolError> {
        for (i, kind) in kinds.iter().enumerate() {
            for other in &kinds[i + 1..] {
                if kind.sop2 == other.sop2 && kind.discriminator == other.discriminator {
                    return Err(ProtocolError::DuplicateKind {
                        sop2: kind.sop2,
                        discriminator: kind.discriminator,
                    });
                }
            }
        }
        Ok(PacketRegistry { kinds })
    }

    /// The registered kinds.
    pub fn kinds(&self) -> &[PacketKind] {
        &self.kinds
    }
}
