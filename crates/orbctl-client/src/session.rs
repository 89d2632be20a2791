//! Command session against a single orb.
//!
//! One session owns one transport handle, the wrapping sequence counter,
//! and a buffer of bytes received but not yet parsed. Sends are blocking
//! round trips: assign a sequence number, encode, write, read a bounded
//! amount of response data, then sort every parsed packet into an
//! acknowledgement (sequence match), a queued async notification, or a
//! dropped stale response.
//!
//! A lost connection is handled by closing the stale transport and opening
//! a fresh one to the same address. The in-flight command is not resent;
//! [`SendOutcome::ConnectionReset`] tells the caller the command may never
//! have reached the device.

use std::collections::VecDeque;

use bytes::{Buf, BytesMut};
use log::{debug, warn};

use crate::error::ClientError;
use crate::transport::{Connector, Transport, TransportError};
use orbctl_protocol::{AsyncPacket, Command, Packet, PacketRegistry, ResponsePacket};

/// Upper bound on bytes read back per command round trip.
pub const RECV_LIMIT: usize = 1024;

/// What a send round trip produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The orb acknowledged the command: a response packet arrived echoing
    /// the command's sequence number.
    Acknowledged(ResponsePacket),

    /// The command was written but no matching acknowledgement was parsed
    /// out of the response data.
    NoResponse,

    /// The connection died during the round trip. The session reconnected,
    /// but the command was not resent and may never have been delivered.
    ConnectionReset,
}

/// A command session bound to one device address.
pub struct Session<C: Connector> {
    connector: C,
    address: String,
    transport: C::Transport,
    sequence: u8,
    registry: PacketRegistry,
    buffer: BytesMut,
    notifications: VecDeque<AsyncPacket>,
}

impl<C: Connector> Session<C> {
    /// Connect to the orb at `address` and start a session.
    pub fn open(mut connector: C, address: impl Into<String>) -> Result<Self, ClientError> {
        let address = address.into();
        let transport = connector.connect(&address)?;
        let registry = PacketRegistry::new()?;
        Ok(Session {
            connector,
            address,
            transport,
            sequence: 0,
            registry,
            buffer: BytesMut::with_capacity(RECV_LIMIT),
            notifications: VecDeque::new(),
        })
    }

    /// Address this session reconnects to.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Advance and return the sequence counter. The first assigned value is
    /// 1; the counter wraps 255 → 0.
    pub fn next_sequence(&mut self) -> u8 {
        self.sequence = self.sequence.wrapping_add(1);
        self.sequence
    }

    /// Send a command and collect its acknowledgement.
    ///
    /// Async notifications parsed out of the response data are queued for
    /// [`Session::take_notifications`]. On connection loss the session
    /// reconnects and reports [`SendOutcome::ConnectionReset`] instead of
    /// retrying the command.
    pub fn send(&mut self, command: &Command) -> Result<SendOutcome, ClientError> {
        let sequence = self.next_sequence();
        let frame = command.encode(sequence);
        debug!(
            "sending did 0x{:02X} cid 0x{:02X} seq {}",
            command.device_id(),
            command.command_id(),
            sequence
        );

        if let Err(err) = self.transport.send(&frame) {
            return self.recover(err);
        }

        match self.transport.receive(RECV_LIMIT) {
            Ok(bytes) => {
                self.buffer.extend_from_slice(&bytes);
                Ok(self.drain_received(sequence))
            }
            Err(err) => self.recover(err),
        }
    }

    /// Async notifications observed so far, oldest first.
    pub fn take_notifications(&mut self) -> Vec<AsyncPacket> {
        self.notifications.drain(..).collect()
    }

    /// Close the session's transport.
    pub fn close(mut self) {
        self.transport.close();
    }

    /// Parse everything currently buffered, keeping any trailing partial
    /// frame for the next round trip.
    fn drain_received(&mut self, sequence: u8) -> SendOutcome {
        let mut acknowledgement = None;

        loop {
            let parsed = match self.registry.parse(&self.buffer) {
                Ok(parsed) => parsed,
                Err(_) => break,
            };
            self.buffer.advance(parsed.skipped + parsed.consumed);

            match parsed.packet {
                Packet::Async(packet) => self.notifications.push_back(packet),
                Packet::Response(packet) => {
                    if packet.sequence == sequence && acknowledgement.is_none() {
                        acknowledgement = Some(packet);
                    } else {
                        warn!(
                            "dropping unmatched response: {} seq {} (expected seq {})",
                            packet.code, packet.sequence, sequence
                        );
                    }
                }
            }
        }

        match acknowledgement {
            Some(packet) => SendOutcome::Acknowledged(packet),
            None => SendOutcome::NoResponse,
        }
    }

    /// Reconnect after a lost connection; any other transport error is
    /// surfaced unchanged.
    fn recover(&mut self, err: TransportError) -> Result<SendOutcome, ClientError> {
        match err {
            TransportError::ConnectionLost => {
                warn!("connection to {} lost, reconnecting", self.address);
                self.transport.close();
                self.transport = self.connector.connect(&self.address)?;
                self.buffer.clear();
                Ok(SendOutcome::ConnectionReset)
            }
            other => Err(other.into()),
        }
    }
}
