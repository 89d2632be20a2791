//! Orb Session Layer
//!
//! This crate drives an orb robot over a blocking byte transport. It owns
//! the sequence counter, correlates acknowledgements to the commands that
//! produced them, queues async notifications, and transparently reconnects
//! when the transport reports the connection lost.
//!
//! The wire format itself lives in [`orbctl_protocol`]; this crate adds the
//! [`Transport`]/[`Connector`] boundary and the [`Session`] state machine on
//! top of it.
//!
//! # Example
//!
//! ```rust,ignore
//! use orbctl_client::{Session, TcpConnector};
//! use orbctl_protocol::Command;
//!
//! let mut session = Session::open(TcpConnector, "127.0.0.1:9000")?;
//! let outcome = session.send(&Command::SetRgb {
//!     red: 255,
//!     green: 64,
//!     blue: 0,
//!     persist: false,
//! })?;
//! ```

mod error;
mod session;
mod transport;

pub use error::*;
pub use session::*;
pub use transport::*;

pub use orbctl_protocol::{
    AsyncKind, AsyncPacket, Command, Packet, PacketRegistry, ResponseCode, ResponsePacket,
};
