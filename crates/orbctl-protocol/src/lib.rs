//! Orb Bluetooth Wire Protocol
//!
//! This crate provides types and utilities for the binary, checksum-framed
//! protocol spoken by the orb robot. Every frame opens with the 0xFF
//! start-of-packet byte; the second byte distinguishes the frame class:
//!
//! - **Commands** (host → orb): `FF FF did cid seq len payload chk`
//! - **Responses** (orb → host): `FF FF mrsp seq len payload chk`
//! - **Async notifications** (orb → host): `FF FE id len_msb len_lsb payload chk`
//!
//! The trailing checksum is the inverted byte sum of everything between the
//! start-of-packet bytes and the checksum itself. Inbound bytes are scanned
//! by a resynchronizing parser that skips corrupt or extraneous data one
//! byte at a time until a valid frame is found.
//!
//! # Example
//!
//! ```rust
//! use orbctl_protocol::{Command, Packet, PacketRegistry};
//!
//! // Build a command frame
//! let cmd = Command::SetRgb { red: 255, green: 0, blue: 64, persist: false };
//! let frame = cmd.encode(1);
//!
//! // Parse a received buffer
//! let registry = PacketRegistry::new().expect("registry is statically valid");
//! let parsed = registry.parse(&[0xFF, 0xFF, 0x00, 0x01, 0x00, 0xFE]).unwrap();
//! assert!(matches!(parsed.packet, Packet::Response(_)));
//! ```

mod commands;
mod constants;
mod error;
mod frame;
mod packets;
mod parser;
mod registry;

pub use commands::*;
pub use constants::*;
pub use error::*;
pub use frame::*;
pub use packets::*;
pub use parser::*;
pub use registry::*;
