//! Commands that can be sent to the orb.

use crate::constants::*;
use crate::frame::encode_command_frame;

/// Commands that can be sent to the orb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// No-op liveness probe.
    Ping,

    /// Set the RGB LED color.
    SetRgb {
        /// Red intensity.
        red: u8,
        /// Green intensity.
        green: u8,
        /// Blue intensity.
        blue: u8,
        /// Persist the color as the new default (survives power cycle).
        persist: bool,
    },

    /// Start or stop rolling.
    Roll {
        /// Speed, 0 = stop.
        speed: u8,
        /// Heading in degrees, 0..359.
        heading: u16,
        /// Motion state: 1 = roll, 0 = coast to a stop.
        state: u8,
    },

    /// Enter deep sleep.
    Sleep {
        /// Seconds until automatic wakeup, 0 = sleep indefinitely.
        wakeup: u16,
        /// Macro id to run on wakeup, 0 = none.
        macro_id: u8,
        /// orbBasic line number to run on wakeup, 0 = none.
        orb_basic: u16,
    },

    /// Set the inactivity timeout before the orb sleeps on its own.
    SetInactivityTimeout {
        /// Timeout in seconds.
        timeout: u16,
    },
}

impl Command {
    /// Get the device id this command is routed to.
    pub fn device_id(&self) -> u8 {
        match self {
            Command::Ping => DID_CORE,
            Command::SetRgb { .. } => DID_ORB,
            Command::Roll { .. } => DID_ORB,
            Command::Sleep { .. } => DID_CORE,
            Command::SetInactivityTimeout { .. } => DID_CORE,
        }
    }

    /// Get the command id for this command.
    pub fn command_id(&self) -> u8 {
        match self {
            Command::Ping => CID_PING,
            Command::SetRgb { .. } => CID_SET_RGB,
            Command::Roll { .. } => CID_ROLL,
            Command::Sleep { .. } => CID_SLEEP,
            Command::SetInactivityTimeout { .. } => CID_SET_INACTIVITY_TIMEOUT,
        }
    }

    /// Encode the command payload (data bytes between the length field and
    /// the checksum).
    pub fn payload(&self) -> Vec<u8> {
        match self {
            Command::Ping => Vec::new(),

            Command::SetRgb {
                red,
                green,
                blue,
                persist,
            } => vec![*red, *green, *blue, u8::from(*persist)],

            Command::Roll {
                speed,
                heading,
                state,
            } => {
                let [heading_msb, heading_lsb] = heading.to_be_bytes();
                vec![*speed, heading_msb, heading_lsb, *state]
            }

            Command::Sleep {
                wakeup,
                macro_id,
                orb_basic,
            } => {
                let mut buf = Vec::with_capacity(5);
                buf.extend_from_slice(&wakeup.to_be_bytes());
                buf.push(*macro_id);
                buf.extend_from_slice(&orb_basic.to_be_bytes());
                buf
            }

            Command::SetInactivityTimeout { timeout } => timeout.to_be_bytes().to_vec(),
        }
    }

    /// Encode the full command frame with the given sequence number.
    pub fn encode(&self, sequence: u8) -> Vec<u8> {
        encode_command_frame(self.device_id(), self.command_id(), sequence, &self.payload())
    }
}
