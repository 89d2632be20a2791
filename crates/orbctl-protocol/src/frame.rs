//! Frame checksum and command frame assembly.
//!
//! Every frame opens with two start-of-packet bytes and closes with a
//! one-byte checksum computed over everything in between:
//!
//! ```text
//! +------+------+----------------------------+-----+
//! | SOP1 | SOP2 | body (ids, seq, len, data) | chk |
//! +------+------+----------------------------+-----+
//! ```
//!
//! The checksum is the byte sum of the body, masked to 8 bits and
//! bitwise-inverted. The same function validates inbound frames and seals
//! outbound ones.

use crate::constants::*;

/// Compute the frame checksum over the body bytes (everything after the two
/// start-of-packet bytes, excluding the checksum byte itself).
pub fn checksum(body: &[u8]) -> u8 {
    body.iter().fold(0u8, |sum, &b| sum.wrapping_add(b)) ^ 0xFF
}

/// Assemble a command frame from its routing ids, sequence number, and
/// payload.
///
/// Layout: `SOP1 SOP2 did cid seq len payload[..len] chk`.
pub fn encode_command_frame(did: u8, cid: u8, sequence: u8, payload: &[u8]) -> Vec<u8> {
    debug_assert!(payload.len() <= MAX_SYNC_PAYLOAD);

    let mut buf = Vec::with_capacity(COMMAND_OVERHEAD + payload.len());
    buf.push(SOP1);
    buf.push(SOP2_SYNC);
    buf.push(did);
    buf.push(cid);
    buf.push(sequence);
    buf.push(payload.len() as u8);
    buf.extend_from_slice(payload);
    let chk = checksum(&buf[2..]);
    buf.push(chk);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum() {
        // 0 + 5 + 2 + 1 + 2 = 10, inverted = 0xF5
        assert_eq!(checksum(&[0x00, 0x05, 0x02, 0x01, 0x02]), 0xF5);
        assert_eq!(checksum(&[]), 0xFF);
    }

    #[test]
    fn test_checksum_wraps() {
        // Sum overflows u8; only the low byte matters.
        assert_eq!(checksum(&[0xFF, 0xFF, 0x02]), 0x00 ^ 0xFF);
    }

    #[test]
    fn test_checksum_inversion_round_trip() {
        let body = [0x02, 0x20, 0x07, 0x04, 0xAA, 0xBB, 0xCC, 0x00];
        let sum = body.iter().fold(0u8, |s, &b| s.wrapping_add(b));
        assert_eq!(checksum(&body) ^ 0xFF, sum);
    }

    #[test]
    fn test_encode_command_frame() {
        let frame = encode_command_frame(0x02, 0x20, 0x01, &[0xFF, 0x00, 0x00, 0x00]);
        assert_eq!(frame[0], SOP1);
        assert_eq!(frame[1], SOP2_SYNC);
        assert_eq!(frame[2], 0x02);
        assert_eq!(frame[3], 0x20);
        assert_eq!(frame[4], 0x01);
        assert_eq!(frame[5], 4);
        assert_eq!(&frame[6..10], &[0xFF, 0x00, 0x00, 0x00]);
        assert_eq!(frame[10], checksum(&frame[2..10]));
        assert_eq!(frame.len(), COMMAND_OVERHEAD + 4);
    }
}
