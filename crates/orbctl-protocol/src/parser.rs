//! Resynchronizing stream parser.
//!
//! Bytes arriving from the orb are not frame-aligned: line noise, partial
//! reads, and stale data can all precede a valid frame. The parser scans the
//! buffer one offset at a time, trying every registered kind at each
//! position, and reports how many bytes it had to skip before finding a
//! frame. The single-byte advance matters: a spurious 0xFF inside garbage
//! may sit one position before the true frame start, so skipping a whole
//! failed candidate would lose real frames.

use log::debug;

use crate::error::ProtocolError;
use crate::packets::Packet;
use crate::registry::PacketRegistry;

/// A packet recognized in a byte buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    /// The decoded packet.
    pub packet: Packet,
    /// Bytes the frame occupied (header + payload + checksum).
    pub consumed: usize,
    /// Bytes skipped before the frame started.
    pub skipped: usize,
}

impl PacketRegistry {
    /// Scan `buf` for the first recognizable packet.
    ///
    /// Recognition is attempted at offset 0 and, on failure, at each
    /// subsequent offset. Returns the decoded packet together with the byte
    /// counts, or [`ProtocolError::NoPacket`] if the buffer holds no valid
    /// frame at any offset. Truncated candidates are non-matches, never
    /// errors.
    pub fn parse(&self, buf: &[u8]) -> Result<Parsed, ProtocolError> {
        for skipped in 0..buf.len() {
            for kind in self.kinds() {
                if let Some((packet, consumed)) = kind.try_match(&buf[skipped..]) {
                    if skipped > 0 {
                        debug!("skipped {skipped} bytes before frame");
                    }
                    return Ok(Parsed {
                        packet,
                        consumed,
                        skipped,
                    });
                }
            }
        }

        Err(ProtocolError::NoPacket {
            searched: buf.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::checksum;
    use crate::packets::{AsyncKind, ResponseCode};

    fn registry() -> PacketRegistry {
        PacketRegistry::new().unwrap()
    }

    fn response_frame(mrsp: u8, seq: u8, payload: &[u8]) -> Vec<u8> {
        let mut frame = vec![0xFF, 0xFF, mrsp, seq, payload.len() as u8];
        frame.extend_from_slice(payload);
        frame.push(checksum(&frame[2..]));
        frame
    }

    fn async_frame(id: u8, payload: &[u8]) -> Vec<u8> {
        let len = payload.len() as u16;
        let mut frame = vec![0xFF, 0xFE, id];
        frame.extend_from_slice(&len.to_be_bytes());
        frame.extend_from_slice(payload);
        frame.push(checksum(&frame[2..]));
        frame
    }

    #[test]
    fn test_golden_response_frame() {
        // 0 + 5 + 2 + 1 + 2 = 10, inverted = 0xF5
        let golden = [0xFF, 0xFF, 0x00, 0x05, 0x02, 0x01, 0x02, 0xF5];
        assert_eq!(response_frame(0x00, 5, &[0x01, 0x02]), golden);

        let parsed = registry().parse(&golden).unwrap();
        assert_eq!(parsed.consumed, 8);
        assert_eq!(parsed.skipped, 0);
        match parsed.packet {
            Packet::Response(resp) => {
                assert_eq!(resp.code, ResponseCode::Ok);
                assert_eq!(resp.sequence, 5);
                assert_eq!(resp.payload, vec![0x01, 0x02]);
            }
            other => panic!("expected response packet, got {other:?}"),
        }
    }

    #[test]
    fn test_async_frame_wide_length() {
        let payload: Vec<u8> = (0..300u16).map(|i| i as u8).collect();
        let frame = async_frame(0x07, &payload);
        // Length field is two bytes big-endian: 300 = 0x012C.
        assert_eq!(frame[3], 0x01);
        assert_eq!(frame[4], 0x2C);

        let parsed = registry().parse(&frame).unwrap();
        assert_eq!(parsed.consumed, frame.len());
        assert_eq!(parsed.skipped, 0);
        match parsed.packet {
            Packet::Async(pkt) => {
                assert_eq!(pkt.kind, AsyncKind::Collision);
                assert_eq!(pkt.payload, payload);
            }
            other => panic!("expected async packet, got {other:?}"),
        }
    }

    #[test]
    fn test_truncated_prefixes_never_parse() {
        let frame = response_frame(0x00, 5, &[0x01, 0x02]);
        for len in 0..frame.len() {
            let result = registry().parse(&frame[..len]);
            assert_eq!(
                result,
                Err(ProtocolError::NoPacket { searched: len }),
                "prefix of {len} bytes"
            );
        }
    }

    #[test]
    fn test_junk_prefix_is_skipped_and_counted() {
        let junk = [0x12, 0x34, 0xFF, 0x00, 0x56];
        let frame = response_frame(0x01, 9, &[0xAB]);
        let mut buf = junk.to_vec();
        buf.extend_from_slice(&frame);

        let clean = registry().parse(&frame).unwrap();
        let noisy = registry().parse(&buf).unwrap();
        assert_eq!(noisy.packet, clean.packet);
        assert_eq!(noisy.skipped, junk.len());
        assert_eq!(noisy.consumed, frame.len());
    }

    #[test]
    fn test_double_sop_garbage_does_not_halt_scan() {
        // FF FF followed by bytes that fail every matcher; the real frame
        // starts further in.
        let mut buf = vec![0xFF, 0xFF, 0x77, 0x77, 0x77];
        let frame = response_frame(0x00, 1, &[]);
        buf.extend_from_slice(&frame);

        let parsed = registry().parse(&buf).unwrap();
        assert_eq!(parsed.skipped, 5);
        match parsed.packet {
            Packet::Response(resp) => assert_eq!(resp.sequence, 1),
            other => panic!("expected response packet, got {other:?}"),
        }
    }

    #[test]
    fn test_spurious_sop_one_before_real_frame() {
        // A lone 0xFF immediately before the frame: the frame's own SOP
        // bytes make the garbage look like FF FF FF, and only a single-byte
        // advance finds the true start.
        let frame = response_frame(0x00, 3, &[0x44]);
        let mut buf = vec![0xFF];
        buf.extend_from_slice(&frame);

        let parsed = registry().parse(&buf).unwrap();
        assert_eq!(parsed.skipped, 1);
        assert_eq!(parsed.consumed, frame.len());
    }

    #[test]
    fn test_corrupt_checksum_then_valid_frame() {
        let mut corrupt = response_frame(0x00, 7, &[0x01]);
        let last = corrupt.len() - 1;
        corrupt[last] ^= 0xFF;
        let frame = response_frame(0x00, 8, &[0x02]);
        let mut buf = corrupt.clone();
        buf.extend_from_slice(&frame);

        let parsed = registry().parse(&buf).unwrap();
        assert_eq!(parsed.skipped, corrupt.len());
        match parsed.packet {
            Packet::Response(resp) => {
                assert_eq!(resp.sequence, 8);
                assert_eq!(resp.payload, vec![0x02]);
            }
            other => panic!("expected response packet, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_discriminator_is_garbage() {
        // 0x20 is neither a response code nor an async id.
        let frame = response_frame(0x20, 1, &[]);
        assert_eq!(
            registry().parse(&frame),
            Err(ProtocolError::NoPacket {
                searched: frame.len()
            })
        );
    }

    #[test]
    fn test_empty_buffer() {
        assert_eq!(
            registry().parse(&[]),
            Err(ProtocolError::NoPacket { searched: 0 })
        );
    }

    #[test]
    fn test_declared_length_past_buffer_end() {
        // Valid header claiming 200 payload bytes that never arrive.
        let buf = [0xFF, 0xFF, 0x00, 0x01, 0xC8, 0x01, 0x02];
        assert_eq!(
            registry().parse(&buf),
            Err(ProtocolError::NoPacket {
                searched: buf.len()
            })
        );
    }

    #[test]
    fn test_back_to_back_frames_parse_first() {
        let first = response_frame(0x00, 1, &[0x0A]);
        let second = response_frame(0x00, 2, &[0x0B]);
        let mut buf = first.clone();
        buf.extend_from_slice(&second);

        let parsed = registry().parse(&buf).unwrap();
        assert_eq!(parsed.skipped, 0);
        assert_eq!(parsed.consumed, first.len());
        match parsed.packet {
            Packet::Response(resp) => assert_eq!(resp.sequence, 1),
            other => panic!("expected response packet, got {other:?}"),
        }

        // The remainder picks up the second frame cleanly.
        let rest = registry().parse(&buf[parsed.consumed..]).unwrap();
        match rest.packet {
            Packet::Response(resp) => assert_eq!(resp.sequence, 2),
            other => panic!("expected response packet, got {other:?}"),
        }
    }

    #[test]
    fn test_error_code_frames_parse() {
        for code in ResponseCode::ALL {
            let frame = response_frame(code.into(), 42, &[0xEE]);
            let parsed = registry().parse(&frame).unwrap();
            match parsed.packet {
                Packet::Response(resp) => assert_eq!(resp.code, code),
                other => panic!("expected response packet, got {other:?}"),
            }
        }
    }
}
