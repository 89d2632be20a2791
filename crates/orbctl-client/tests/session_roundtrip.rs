//! Integration tests for the session layer over a real TCP loopback.
//!
//! A scripted device thread stands in for the bridge daemon: it reads
//! command frames, validates their checksums, and replies with response and
//! async frames, including noise and a mid-session disconnect.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

use orbctl_client::{
    AsyncKind, Command, ResponseCode, SendOutcome, Session, TcpConnector,
};
use orbctl_protocol::{checksum, COMMAND_OVERHEAD, DID_CORE, SOP1, SOP2_SYNC};

/// Read one Ping command frame and return its sequence number, checking the
/// frame layout on the way.
fn read_ping(peer: &mut TcpStream) -> u8 {
    let mut frame = [0u8; COMMAND_OVERHEAD];
    peer.read_exact(&mut frame).unwrap();
    assert_eq!(frame[0], SOP1);
    assert_eq!(frame[1], SOP2_SYNC);
    assert_eq!(frame[2], DID_CORE);
    assert_eq!(frame[5], 0, "ping carries no payload");
    assert_eq!(frame[6], checksum(&frame[2..6]), "command checksum");
    frame[4]
}

fn ack_frame(seq: u8, payload: &[u8]) -> Vec<u8> {
    let mut frame = vec![0xFF, 0xFF, 0x00, seq, payload.len() as u8];
    frame.extend_from_slice(payload);
    frame.push(checksum(&frame[2..]));
    frame
}

fn collision_frame(payload: &[u8]) -> Vec<u8> {
    let len = payload.len() as u16;
    let mut frame = vec![0xFF, 0xFE, 0x07];
    frame.extend_from_slice(&len.to_be_bytes());
    frame.extend_from_slice(payload);
    frame.push(checksum(&frame[2..]));
    frame
}

#[test]
fn session_round_trip_with_noise_and_notifications() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    let device = thread::spawn(move || {
        let (mut peer, _) = listener.accept().unwrap();
        let seq = read_ping(&mut peer);

        // Line noise, an unsolicited collision report, then the ack.
        let mut reply = vec![0x00, 0xFF, 0x42];
        reply.extend_from_slice(&collision_frame(&[0x11, 0x22]));
        reply.extend_from_slice(&ack_frame(seq, &[0x01]));
        peer.write_all(&reply).unwrap();
    });

    let mut session = Session::open(TcpConnector, &addr).unwrap();
    let outcome = session.send(&Command::Ping).unwrap();

    match outcome {
        SendOutcome::Acknowledged(packet) => {
            assert_eq!(packet.code, ResponseCode::Ok);
            assert_eq!(packet.sequence, 1);
            assert_eq!(packet.payload, vec![0x01]);
        }
        other => panic!("expected acknowledgement, got {other:?}"),
    }

    let notifications = session.take_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, AsyncKind::Collision);
    assert_eq!(notifications[0].payload, vec![0x11, 0x22]);

    session.close();
    device.join().unwrap();
}

#[test]
fn session_reconnects_after_device_drop() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    let device = thread::spawn(move || {
        // First connection: ack the first command, then drop the socket.
        {
            let (mut peer, _) = listener.accept().unwrap();
            let seq = read_ping(&mut peer);
            peer.write_all(&ack_frame(seq, &[])).unwrap();
        }

        // The session reconnects; serve the next command normally.
        let (mut peer, _) = listener.accept().unwrap();
        let seq = read_ping(&mut peer);
        assert_eq!(seq, 3, "sequence keeps counting across reconnects");
        peer.write_all(&ack_frame(seq, &[])).unwrap();
    });

    let mut session = Session::open(TcpConnector, &addr).unwrap();

    assert!(matches!(
        session.send(&Command::Ping).unwrap(),
        SendOutcome::Acknowledged(_)
    ));

    // The device hung up: this round trip loses its command but the session
    // comes back connected.
    assert_eq!(
        session.send(&Command::Ping).unwrap(),
        SendOutcome::ConnectionReset
    );

    match session.send(&Command::Ping).unwrap() {
        SendOutcome::Acknowledged(packet) => assert_eq!(packet.sequence, 3),
        other => panic!("expected acknowledgement, got {other:?}"),
    }

    session.close();
    device.join().unwrap();
}
