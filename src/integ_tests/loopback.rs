// SPDX-License-Identifier: Apache-2.0

use std::net::{IpAddr, Ipv4Addr, UdpSocket};
use std::time::Duration;

use super::env::{enable_log, StubIfaces, TEST_MAC, TEST_MAC_BYTES};
use crate::{
    WolConfig, WolMagicPacket, WolSender, WolTransport, WolUdpTransport,
};

fn bind_receiver() -> UdpSocket {
    let receiver = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
    receiver
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    receiver
}

#[test]
fn test_udp_transport_delivers_payload() {
    enable_log();
    let receiver = bind_receiver();
    let dst = receiver.local_addr().unwrap();
    let pkt = WolMagicPacket::new(&TEST_MAC_BYTES);

    WolUdpTransport::new(1).send_to(pkt.as_bytes(), dst).unwrap();

    let mut buffer = [0u8; 1500];
    let received = receiver.recv(&mut buffer).unwrap();
    assert_eq!(&buffer[..received], pkt.as_bytes());
}

#[test]
fn test_sender_over_loopback() {
    enable_log();
    let receiver = bind_receiver();
    let port = receiver.local_addr().unwrap().port();
    let mut config = WolConfig::new();
    config.set_port(port);
    let sender = WolSender::new_with(
        config.clone(),
        Box::new(StubIfaces::new(vec![
            Some(IpAddr::V4(Ipv4Addr::LOCALHOST)),
            None,
            Some(IpAddr::V4(Ipv4Addr::LOCALHOST)),
        ])),
        Box::new(WolUdpTransport::new(config.socket_timeout_sec)),
    );

    sender.send(TEST_MAC).unwrap();

    let mut buffer = [0u8; 1500];
    let received = receiver.recv(&mut buffer).unwrap();
    assert_eq!(
        &buffer[..received],
        WolMagicPacket::new(&TEST_MAC_BYTES).as_bytes()
    );
    // Duplicated address must not produce second datagram.
    receiver
        .set_read_timeout(Some(Duration::from_millis(200)))
        .unwrap();
    assert!(receiver.recv(&mut buffer).is_err());
}
