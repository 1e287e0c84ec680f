// SPDX-License-Identifier: Apache-2.0

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use super::env::{
    enable_log, RecordingTransport, StubIfaces, TEST_MAC, TEST_MAC_BYTES,
};
use crate::{
    ErrorKind, WolConfig, WolMagicPacket, WolSender, WOL_MAGIC_PACKET_LEN,
};

const BRD1: IpAddr = IpAddr::V4(Ipv4Addr::new(192, 0, 2, 255));
const BRD2: IpAddr = IpAddr::V4(Ipv4Addr::new(198, 51, 100, 255));

#[test]
fn test_send_to_unique_broadcasts() {
    enable_log();
    let transport = RecordingTransport::new();
    let sent = transport.sent.clone();
    let sender = WolSender::new_with(
        WolConfig::default(),
        Box::new(StubIfaces::new(vec![
            Some(BRD1),
            None,
            Some(BRD1),
            Some(BRD2),
        ])),
        Box::new(transport),
    );

    sender.send(TEST_MAC).unwrap();

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 2);
    let expected = WolMagicPacket::new(&TEST_MAC_BYTES);
    for (dst, data) in sent.iter() {
        assert_eq!(dst.port(), 7);
        assert_eq!(data.len(), WOL_MAGIC_PACKET_LEN);
        assert_eq!(data.as_slice(), expected.as_bytes());
    }
    let mut dsts: Vec<IpAddr> = sent.iter().map(|(d, _)| d.ip()).collect();
    dsts.sort();
    assert_eq!(dsts, vec![BRD1, BRD2]);
}

#[test]
fn test_invalid_mac_before_enumeration() {
    let ifaces = StubIfaces::new(vec![Some(BRD1)]);
    let called = ifaces.called.clone();
    let transport = RecordingTransport::new();
    let sent = transport.sent.clone();
    let sender = WolSender::new_with(
        WolConfig::default(),
        Box::new(ifaces),
        Box::new(transport),
    );

    let e = sender.send("00:1A:2B").unwrap_err();

    assert_eq!(e.kind(), ErrorKind::InvalidMacAddress);
    assert!(!*called.lock().unwrap());
    assert!(sent.lock().unwrap().is_empty());
}

#[test]
fn test_enumeration_failure_sends_nothing() {
    let transport = RecordingTransport::new();
    let sent = transport.sent.clone();
    let sender = WolSender::new_with(
        WolConfig::default(),
        Box::new(StubIfaces::broken()),
        Box::new(transport),
    );

    let e = sender.send(TEST_MAC).unwrap_err();

    assert_eq!(e.kind(), ErrorKind::InterfaceEnumerationError);
    assert!(sent.lock().unwrap().is_empty());
}

#[test]
fn test_failed_address_does_not_block_others() {
    enable_log();
    let transport = RecordingTransport::new().fail_on(BRD1);
    let sent = transport.sent.clone();
    let sender = WolSender::new_with(
        WolConfig::default(),
        Box::new(StubIfaces::new(vec![Some(BRD1), Some(BRD2)])),
        Box::new(transport),
    );

    let e = sender.send(TEST_MAC).unwrap_err();

    assert_eq!(e.kind(), ErrorKind::SendFailure);
    assert!(e.msg().contains("192.0.2.255"), "{}", e.msg());
    assert!(!e.msg().contains("198.51.100.255"), "{}", e.msg());
    assert_eq!(e.failed_addrs(), &[BRD1]);
    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, SocketAddr::new(BRD2, 7));
}

#[test]
fn test_no_broadcast_address() {
    let transport = RecordingTransport::new();
    let sent = transport.sent.clone();
    let sender = WolSender::new_with(
        WolConfig::default(),
        Box::new(StubIfaces::new(vec![None, None])),
        Box::new(transport),
    );

    sender.send(TEST_MAC).unwrap();

    assert!(sent.lock().unwrap().is_empty());
}

#[test]
fn test_send_to_addr_with_custom_port() {
    let transport = RecordingTransport::new();
    let sent = transport.sent.clone();
    let mut config = WolConfig::new();
    config.set_port(9);
    let sender = WolSender::new_with(
        config,
        Box::new(StubIfaces::broken()),
        Box::new(transport),
    );

    sender.send_to_addr(BRD2, TEST_MAC).unwrap();

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, SocketAddr::new(BRD2, 9));
    assert_eq!(
        sent[0].1.as_slice(),
        WolMagicPacket::new(&TEST_MAC_BYTES).as_bytes()
    );
}

#[test]
fn test_send_to_text_address() {
    let transport = RecordingTransport::new();
    let sent = transport.sent.clone();
    let sender = WolSender::new_with(
        WolConfig::default(),
        Box::new(StubIfaces::broken()),
        Box::new(transport),
    );

    sender.send_to("192.0.2.255", TEST_MAC).unwrap();

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, SocketAddr::new(BRD1, 7));
}

#[test]
fn test_unresolvable_address_sends_nothing() {
    let transport = RecordingTransport::new();
    let sent = transport.sent.clone();
    let sender = WolSender::new_with(
        WolConfig::default(),
        Box::new(StubIfaces::broken()),
        Box::new(transport),
    );

    let e = sender
        .send_to("bad host name.invalid", TEST_MAC)
        .unwrap_err();

    assert_eq!(e.kind(), ErrorKind::UnresolvableAddress);
    assert!(sent.lock().unwrap().is_empty());
}
