// SPDX-License-Identifier: Apache-2.0

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};
use std::time::Duration;

use crate::{ErrorKind, WolError};

/// Hands one datagram to the network stack.
pub trait WolTransport: Send + Sync {
    fn send_to(&self, packet: &[u8], dst: SocketAddr) -> Result<(), WolError>;
}

/// Send each datagram through a fresh UDP socket which is closed once the
/// datagram is handed over.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct WolUdpTransport {
    /// Write timeout in seconds, 0 means blocking without timeout.
    socket_timeout_sec: u32,
}

impl WolUdpTransport {
    pub fn new(socket_timeout_sec: u32) -> Self {
        Self { socket_timeout_sec }
    }
}

impl WolTransport for WolUdpTransport {
    fn send_to(&self, packet: &[u8], dst: SocketAddr) -> Result<(), WolError> {
        let src: SocketAddr = match dst {
            SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
            SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
        };
        let socket = UdpSocket::bind(src).map_err(|e| {
            send_failure(format!("Failed to bind UDP socket for {dst}: {e}"))
        })?;
        log::debug!("UDP socket bind to {:?}", socket);

        if dst.is_ipv4() {
            socket.set_broadcast(true).map_err(|e| {
                send_failure(format!(
                    "Failed to enable SO_BROADCAST for {dst}: {e}"
                ))
            })?;
        }
        if self.socket_timeout_sec > 0 {
            socket
                .set_write_timeout(Some(Duration::from_secs(
                    self.socket_timeout_sec.into(),
                )))
                .map_err(|e| {
                    send_failure(format!(
                        "Failed to set write timeout for {dst}: {e}"
                    ))
                })?;
        }

        log::debug!("Sending magic packet to {dst}: {packet:?}");
        let sent = socket.send_to(packet, dst).map_err(|e| {
            send_failure(format!("Failed to send magic packet to {dst}: {e}"))
        })?;
        if sent != packet.len() {
            return Err(send_failure(format!(
                "Only sent {sent} of {} bytes to {dst}",
                packet.len()
            )));
        }
        log::debug!("UDP socket sent {sent} bytes to {dst}");
        Ok(())
    }
}

fn send_failure(msg: String) -> WolError {
    let e = WolError::new(ErrorKind::SendFailure, msg);
    log::error!("{}", e);
    e
}
