// SPDX-License-Identifier: Apache-2.0

use std::net::{IpAddr, SocketAddr, ToSocketAddrs};

use crate::{
    parse_mac, ErrorKind, WolBroadcastAddrs, WolConfig, WolError,
    WolIfaceEnumerator, WolMagicPacket, WolSystemIfaces, WolTransport,
    WolUdpTransport,
};

/// Send magic packet for `mac` to every broadcast address found on local
/// interfaces, using [WolConfig::default()].
pub fn send_magic_packet(mac: &str) -> Result<(), WolError> {
    WolSender::new(WolConfig::default()).send(mac)
}

/// Resolve `broadcast` (IP address or host name) and send one magic packet
/// for `mac` to it, using [WolConfig::default()].
pub fn send_magic_packet_to(
    broadcast: &str,
    mac: &str,
) -> Result<(), WolError> {
    WolSender::new(WolConfig::default()).send_to(broadcast, mac)
}

/// Send one magic packet for `mac` to `broadcast`, using
/// [WolConfig::default()].
pub fn send_magic_packet_to_addr(
    broadcast: IpAddr,
    mac: &str,
) -> Result<(), WolError> {
    WolSender::new(WolConfig::default()).send_to_addr(broadcast, mac)
}

pub struct WolSender {
    config: WolConfig,
    ifaces: Box<dyn WolIfaceEnumerator>,
    transport: Box<dyn WolTransport>,
}

impl std::fmt::Debug for WolSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WolSender")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl WolSender {
    pub fn new(config: WolConfig) -> Self {
        let ifaces = default_ifaces(&config);
        let transport =
            Box::new(WolUdpTransport::new(config.socket_timeout_sec));
        Self::new_with(config, ifaces, transport)
    }

    /// Use custom interface enumerator and transport.
    pub fn new_with(
        config: WolConfig,
        ifaces: Box<dyn WolIfaceEnumerator>,
        transport: Box<dyn WolTransport>,
    ) -> Self {
        Self {
            config,
            ifaces,
            transport,
        }
    }

    pub fn config(&self) -> &WolConfig {
        &self.config
    }

    /// Send to every unique broadcast address of local interfaces.
    ///
    /// All addresses are tried even if some of them fail. The returned
    /// [ErrorKind::SendFailure] lists every failed address.
    /// Finding no broadcast address at all is not an error.
    pub fn send(&self, mac: &str) -> Result<(), WolError> {
        let pkt = WolMagicPacket::new(&parse_mac(mac)?);

        let brds: WolBroadcastAddrs =
            self.ifaces.broadcast_addrs()?.into_iter().collect();
        if brds.is_empty() {
            log::warn!(
                "No broadcast address found on local interfaces, magic \
                 packet for {mac} not sent"
            );
            return Ok(());
        }
        log::debug!(
            "Sending magic packet for {mac} to {} addresses",
            brds.len()
        );

        let mut failed_addrs = Vec::new();
        let mut failures = Vec::new();
        for brd in brds.iter() {
            if let Err(e) = self.send_packet(&pkt, *brd) {
                failed_addrs.push(*brd);
                failures.push(format!("{brd}: {}", e.msg()));
            }
        }
        if failures.is_empty() {
            Ok(())
        } else {
            let e = WolError::new(
                ErrorKind::SendFailure,
                format!(
                    "Failed to send magic packet for {mac} to {} of {} \
                     broadcast addresses: {}",
                    failures.len(),
                    brds.len(),
                    failures.join("; ")
                ),
            )
            .with_failed_addrs(failed_addrs);
            log::error!("{}", e);
            Err(e)
        }
    }

    /// Resolve `broadcast` then send exactly one magic packet to it.
    pub fn send_to(&self, broadcast: &str, mac: &str) -> Result<(), WolError> {
        let addr = resolve_addr(broadcast, self.config.port)?;
        self.send_to_addr(addr, mac)
    }

    pub fn send_to_addr(
        &self,
        broadcast: IpAddr,
        mac: &str,
    ) -> Result<(), WolError> {
        let pkt = WolMagicPacket::new(&parse_mac(mac)?);
        self.send_packet(&pkt, broadcast)
    }

    fn send_packet(
        &self,
        pkt: &WolMagicPacket,
        addr: IpAddr,
    ) -> Result<(), WolError> {
        self.transport
            .send_to(pkt.as_bytes(), SocketAddr::new(addr, self.config.port))
    }
}

#[cfg(feature = "netlink")]
fn default_ifaces(config: &WolConfig) -> Box<dyn WolIfaceEnumerator> {
    if config.use_netlink {
        Box::new(crate::WolNetlinkIfaces)
    } else {
        Box::new(WolSystemIfaces)
    }
}

#[cfg(not(feature = "netlink"))]
fn default_ifaces(_config: &WolConfig) -> Box<dyn WolIfaceEnumerator> {
    Box::new(WolSystemIfaces)
}

// Prefer IPv4 when host name resolves to multiple addresses.
fn resolve_addr(host: &str, port: u16) -> Result<IpAddr, WolError> {
    let addrs: Vec<SocketAddr> = match (host, port).to_socket_addrs() {
        Ok(a) => a.collect(),
        Err(e) => {
            let e = WolError::new(
                ErrorKind::UnresolvableAddress,
                format!("Failed to resolve broadcast address {host:?}: {e}"),
            );
            log::error!("{}", e);
            return Err(e);
        }
    };
    if let Some(addr) = addrs
        .iter()
        .find(|a| a.is_ipv4())
        .or_else(|| addrs.first())
    {
        log::debug!("Resolved broadcast address {host:?} to {}", addr.ip());
        Ok(addr.ip())
    } else {
        let e = WolError::new(
            ErrorKind::UnresolvableAddress,
            format!("Broadcast address {host:?} resolved to no address"),
        );
        log::error!("{}", e);
        Err(e)
    }
}
