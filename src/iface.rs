// SPDX-License-Identifier: Apache-2.0

use std::net::{IpAddr, Ipv4Addr};

use nix::sys::socket::SockaddrStorage;

use crate::{ErrorKind, WolError};

/// Source of the broadcast addresses configured on local interfaces.
pub trait WolIfaceEnumerator: Send + Sync {
    /// One entry per interface address. Entries without broadcast address
    /// (loopback, point-to-point, IPv6) are `None`.
    fn broadcast_addrs(&self) -> Result<Vec<Option<IpAddr>>, WolError>;
}

/// Enumerate interfaces via `getifaddrs(3)`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct WolSystemIfaces;

impl WolIfaceEnumerator for WolSystemIfaces {
    fn broadcast_addrs(&self) -> Result<Vec<Option<IpAddr>>, WolError> {
        let ifaddrs = nix::ifaddrs::getifaddrs().map_err(|e| {
            let e = WolError::new(
                ErrorKind::InterfaceEnumerationError,
                format!("Failed to retrieve interface addresses: {e}"),
            );
            log::error!("{}", e);
            e
        })?;

        let mut ret = Vec::new();
        for ifaddr in ifaddrs {
            let brd = ifaddr.broadcast.as_ref().and_then(sockaddr_to_ip);
            log::debug!(
                "Interface {} has broadcast address {:?}",
                ifaddr.interface_name,
                brd
            );
            ret.push(brd);
        }
        Ok(ret)
    }
}

fn sockaddr_to_ip(addr: &SockaddrStorage) -> Option<IpAddr> {
    if let Some(sin) = addr.as_sockaddr_in() {
        Some(IpAddr::V4(Ipv4Addr::from(sin.ip())))
    } else {
        addr.as_sockaddr_in6().map(|sin6| IpAddr::V6(sin6.ip()))
    }
}
