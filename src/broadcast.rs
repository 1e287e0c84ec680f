// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;
use std::net::IpAddr;

/// Unique broadcast addresses gathered from local interfaces.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct WolBroadcastAddrs {
    addrs: HashSet<IpAddr>,
}

impl WolBroadcastAddrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return true if `addr` was stored. `None` and addresses already in
    /// the set are ignored.
    pub fn insert(&mut self, addr: Option<IpAddr>) -> bool {
        match addr {
            Some(addr) => self.addrs.insert(addr),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }

    pub fn contains(&self, addr: &IpAddr) -> bool {
        self.addrs.contains(addr)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IpAddr> {
        self.addrs.iter()
    }
}

impl FromIterator<Option<IpAddr>> for WolBroadcastAddrs {
    fn from_iter<I: IntoIterator<Item = Option<IpAddr>>>(iter: I) -> Self {
        let mut ret = Self::new();
        for addr in iter {
            ret.insert(addr);
        }
        ret
    }
}
