// SPDX-License-Identifier: Apache-2.0

/// Port used by the classic magic packet senders. Many tools use 9
/// instead, see [WolConfig::set_port()].
pub const WOL_DEFAULT_PORT: u16 = 7;

const DEFAULT_SOCKET_TIMEOUT: u32 = 5;

#[derive(Debug, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub struct WolConfig {
    /// UDP destination port of magic packets.
    pub port: u16,
    /// Write timeout in seconds for each socket. 0 means no timeout.
    pub socket_timeout_sec: u32,
    /// Use netlink instead of `getifaddrs(3)` to find broadcast addresses.
    #[cfg(feature = "netlink")]
    pub use_netlink: bool,
}

impl Default for WolConfig {
    fn default() -> Self {
        Self {
            port: WOL_DEFAULT_PORT,
            socket_timeout_sec: DEFAULT_SOCKET_TIMEOUT,
            #[cfg(feature = "netlink")]
            use_netlink: true,
        }
    }
}

impl WolConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_port(&mut self, port: u16) -> &mut Self {
        self.port = port;
        self
    }

    // Set timeout in seconds
    pub fn set_socket_timeout_sec(&mut self, timeout: u32) -> &mut Self {
        self.socket_timeout_sec = timeout;
        self
    }

    #[cfg(feature = "netlink")]
    pub fn set_use_netlink(&mut self, use_netlink: bool) -> &mut Self {
        self.use_netlink = use_netlink;
        self
    }
}
