// SPDX-License-Identifier: Apache-2.0

mod broadcast;
mod config;
mod error;
mod iface;
mod mac;
#[cfg(feature = "netlink")]
mod netlink;
mod packet;
mod sender;
mod socket;


pub use crate::broadcast::WolBroadcastAddrs;
pub use crate::config::{WolConfig, WOL_DEFAULT_PORT};
pub use crate::error::{ErrorKind, WolError};
pub use crate::iface::{WolIfaceEnumerator, WolSystemIfaces};
pub use crate::mac::{parse_mac, ETH_ALEN};
#[cfg(feature = "netlink")]
pub use crate::netlink::WolNetlinkIfaces;
pub use crate::packet::{WolMagicPacket, WOL_MAGIC_PACKET_LEN};
pub use crate::sender::{
    send_magic_packet, send_magic_packet_to, send_magic_packet_to_addr,
    WolSender,
};
pub use crate::socket::{WolTransport, WolUdpTransport};
