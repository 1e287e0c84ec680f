// SPDX-License-Identifier: Apache-2.0

use crate::ETH_ALEN;

const SYNC_STREAM: [u8; ETH_ALEN] = [u8::MAX; ETH_ALEN];
const MAC_REPEAT_COUNT: usize = 16;

pub const WOL_MAGIC_PACKET_LEN: usize =
    SYNC_STREAM.len() + MAC_REPEAT_COUNT * ETH_ALEN;

/// The Wake-on-LAN payload: six `0xff` followed by the target MAC address
/// repeated 16 times.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct WolMagicPacket {
    data: [u8; WOL_MAGIC_PACKET_LEN],
}

impl WolMagicPacket {
    pub fn new(mac: &[u8; ETH_ALEN]) -> Self {
        let mut data = [0u8; WOL_MAGIC_PACKET_LEN];
        data[..SYNC_STREAM.len()].copy_from_slice(&SYNC_STREAM);
        for chunk in data[SYNC_STREAM.len()..].chunks_exact_mut(ETH_ALEN) {
            chunk.copy_from_slice(mac);
        }
        Self { data }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
