// SPDX-License-Identifier: Apache-2.0

use crate::{ErrorKind, WolError};

pub const ETH_ALEN: usize = 6;

/// Parse MAC address in `01:02:2a:2c:f7:04` format.
///
/// Each group may hold one or two hexadecimal digits, case-insensitive.
/// Anything else, including a group count other than [ETH_ALEN], is
/// [ErrorKind::InvalidMacAddress].
pub fn parse_mac(mac: &str) -> Result<[u8; ETH_ALEN], WolError> {
    let items: Vec<&str> = mac.split(':').collect();
    if items.len() != ETH_ALEN {
        let e = invalid_mac(
            mac,
            format!("got {} groups, expecting {ETH_ALEN}", items.len()),
        );
        log::error!("{}", e);
        return Err(e);
    }

    let mut mac_bytes = [0u8; ETH_ALEN];
    for (i, item) in items.iter().enumerate() {
        // `u8::from_str_radix()` accepts leading `+`, hence the explicit
        // digit check.
        if item.is_empty()
            || item.len() > 2
            || !item.chars().all(|c| c.is_ascii_hexdigit())
        {
            let e = invalid_mac(
                mac,
                format!("group {item:?} is not a hex byte"),
            );
            log::error!("{}", e);
            return Err(e);
        }
        mac_bytes[i] = u8::from_str_radix(item, 16).map_err(|e| {
            invalid_mac(mac, format!("group {item:?} is not a hex byte: {e}"))
        })?;
    }
    Ok(mac_bytes)
}

fn invalid_mac(mac: &str, reason: String) -> WolError {
    WolError::new(
        ErrorKind::InvalidMacAddress,
        format!(
            "Invalid MAC address {mac:?}, {reason}, expecting format \
             01:02:2a:2c:f7:04"
        ),
    )
}
