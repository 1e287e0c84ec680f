// SPDX-License-Identifier: Apache-2.0

use std::net::IpAddr;

use futures::stream::TryStreamExt;
use rtnetlink::packet_route::address::AddressAttribute;

use crate::{ErrorKind, WolError, WolIfaceEnumerator};

/// Enumerate interfaces by dumping `RTM_GETADDR` over netlink.
///
/// The dump runs on a private current-thread tokio runtime. When invoked
/// from within a tokio runtime, that private runtime is moved to a
/// dedicated thread.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct WolNetlinkIfaces;

impl WolIfaceEnumerator for WolNetlinkIfaces {
    fn broadcast_addrs(&self) -> Result<Vec<Option<IpAddr>>, WolError> {
        if tokio::runtime::Handle::try_current().is_err() {
            return dump_broadcast_addrs();
        }
        // Tokio refuses to block the thread driving another runtime
        match std::thread::spawn(dump_broadcast_addrs).join() {
            Ok(r) => r,
            Err(e) => Err(enumeration_error(format!(
                "Failed to invoke netlink thread: {e:?}"
            ))),
        }
    }
}

fn dump_broadcast_addrs() -> Result<Vec<Option<IpAddr>>, WolError> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_io()
        .build()
        .map_err(|e| {
            enumeration_error(format!(
                "Failed to create tokio runtime for netlink: {e}"
            ))
        })?;
    rt.block_on(get_broadcast_addrs())
}

async fn get_broadcast_addrs() -> Result<Vec<Option<IpAddr>>, WolError> {
    let (connection, handle, _) =
        rtnetlink::new_connection().map_err(|e| {
            enumeration_error(format!(
                "Failed to create netlink connection: {e}"
            ))
        })?;

    tokio::spawn(connection);

    let mut addrs = handle.address().get().execute();
    let mut ret = Vec::new();

    while let Some(nl_msg) = addrs.try_next().await.map_err(|e| {
        enumeration_error(format!("Failed to dump interface addresses: {e}"))
    })? {
        let brd = nl_msg.attributes.iter().find_map(|attr| {
            if let AddressAttribute::Broadcast(ip) = attr {
                Some(IpAddr::V4(*ip))
            } else {
                None
            }
        });
        log::debug!(
            "Interface with index {} has broadcast address {:?}",
            nl_msg.header.index,
            brd
        );
        ret.push(brd);
    }
    Ok(ret)
}

fn enumeration_error(msg: String) -> WolError {
    let e = WolError::new(ErrorKind::InterfaceEnumerationError, msg);
    log::error!("{}", e);
    e
}
