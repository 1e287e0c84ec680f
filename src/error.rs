// SPDX-License-Identifier: Apache-2.0

use std::net::IpAddr;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum ErrorKind {
    /// MAC address is not six colon-separated hex bytes.
    InvalidMacAddress,
    /// Broadcast address in text form could not be resolved.
    UnresolvableAddress,
    InterfaceEnumerationError,
    /// Socket setup or datagram hand-over to the kernel failed.
    SendFailure,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct WolError {
    kind: ErrorKind,
    msg: String,
    failed_addrs: Vec<IpAddr>,
}

impl WolError {
    pub fn new(kind: ErrorKind, msg: String) -> Self {
        Self {
            kind,
            msg,
            failed_addrs: Vec::new(),
        }
    }

    pub(crate) fn with_failed_addrs(mut self, addrs: Vec<IpAddr>) -> Self {
        self.failed_addrs = addrs;
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        self.msg.as_str()
    }

    /// Broadcast addresses a [ErrorKind::SendFailure] was raised for when
    /// sending to all local broadcast addresses. Empty for other errors.
    pub fn failed_addrs(&self) -> &[IpAddr] {
        self.failed_addrs.as_slice()
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::fmt::Display for WolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)
    }
}

impl std::error::Error for WolError {}
