//! Canned addresses and endpoint constructors.

use xray_daemoncfg::{DaemonEndpoints, resolve_from_string};

/// UDP side of the dual-address fixtures.
pub const UDP_ADDR: &str = "127.0.0.2:2001";

/// TCP side of the dual-address fixtures.
pub const TCP_ADDR: &str = "127.0.0.1:2000";

/// Strictly resolve `address`, panicking on bad fixtures.
pub fn resolved(address: &str) -> DaemonEndpoints {
    match resolve_from_string(address) {
        Ok(Some(endpoints)) => endpoints,
        Ok(None) => panic!("empty endpoint fixture"),
        Err(e) => panic!("bad endpoint fixture {address:?}: {e}"),
    }
}

/// Endpoints from two `host:port` literals.
pub fn endpoints(udp: &str, tcp: &str) -> DaemonEndpoints {
    resolved(&dual(udp, tcp))
}

/// Endpoints using the same address for both protocols.
pub fn shared_endpoints(addr: &str) -> DaemonEndpoints {
    resolved(addr)
}

/// `udp:<udp> tcp:<tcp>`.
pub fn dual(udp: &str, tcp: &str) -> String {
    format!("udp:{udp} tcp:{tcp}")
}

/// `tcp:<tcp> udp:<udp>`.
pub fn dual_reversed(udp: &str, tcp: &str) -> String {
    format!("tcp:{tcp} udp:{udp}")
}
