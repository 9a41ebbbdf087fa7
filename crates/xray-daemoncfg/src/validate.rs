//! Validation of a single `host:port` fragment into a socket address.

use std::net::{IpAddr, Ipv4Addr, SocketAddr, ToSocketAddrs};

use tracing::debug;

use crate::endpoints::Protocol;
use crate::error::{AddressErrorKind, ResolveError};

const MAX_HOSTNAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Validate `raw` as the `host:port` address of the daemon's `protocol` side.
///
/// The host must be a dotted-quad IPv4 literal or a well-formed hostname that
/// the local resolver has an IPv4 answer for. IPv6 answers are ignored. The port
/// must be a decimal number in `1..=65535`.
///
/// Each call is independent: nothing is cached and nothing is retried.
pub fn validate_address(raw: &str, protocol: Protocol) -> Result<SocketAddr, ResolveError> {
    let fail = |kind| ResolveError::address(protocol, raw, kind);

    if raw.is_empty() {
        return Err(fail(AddressErrorKind::Empty));
    }
    let (host, port) = raw
        .rsplit_once(':')
        .ok_or_else(|| fail(AddressErrorKind::MissingPort))?;
    let port = parse_port(port).map_err(fail)?;
    let ip = resolve_host(host).map_err(fail)?;

    Ok(SocketAddr::new(ip, port))
}

fn parse_port(port: &str) -> Result<u16, AddressErrorKind> {
    if port.is_empty() {
        return Err(AddressErrorKind::MissingPort);
    }
    let invalid = || AddressErrorKind::InvalidPort(port.to_string());
    if !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match port.parse::<u16>() {
        Ok(0) | Err(_) => Err(invalid()),
        Ok(n) => Ok(n),
    }
}

fn resolve_host(host: &str) -> Result<IpAddr, AddressErrorKind> {
    let invalid = || AddressErrorKind::InvalidHost(host.to_string());

    // Anything made only of digits and dots is meant as an IPv4 literal and
    // must never reach the resolver, which would accept forms like 127.1.
    if host.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return host
            .parse::<Ipv4Addr>()
            .map(IpAddr::V4)
            .map_err(|_| invalid());
    }
    if !is_valid_hostname(host) {
        return Err(invalid());
    }
    lookup_host(host)
}

/// Hostname syntax per RFC 1123, with an all-numeric final label rejected so
/// that malformed IPv4 literals such as `127.0.a.1` are not treated as names.
pub(crate) fn is_valid_hostname(host: &str) -> bool {
    let host = host.strip_suffix('.').unwrap_or(host);
    if host.is_empty() || host.len() > MAX_HOSTNAME_LEN {
        return false;
    }

    let labels_ok = host.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
    });
    let last_label_numeric = host
        .rsplit('.')
        .next()
        .is_some_and(|label| label.bytes().all(|b| b.is_ascii_digit()));

    labels_ok && !last_label_numeric
}

fn lookup_host(host: &str) -> Result<IpAddr, AddressErrorKind> {
    let addrs: Vec<SocketAddr> = (host, 0)
        .to_socket_addrs()
        .map_err(|e| AddressErrorKind::Unresolvable(e.to_string()))?
        .collect();

    // Dual-address strings cannot carry IPv6 literals, so an IPv6-only answer
    // would produce endpoints that do not print back into a parseable form.
    let ip = addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .map(SocketAddr::ip)
        .ok_or_else(|| AddressErrorKind::Unresolvable("no IPv4 address found".to_string()))?;

    debug!(host, %ip, "resolved daemon host");
    Ok(ip)
}
