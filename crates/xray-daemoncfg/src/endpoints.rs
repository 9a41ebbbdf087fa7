//! Resolved daemon endpoints and the protocol tags that select them.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use crate::error::{FormatErrorKind, ResolveError};

/// Port the daemon listens on when nothing else is configured.
pub const DEFAULT_DAEMON_PORT: u16 = 2000;

/// Host the daemon is assumed to run on when nothing else is configured.
pub const DEFAULT_DAEMON_HOST: Ipv4Addr = Ipv4Addr::LOCALHOST;

/// Transport protocol of a daemon endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// Segment documents are emitted over UDP.
    Udp,
    /// Sampling rules and targets are fetched over TCP.
    Tcp,
}

impl Protocol {
    /// The tag used for this protocol in a dual-address string.
    pub const fn tag(self) -> &'static str {
        match self {
            Protocol::Udp => "udp",
            Protocol::Tcp => "tcp",
        }
    }

    /// Look up a protocol by its exact tag. Tags are case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "udp" => Some(Protocol::Udp),
            "tcp" => Some(Protocol::Tcp),
            _ => None,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The UDP and TCP addresses of the daemon.
///
/// Both addresses are always present: a value only exists once resolution
/// has succeeded for both protocols, or as the fixed [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DaemonEndpoints {
    udp: SocketAddr,
    tcp: SocketAddr,
}

impl DaemonEndpoints {
    /// Pair two already-validated IPv4 addresses.
    pub(crate) const fn new(udp: SocketAddr, tcp: SocketAddr) -> Self {
        Self { udp, tcp }
    }

    /// Address segments are sent to.
    pub const fn udp_addr(&self) -> SocketAddr {
        self.udp
    }

    /// Address the sampling API is reached on.
    pub const fn tcp_addr(&self) -> SocketAddr {
        self.tcp
    }

    /// Address for the given protocol.
    pub const fn addr(&self, protocol: Protocol) -> SocketAddr {
        match protocol {
            Protocol::Udp => self.udp,
            Protocol::Tcp => self.tcp,
        }
    }
}

impl Default for DaemonEndpoints {
    /// `127.0.0.1:2000` for both protocols.
    fn default() -> Self {
        let addr = SocketAddr::new(IpAddr::V4(DEFAULT_DAEMON_HOST), DEFAULT_DAEMON_PORT);
        Self::new(addr, addr)
    }
}

impl fmt::Display for DaemonEndpoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "udp:{} tcp:{}", self.udp, self.tcp)
    }
}

impl FromStr for DaemonEndpoints {
    type Err = ResolveError;

    /// Strictly resolve `s`. Unlike [`crate::resolve_from_string`], an empty
    /// string is an error here since a value must be produced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::resolve_from_string(s)?.ok_or_else(|| {
            ResolveError::format(s, FormatErrorKind::MalformedToken(s.to_string()))
        })
    }
}
