//! Errors produced while resolving daemon addresses.

use crate::endpoints::Protocol;

/// Errors that can occur while parsing or validating a daemon address.
///
/// All variants are deterministic functions of the input string; retrying
/// with the same input yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The dual-address string itself is malformed.
    #[error("invalid daemon address {input:?}: {kind}")]
    Format { input: String, kind: FormatErrorKind },

    /// A single `host:port` fragment failed validation.
    #[error("invalid {protocol} address {raw:?}: {kind}")]
    AddressFormat {
        protocol: Protocol,
        raw: String,
        kind: AddressErrorKind,
    },

    /// Parsing succeeded but one of the two protocols was not given.
    #[error("incomplete daemon address {input:?}: missing {missing} address")]
    IncompleteAddress { input: String, missing: Protocol },
}

/// Why a dual-address string could not be split into per-protocol parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatErrorKind {
    #[error("unknown protocol tag {0:?} (expected \"udp\" or \"tcp\")")]
    UnknownProtocol(String),

    #[error("duplicate protocol {0}")]
    DuplicateProtocol(Protocol),

    #[error("malformed token {0:?} (expected <udp|tcp>:<host>:<port>)")]
    MalformedToken(String),
}

/// Why a `host:port` fragment was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressErrorKind {
    #[error("address is empty")]
    Empty,

    #[error("missing port")]
    MissingPort,

    #[error("invalid port {0:?}")]
    InvalidPort(String),

    #[error("invalid host {0:?}")]
    InvalidHost(String),

    #[error("host could not be resolved: {0}")]
    Unresolvable(String),
}

impl ResolveError {
    pub(crate) fn format(input: &str, kind: FormatErrorKind) -> Self {
        Self::Format {
            input: input.to_string(),
            kind,
        }
    }

    pub(crate) fn address(protocol: Protocol, raw: &str, kind: AddressErrorKind) -> Self {
        Self::AddressFormat {
            protocol,
            raw: raw.to_string(),
            kind,
        }
    }

    /// The protocol the error relates to, if it is specific to one.
    pub fn protocol(&self) -> Option<Protocol> {
        match self {
            Self::Format {
                kind: FormatErrorKind::DuplicateProtocol(p),
                ..
            } => Some(*p),
            Self::Format { .. } => None,
            Self::AddressFormat { protocol, .. } => Some(*protocol),
            Self::IncompleteAddress { missing, .. } => Some(*missing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_error_display() {
        let err = ResolveError::format(
            "udp:a:1 udp:b:2",
            FormatErrorKind::DuplicateProtocol(Protocol::Udp),
        );
        assert_eq!(
            err.to_string(),
            "invalid daemon address \"udp:a:1 udp:b:2\": duplicate protocol udp"
        );
    }

    #[test]
    fn test_address_error_display() {
        let err = ResolveError::address(
            Protocol::Tcp,
            "127.0.a.1:2000",
            AddressErrorKind::InvalidHost("127.0.a.1".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "invalid tcp address \"127.0.a.1:2000\": invalid host \"127.0.a.1\""
        );
    }

    #[test]
    fn test_incomplete_error_display() {
        let err = ResolveError::IncompleteAddress {
            input: "udp:127.0.0.2:2001".to_string(),
            missing: Protocol::Tcp,
        };
        assert_eq!(
            err.to_string(),
            "incomplete daemon address \"udp:127.0.0.2:2001\": missing tcp address"
        );
    }

    #[test]
    fn test_error_protocol() {
        let err = ResolveError::format("x", FormatErrorKind::MalformedToken("x".to_string()));
        assert_eq!(err.protocol(), None);
        let err = ResolveError::address(Protocol::Udp, ":1", AddressErrorKind::Empty);
        assert_eq!(err.protocol(), Some(Protocol::Udp));
    }
}
