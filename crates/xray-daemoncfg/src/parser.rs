//! Splitting a dual-address string into per-protocol raw addresses.
//!
//! Accepted forms:
//! - `udp:<host>:<port> tcp:<host>:<port>` (either order, whitespace separated)
//! - a single bare `<host>:<port>`, meant for both protocols
//!
//! Nothing here validates hosts or ports; see [`crate::validate`].

use crate::endpoints::Protocol;
use crate::error::{FormatErrorKind, ResolveError};

/// What the input said about one protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RawAddress<'a> {
    /// The tag did not appear.
    #[default]
    Absent,
    /// The tag appeared with nothing after it (`udp:`).
    Empty,
    /// The raw `host:port` text following the tag.
    Given(&'a str),
}

impl RawAddress<'_> {
    pub fn is_absent(&self) -> bool {
        matches!(self, RawAddress::Absent)
    }
}

/// Result of parsing a non-empty address string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedAddress<'a> {
    /// One untagged `host:port`, shared by UDP and TCP.
    Bare(&'a str),
    /// Tagged tokens, at most one per protocol.
    Tagged {
        udp: RawAddress<'a>,
        tcp: RawAddress<'a>,
    },
}

impl<'a> ParsedAddress<'a> {
    /// The raw address for `protocol`.
    pub fn raw(&self, protocol: Protocol) -> RawAddress<'a> {
        match *self {
            ParsedAddress::Bare(addr) => RawAddress::Given(addr),
            ParsedAddress::Tagged { udp, tcp } => match protocol {
                Protocol::Udp => udp,
                Protocol::Tcp => tcp,
            },
        }
    }
}

/// Parse `input` into per-protocol raw addresses.
///
/// Returns `Ok(None)` only for the empty string, meaning no address was
/// supplied at all. Input made of whitespace alone is a malformed token.
pub fn parse_address(input: &str) -> Result<Option<ParsedAddress<'_>>, ResolveError> {
    if input.is_empty() {
        return Ok(None);
    }
    let tokens: Vec<&str> = input.split_whitespace().collect();
    match *tokens.as_slice() {
        [] => Err(ResolveError::format(
            input,
            FormatErrorKind::MalformedToken(input.to_string()),
        )),
        [single] if is_bare(single) && !has_tag(single) => {
            Ok(Some(ParsedAddress::Bare(single)))
        }
        _ => parse_tagged(input, &tokens).map(Some),
    }
}

/// A bare address has exactly one colon: `host:port`.
fn is_bare(token: &str) -> bool {
    token.matches(':').count() == 1
}

fn has_tag(token: &str) -> bool {
    token
        .split_once(':')
        .is_some_and(|(tag, _)| Protocol::from_tag(tag).is_some())
}

fn parse_tagged<'a>(input: &str, tokens: &[&'a str]) -> Result<ParsedAddress<'a>, ResolveError> {
    let mut udp = RawAddress::Absent;
    let mut tcp = RawAddress::Absent;

    for &token in tokens {
        let (protocol, raw) = parse_token(input, token)?;
        let slot = match protocol {
            Protocol::Udp => &mut udp,
            Protocol::Tcp => &mut tcp,
        };
        if !slot.is_absent() {
            return Err(ResolveError::format(
                input,
                FormatErrorKind::DuplicateProtocol(protocol),
            ));
        }
        *slot = raw;
    }

    Ok(ParsedAddress::Tagged { udp, tcp })
}

/// Split one `<tag>:<host>:<port>` token.
fn parse_token<'a>(
    input: &str,
    token: &'a str,
) -> Result<(Protocol, RawAddress<'a>), ResolveError> {
    let malformed =
        || ResolveError::format(input, FormatErrorKind::MalformedToken(token.to_string()));

    let (tag, rest) = token.split_once(':').ok_or_else(malformed)?;
    let protocol = Protocol::from_tag(tag).ok_or_else(|| {
        if is_bare(token) {
            // A bare host:port alongside other tokens.
            malformed()
        } else {
            ResolveError::format(input, FormatErrorKind::UnknownProtocol(tag.to_string()))
        }
    })?;

    if rest.is_empty() {
        return Ok((protocol, RawAddress::Empty));
    }
    if rest.matches(':').count() != 1 {
        return Err(malformed());
    }
    Ok((protocol, RawAddress::Given(rest)))
}
