//! Precedence between the environment override and a caller-supplied address.
//!
//! Two families of entry points exist:
//! - **strict** ([`resolve_from_string`], [`DaemonResolver::resolve_from_env`],
//!   [`DaemonResolver::resolve_with_override`]) return every error and never a
//!   partial result;
//! - **lenient** ([`DaemonResolver::resolve_or_default`]) never fails and falls
//!   back to [`DaemonEndpoints::default`] on any error. It is meant for
//!   process startup.

use std::borrow::Cow;
use std::net::SocketAddr;

use tracing::{debug, info, warn};

use crate::endpoints::{DaemonEndpoints, Protocol};
use crate::env::{DAEMON_ADDRESS_ENV_VAR, EnvSource, ProcessEnv};
use crate::error::{AddressErrorKind, ResolveError};
use crate::parser::{RawAddress, parse_address};
use crate::validate::validate_address;

/// Strictly resolve `address` without consulting the environment.
///
/// - empty input yields `Ok(None)`: there is nothing to resolve;
/// - a bare `host:port` is used for both UDP and TCP;
/// - a tagged string must name both `udp` and `tcp`.
///
/// # Examples
///
/// ```
/// use xray_daemoncfg::resolve_from_string;
///
/// let endpoints = resolve_from_string("tcp:127.0.0.1:2000 udp:127.0.0.2:2001")
///     .unwrap()
///     .unwrap();
/// assert_eq!(endpoints.udp_addr().to_string(), "127.0.0.2:2001");
/// assert_eq!(endpoints.tcp_addr().to_string(), "127.0.0.1:2000");
///
/// assert!(resolve_from_string("udp:127.0.0.2:2001").is_err());
/// assert_eq!(resolve_from_string("").unwrap(), None);
/// ```
pub fn resolve_from_string(address: &str) -> Result<Option<DaemonEndpoints>, ResolveError> {
    let Some(parsed) = parse_address(address)? else {
        debug!("empty daemon address, nothing to resolve");
        return Ok(None);
    };

    // Both protocols must be named before either address is validated.
    let udp = require(address, parsed.raw(Protocol::Udp), Protocol::Udp)?;
    let tcp = require(address, parsed.raw(Protocol::Tcp), Protocol::Tcp)?;

    let endpoints = DaemonEndpoints::new(
        validate_given(udp, Protocol::Udp)?,
        validate_given(tcp, Protocol::Tcp)?,
    );
    debug!(%endpoints, "resolved daemon endpoints");
    Ok(Some(endpoints))
}

/// `Absent` is an incomplete address; `Empty` maps to `None` and `Given` to
/// the raw text, both still to be validated.
fn require<'a>(
    input: &str,
    raw: RawAddress<'a>,
    protocol: Protocol,
) -> Result<Option<&'a str>, ResolveError> {
    match raw {
        RawAddress::Absent => Err(ResolveError::IncompleteAddress {
            input: input.to_string(),
            missing: protocol,
        }),
        RawAddress::Empty => Ok(None),
        RawAddress::Given(addr) => Ok(Some(addr)),
    }
}

fn validate_given(raw: Option<&str>, protocol: Protocol) -> Result<SocketAddr, ResolveError> {
    match raw {
        Some(addr) => validate_address(addr, protocol),
        None => Err(ResolveError::address(protocol, "", AddressErrorKind::Empty)),
    }
}

/// Resolves daemon endpoints with the environment taking precedence.
#[derive(Debug, Clone)]
pub struct DaemonResolver<E = ProcessEnv> {
    env: E,
    env_var: String,
}

impl DaemonResolver<ProcessEnv> {
    /// A resolver reading `AWS_XRAY_DAEMON_ADDRESS` from the process
    /// environment.
    pub fn new() -> Self {
        Self::with_env(ProcessEnv)
    }
}

impl Default for DaemonResolver<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EnvSource> DaemonResolver<E> {
    /// A resolver reading `AWS_XRAY_DAEMON_ADDRESS` from `env`.
    pub fn with_env(env: E) -> Self {
        Self {
            env,
            env_var: DAEMON_ADDRESS_ENV_VAR.to_string(),
        }
    }

    /// Read the override from `name` instead of `AWS_XRAY_DAEMON_ADDRESS`.
    pub fn with_env_var(mut self, name: impl Into<String>) -> Self {
        self.env_var = name.into();
        self
    }

    /// Name of the environment variable consulted for the override.
    pub fn env_var(&self) -> &str {
        &self.env_var
    }

    /// The override value, if set and non-empty.
    fn env_override(&self) -> Option<String> {
        self.env.var(&self.env_var).filter(|value| !value.is_empty())
    }

    /// Pick the environment override if present, else `address`.
    fn select<'a>(&self, address: &'a str) -> Cow<'a, str> {
        match self.env_override() {
            Some(value) => {
                info!(
                    env_var = %self.env_var,
                    address = %value,
                    "using daemon endpoints from environment"
                );
                Cow::Owned(value)
            }
            None => Cow::Borrowed(address),
        }
    }

    /// Resolve the endpoints, never failing.
    ///
    /// The environment override, when set, replaces `default_address`
    /// entirely. If the chosen string is empty or invalid the fixed defaults
    /// (`127.0.0.1:2000` for both protocols) are returned; an invalid
    /// override does not fall back to `default_address`.
    pub fn resolve_or_default(&self, default_address: &str) -> DaemonEndpoints {
        let address = self.select(default_address);
        match resolve_from_string(&address) {
            Ok(Some(endpoints)) => endpoints,
            Ok(None) => DaemonEndpoints::default(),
            Err(error) => {
                let endpoints = DaemonEndpoints::default();
                warn!(
                    %error,
                    fallback = %endpoints,
                    "invalid daemon address, using default endpoints"
                );
                endpoints
            }
        }
    }

    /// Strictly resolve the environment override alone.
    ///
    /// Returns `Ok(None)` when the variable is unset or empty.
    pub fn resolve_from_env(&self) -> Result<Option<DaemonEndpoints>, ResolveError> {
        match self.env_override() {
            Some(value) => resolve_from_string(&value),
            None => Ok(None),
        }
    }

    /// Strictly resolve `address`, unless the environment override is set, in
    /// which case the override is resolved instead.
    ///
    /// An invalid override is reported as an error even when `address` would
    /// have been valid.
    pub fn resolve_with_override(
        &self,
        address: &str,
    ) -> Result<Option<DaemonEndpoints>, ResolveError> {
        resolve_from_string(&self.select(address))
    }
}

/// Endpoints from the process environment, or the defaults.
pub fn daemon_endpoints() -> DaemonEndpoints {
    DaemonResolver::new().resolve_or_default("")
}

/// Endpoints from the process environment, else `default_address`, else the
/// defaults.
pub fn daemon_endpoints_or(default_address: &str) -> DaemonEndpoints {
    DaemonResolver::new().resolve_or_default(default_address)
}

/// Strictly resolve `AWS_XRAY_DAEMON_ADDRESS` from the process environment.
pub fn daemon_endpoints_from_env() -> Result<Option<DaemonEndpoints>, ResolveError> {
    DaemonResolver::new().resolve_from_env()
}

/// Strictly resolve `address`, overridden by `AWS_XRAY_DAEMON_ADDRESS` when
/// that is set in the process environment.
pub fn daemon_endpoints_with_override(
    address: &str,
) -> Result<Option<DaemonEndpoints>, ResolveError> {
    DaemonResolver::new().resolve_with_override(address)
}
