#![deny(unsafe_code)]

//! Resolution of the UDP and TCP endpoints of a local X-Ray daemon.
//!
//! An address is given either as a dual-address string,
//! `udp:<host>:<port> tcp:<host>:<port>` (tags in any order, each at most
//! once), or as a single bare `<host>:<port>` used for both protocols. The
//! `AWS_XRAY_DAEMON_ADDRESS` environment variable, when set, takes precedence
//! over any caller-supplied address.
//!
//! Resolution happens in two independent steps: [`parser`] splits the string
//! into per-protocol raw addresses and [`validate`] turns each of those into a
//! socket address. [`resolver`] applies the precedence rules on top and offers
//! a strict, error-returning path and a lenient path that falls back to
//! `127.0.0.1:2000`.
//!
//! ```
//! use xray_daemoncfg::{DaemonEndpoints, DaemonResolver, MapEnv};
//!
//! let resolver = DaemonResolver::with_env(MapEnv::new());
//! assert_eq!(resolver.resolve_or_default(""), DaemonEndpoints::default());
//!
//! let resolver =
//!     DaemonResolver::with_env(MapEnv::new().with_daemon_address("127.0.0.1:3000"));
//! let endpoints = resolver.resolve_or_default("udp:10.0.0.1:2000 tcp:10.0.0.1:2000");
//! assert_eq!(endpoints.udp_addr().port(), 3000);
//! ```

/// TOML configuration for the resolver.
pub mod config;
pub mod endpoints;
pub mod env;
pub mod error;
pub mod parser;
pub mod resolver;
pub mod validate;

pub use config::{ConfigError, DaemonAddressConfig, ResolverConfig};
pub use endpoints::{DEFAULT_DAEMON_HOST, DEFAULT_DAEMON_PORT, DaemonEndpoints, Protocol};
pub use env::{DAEMON_ADDRESS_ENV_VAR, EnvSource, MapEnv, ProcessEnv};
pub use error::{AddressErrorKind, FormatErrorKind, ResolveError};
pub use resolver::{
    DaemonResolver, daemon_endpoints, daemon_endpoints_from_env, daemon_endpoints_or,
    daemon_endpoints_with_override, resolve_from_string,
};
