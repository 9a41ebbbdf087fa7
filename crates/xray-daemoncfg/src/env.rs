//! Access to the environment variable that overrides the daemon address.
//!
//! Resolution never touches `std::env` directly; it goes through an
//! [`EnvSource`] so tests and embedders can supply their own values.

use std::collections::HashMap;

/// Environment variable holding the daemon address override.
pub const DAEMON_ADDRESS_ENV_VAR: &str = "AWS_XRAY_DAEMON_ADDRESS";

/// Read-only view of environment variables.
pub trait EnvSource {
    /// Value of `key`, or `None` if it is unset or not valid unicode.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// An in-memory environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Shorthand for setting [`DAEMON_ADDRESS_ENV_VAR`].
    pub fn with_daemon_address(self, value: impl Into<String>) -> Self {
        self.with_var(DAEMON_ADDRESS_ENV_VAR, value)
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
