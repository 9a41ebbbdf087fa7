//! TOML configuration for daemon address resolution.
//!
//! ```toml
//! [daemon]
//! address = "udp:127.0.0.1:2000 tcp:127.0.0.1:2000"
//! env_var = "AWS_XRAY_DAEMON_ADDRESS"
//! ```
//!
//! Both keys are optional. An empty `address` means "use the defaults unless
//! the environment says otherwise".

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::endpoints::DaemonEndpoints;
use crate::env::{DAEMON_ADDRESS_ENV_VAR, EnvSource, ProcessEnv};
use crate::error::ResolveError;
use crate::resolver::{DaemonResolver, resolve_from_string};

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("daemon.address is invalid: {0}")]
    Address(#[from] ResolveError),
}

/// Top-level resolver configuration.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Daemon address settings.
    #[serde(default)]
    pub daemon: DaemonAddressConfig,
}

/// Where the daemon is expected to listen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaemonAddressConfig {
    /// Dual-address or bare address string used when the environment does
    /// not override it.
    #[serde(default)]
    pub address: String,

    /// Environment variable that overrides `address`.
    #[serde(default = "default_env_var")]
    pub env_var: String,
}

impl Default for DaemonAddressConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            env_var: default_env_var(),
        }
    }
}

fn default_env_var() -> String {
    DAEMON_ADDRESS_ENV_VAR.to_string()
}

impl ResolverConfig {
    /// Load configuration from a TOML file at the given path using async I/O.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: ResolverConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// A non-empty `daemon.address` must resolve on its own; the environment
    /// is not consulted here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let env_var = &self.daemon.env_var;
        if env_var.is_empty() {
            return Err(ConfigError::Validation(
                "daemon.env_var must not be empty".to_string(),
            ));
        }
        if env_var.contains(['=', '\0']) {
            return Err(ConfigError::Validation(format!(
                "daemon.env_var must not contain '=' or NUL, got {env_var:?}"
            )));
        }

        resolve_from_string(&self.daemon.address)?;
        Ok(())
    }

    /// A resolver over the process environment honouring `daemon.env_var`.
    pub fn resolver(&self) -> DaemonResolver<ProcessEnv> {
        self.resolver_with_env(ProcessEnv)
    }

    /// A resolver over `env` honouring `daemon.env_var`.
    pub fn resolver_with_env<E: EnvSource>(&self, env: E) -> DaemonResolver<E> {
        DaemonResolver::with_env(env).with_env_var(self.daemon.env_var.clone())
    }

    /// Leniently resolve the configured address against the process
    /// environment.
    pub fn endpoints(&self) -> DaemonEndpoints {
        self.resolver().resolve_or_default(&self.daemon.address)
    }
}
