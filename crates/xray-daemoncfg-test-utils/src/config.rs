//! Configuration builders for tests.
//!
//! Use [`TestConfigBuilder`] to create customised [`ResolverConfig`] values
//! without repeating boilerplate across crate boundaries.

use xray_daemoncfg::ResolverConfig;

/// Fluent builder for [`ResolverConfig`] in tests.
///
/// # Example
///
/// ```ignore
/// let config = TestConfigBuilder::new()
///     .dual_address("127.0.0.2:2001", "127.0.0.1:2000")
///     .env_var("TEST_DAEMON_ADDRESS")
///     .build();
/// ```
pub struct TestConfigBuilder {
    config: ResolverConfig,
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ResolverConfig::default(),
        }
    }

    /// Set `daemon.address` verbatim.
    pub fn address(mut self, address: &str) -> Self {
        self.config.daemon.address = address.to_string();
        self
    }

    /// Set `daemon.address` to a tagged `udp:… tcp:…` string.
    pub fn dual_address(self, udp: &str, tcp: &str) -> Self {
        self.address(&format!("udp:{udp} tcp:{tcp}"))
    }

    pub fn env_var(mut self, name: &str) -> Self {
        self.config.daemon.env_var = name.to_string();
        self
    }

    pub fn build(self) -> ResolverConfig {
        self.config
    }

    /// Render the configuration as the TOML a user would write.
    pub fn to_toml(&self) -> String {
        format!(
            "[daemon]\naddress = {:?}\nenv_var = {:?}\n",
            self.config.daemon.address, self.config.daemon.env_var
        )
    }
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
