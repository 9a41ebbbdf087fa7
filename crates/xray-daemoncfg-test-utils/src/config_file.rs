//! Config file helpers.
//!
//! Helpers for loading a [`ResolverConfig`] from a real file on disk in
//! tests, backed by a temporary directory.

use std::path::PathBuf;

use tempfile::TempDir;
use xray_daemoncfg::{ConfigError, ResolverConfig};

/// A test-scoped config file in an owned temp directory.
///
/// The temp directory is deleted automatically when this value is dropped,
/// guaranteeing cleanup even on panic.
pub struct TestConfigFile {
    pub path: PathBuf,
    _temp_dir: TempDir,
}

impl TestConfigFile {
    /// Write `toml_content` to a fresh temporary `xray.toml`.
    pub async fn with_toml(toml_content: &str) -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("xray.toml");
        tokio::fs::write(&path, toml_content)
            .await
            .expect("failed to write test config");

        Self {
            path,
            _temp_dir: temp_dir,
        }
    }

    /// Load and validate the file.
    pub async fn load(&self) -> Result<ResolverConfig, ConfigError> {
        ResolverConfig::load(&self.path).await
    }

    /// Overwrite the file with new content (for reload testing).
    pub async fn write(&self, toml_content: &str) {
        tokio::fs::write(&self.path, toml_content)
            .await
            .expect("failed to write updated config");
    }
}
