//! Configuration management
//!
//! This module loads the optional sbm configuration file.
//! The configuration file is stored in TOML format at ~/.config/sbm/config.toml,
//! or under $SBM_CONFIG_DIR when that variable is set.
//!
//! Credentials are never read from or written to this file; the SDK's
//! default provider chain resolves them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Current configuration schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Region the provider treats as its default (no location constraint)
pub const DEFAULT_REGION: &str = "us-east-1";

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "SBM_CONFIG_DIR";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for migration support
    pub schema_version: u32,

    /// Default settings
    #[serde(default)]
    pub defaults: Defaults,

    /// Custom S3-compatible endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<EndpointConfig>,
}

/// When to emit ANSI colours
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Default settings for CLI behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Region offered by the create-bucket prompt and used by the client
    #[serde(default = "default_region")]
    pub region: String,

    /// Color mode
    #[serde(default)]
    pub color: ColorMode,

    /// Show spinners during transfers
    #[serde(default = "default_true")]
    pub progress: bool,
}

/// Endpoint override for S3-compatible services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Endpoint URL, e.g. http://localhost:9000
    pub url: String,

    /// Use path-style addressing instead of virtual-hosted buckets
    #[serde(default)]
    pub path_style: bool,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            region: default_region(),
            color: ColorMode::default(),
            progress: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            defaults: Defaults::default(),
            endpoint: None,
        }
    }
}

impl Config {
    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.defaults.region.trim().is_empty() {
            return Err(Error::Config("defaults.region cannot be empty".into()));
        }

        if let Some(endpoint) = &self.endpoint {
            let url = url::Url::parse(&endpoint.url)?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(Error::Config(format!(
                    "Endpoint URL must use http or https: {}",
                    endpoint.url
                )));
            }
        }

        Ok(())
    }
}

/// Configuration manager handles locating and loading config
#[derive(Debug)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager with the default config path
    pub fn new() -> Result<Self> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(Self::with_path(PathBuf::from(dir).join("config.toml")));
        }

        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".into()))?;
        let config_path = config_dir.join("sbm").join("config.toml");
        Ok(Self { config_path })
    }

    /// Create a ConfigManager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the configuration file path
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load configuration from disk
    ///
    /// If the configuration file doesn't exist, returns a default configuration.
    /// Older schema versions are migrated; newer ones are rejected.
    pub fn load(&self) -> Result<Config> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&self.config_path)?;
        let mut config: Config = toml::from_str(&content)?;

        if config.schema_version < SCHEMA_VERSION {
            config = self.migrate(config);
        } else if config.schema_version > SCHEMA_VERSION {
            return Err(Error::Config(format!(
                "Configuration file version {} is newer than supported version {}. Please upgrade sbm.",
                config.schema_version, SCHEMA_VERSION
            )));
        }

        config.validate()?;
        tracing::debug!(path = %self.config_path.display(), "Loaded config");
        Ok(config)
    }

    /// Migrate configuration from older schema version
    fn migrate(&self, mut config: Config) -> Config {
        tracing::debug!(
            from = config.schema_version,
            to = SCHEMA_VERSION,
            "Migrating config schema"
        );
        config.schema_version = SCHEMA_VERSION;
        config
    }
}
