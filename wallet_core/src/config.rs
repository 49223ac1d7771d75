//! Wallet configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use railway_types::{Network, PoiParams};
use railway_utils::LogFormat;

use crate::WalletError;

/// Configuration for the POI status layer.
///
/// Can be loaded from a TOML file via [`WalletConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WalletConfig {
    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Standby-period constants.
    #[serde(default)]
    pub poi: PoiParams,

    /// Networks known to the registry.
    #[serde(default = "default_networks")]
    pub networks: Vec<Network>,
}

fn default_networks() -> Vec<Network> {
    Network::defaults()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl WalletConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, WalletError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| WalletError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, WalletError> {
        let config: Self = toml::from_str(s).map_err(|e| WalletError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, WalletError> {
        toml::to_string_pretty(self).map_err(|e| WalletError::Config(e.to_string()))
    }

    /// Reject network lists that name the same network twice.
    pub fn validate(&self) -> Result<(), WalletError> {
        for (i, network) in self.networks.iter().enumerate() {
            if self.networks[..i].iter().any(|n| n.name == network.name) {
                return Err(WalletError::Config(format!(
                    "network {} is configured more than once",
                    network.name
                )));
            }
        }
        Ok(())
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            poi: PoiParams::default(),
            networks: default_networks(),
        }
    }
}
