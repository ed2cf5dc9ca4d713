//! Service Configuration Module
//!
//! Loads refuel service settings from an optional TOML file with
//! environment variable overrides (`REFUEL__` prefix, `__` separator, e.g.
//! `REFUEL__ACROSS__NETWORK=mainnet`).

use crate::chains::{ChainConfigError, ChainRegistry};
use anyhow::{Context, Result};
use config_crate::{Config, Environment, File};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Main service configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct RefuelServiceConfig {
    #[serde(default)]
    pub global: GlobalConfig,

    #[serde(default)]
    pub across: AcrossConfig,

    #[serde(default)]
    pub refuel: RefuelSettings,

    /// Per-chain address overrides keyed by chain id
    #[serde(default)]
    pub chains: HashMap<String, ChainOverride>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct GlobalConfig {
    pub log_level: String,
    pub json_logs: bool,
}

/// Which Across deployment to quote against
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AcrossNetwork {
    Mainnet,
    #[default]
    Testnet,
}

impl AcrossNetwork {
    pub fn default_base_url(self) -> &'static str {
        match self {
            AcrossNetwork::Mainnet => "https://app.across.to/api",
            AcrossNetwork::Testnet => "https://testnet.across.to/api",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct AcrossConfig {
    pub network: AcrossNetwork,
    /// Overrides the network's public API
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

impl AcrossConfig {
    pub fn api_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.network.default_base_url())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct RefuelSettings {
    /// Minimum native output (18-decimals string) when the caller gives none
    pub default_min_eth_out: String,
}

/// Address overrides for one chain. All fields optional.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ChainOverride {
    pub name: Option<String>,
    pub usdc: Option<String>,
    pub weth: Option<String>,
    pub exec_core: Option<String>,
    pub swap_router: Option<String>,
    pub quoter: Option<String>,
    pub multicall_handler: Option<String>,
    pub spoke_pool: Option<String>,
    pub pool_fee: Option<u32>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl Default for AcrossConfig {
    fn default() -> Self {
        Self {
            network: AcrossNetwork::Testnet,
            base_url: None,
            timeout_secs: 10,
        }
    }
}

impl Default for RefuelSettings {
    fn default() -> Self {
        Self {
            default_min_eth_out: "0".to_string(),
        }
    }
}

impl RefuelServiceConfig {
    /// Load configuration from an optional file with environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            info!("Loading refuel config: {:?}", path);
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("REFUEL")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Expand `${VAR}` references in URL settings
    pub fn expand_env_vars(&mut self) -> Result<()> {
        if let Some(url) = &self.across.base_url {
            let expanded =
                shellexpand::env(url).context("Failed to expand Across base URL")?;
            self.across.base_url = Some(expanded.to_string());
        }
        Ok(())
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.across.timeout_secs == 0 {
            anyhow::bail!("across.timeout_secs must be positive");
        }

        if let Some(url) = &self.across.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                anyhow::bail!("across.base_url must be an http(s) URL, got {}", url);
            }
        }

        let min_out = Decimal::from_str(self.refuel.default_min_eth_out.trim())
            .context("refuel.default_min_eth_out must be a decimal number")?;
        if min_out.is_sign_negative() {
            anyhow::bail!("refuel.default_min_eth_out must be non-negative");
        }

        self.chain_registry()
            .context("Invalid chain overrides")?;

        Ok(())
    }

    /// Builtin chain table with this config's overrides applied
    pub fn chain_registry(&self) -> Result<ChainRegistry, ChainConfigError> {
        let registry = ChainRegistry::builtin().with_overrides(&self.chains)?;
        debug!("Chain registry ready: {:?}", registry.chain_ids());
        Ok(registry)
    }
}

/// Convenience function: load, expand and validate
pub fn load_config(path: Option<&Path>) -> Result<RefuelServiceConfig> {
    let mut config = RefuelServiceConfig::load(path)?;
    config.expand_env_vars()?;
    config.validate()?;
    Ok(config)
}
