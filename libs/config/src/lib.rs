//! # Refuel Configuration
//!
//! Chain address registry and service configuration for the refuel builders.
//!
//! ## Features
//!
//! - **Chain Registry**: immutable per-chain token and contract addresses
//! - **Fee Schedule**: refuel fee tiers and EXEC reward rate
//! - **Service Configuration**: TOML file + `REFUEL__`-style env overrides
//!
//! ## Usage
//!
//! ```rust
//! use refuel_config::{chain_config, BASE_SEPOLIA};
//!
//! let base = chain_config(BASE_SEPOLIA).expect("builtin chain");
//! assert_eq!(base.pool_fee, 3000);
//! ```

pub mod chains;
pub mod fees;
pub mod service_config;

pub use chains::{
    chain_config, supported_chain_ids, ChainConfig, ChainConfigError, ChainContracts,
    ChainRegistry, ChainTokens, BASE_SEPOLIA, OPTIMISM_SEPOLIA,
};
pub use fees::{exec_reward, refuel_fee, refuel_fee_bps, EXEC_REWARD_PER_USDC};
pub use service_config::{
    load_config, AcrossConfig, AcrossNetwork, ChainOverride, GlobalConfig, RefuelServiceConfig,
    RefuelSettings,
};
