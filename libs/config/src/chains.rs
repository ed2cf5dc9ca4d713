//! Per-chain token and contract addresses
//!
//! The builtin table covers the supported testnets. Deployment-specific
//! contracts (the execution core, and the spoke pool on new chains) can be
//! supplied through [`ChainRegistry::with_overrides`]; a registry is never
//! mutated after construction.

use crate::service_config::ChainOverride;
use hex_literal::hex;
use once_cell::sync::Lazy;
use refuel_types::ethereum_types::H160;
use refuel_types::{Address, TokenInfo, ETH};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Base Sepolia testnet
pub const BASE_SEPOLIA: u64 = 84532;

/// Optimism Sepolia testnet
pub const OPTIMISM_SEPOLIA: u64 = 11155420;

/// Canonical OP-stack WETH predeploy
const OP_STACK_WETH: H160 = H160(hex!("4200000000000000000000000000000000000006"));

/// Uniswap SwapRouter02, same address on both testnets
const SWAP_ROUTER_02: H160 = H160(hex!("94cC0AaC535CCDB3C01d6787D6413C739ae12bc4"));

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChainConfigError {
    #[error("Unsupported chain: {0}")]
    UnsupportedChain(u64),

    #[error("Invalid chain id in configuration: {0}")]
    InvalidChainId(String),

    #[error("Invalid address for {field}: {value}")]
    InvalidAddress { field: String, value: String },

    /// Contract not deployed (or not configured) on this chain
    #[error("Chain {chain_id} has no {field} configured")]
    MissingField { chain_id: u64, field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainTokens {
    pub usdc: Address,
    /// Wrapped native currency
    pub weth: Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainContracts {
    /// Execution core holding user funds for pending tasks
    pub exec_core: Option<Address>,
    pub swap_router: Address,
    pub quoter: Address,
    pub multicall_handler: Address,
    /// Across spoke pool
    pub spoke_pool: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    pub chain_id: u64,
    pub name: String,
    pub tokens: ChainTokens,
    pub contracts: ChainContracts,
    pub default_asset: TokenInfo,
    /// Default USDC/WETH pool fee tier (hundredths of a bip)
    pub pool_fee: u32,
}

impl ChainConfig {
    pub fn exec_core(&self) -> Result<Address, ChainConfigError> {
        self.contracts
            .exec_core
            .ok_or(ChainConfigError::MissingField {
                chain_id: self.chain_id,
                field: "exec_core",
            })
    }

    pub fn spoke_pool(&self) -> Result<Address, ChainConfigError> {
        self.contracts
            .spoke_pool
            .ok_or(ChainConfigError::MissingField {
                chain_id: self.chain_id,
                field: "spoke_pool",
            })
    }

    fn apply(&mut self, ov: &ChainOverride) -> Result<(), ChainConfigError> {
        if let Some(name) = &ov.name {
            self.name = name.clone();
        }
        if let Some(v) = &ov.usdc {
            self.tokens.usdc = parse_address("usdc", v)?;
        }
        if let Some(v) = &ov.weth {
            self.tokens.weth = parse_address("weth", v)?;
        }
        if let Some(v) = &ov.exec_core {
            self.contracts.exec_core = Some(parse_address("exec_core", v)?);
        }
        if let Some(v) = &ov.swap_router {
            self.contracts.swap_router = parse_address("swap_router", v)?;
        }
        if let Some(v) = &ov.quoter {
            self.contracts.quoter = parse_address("quoter", v)?;
        }
        if let Some(v) = &ov.multicall_handler {
            self.contracts.multicall_handler = parse_address("multicall_handler", v)?;
        }
        if let Some(v) = &ov.spoke_pool {
            self.contracts.spoke_pool = Some(parse_address("spoke_pool", v)?);
        }
        if let Some(fee) = ov.pool_fee {
            self.pool_fee = fee;
        }
        Ok(())
    }
}

/// Immutable lookup table keyed by chain id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainRegistry {
    chains: BTreeMap<u64, ChainConfig>,
}

impl ChainRegistry {
    pub fn builtin() -> Self {
        let chains = [
            ChainConfig {
                chain_id: BASE_SEPOLIA,
                name: "Base Sepolia".to_string(),
                tokens: ChainTokens {
                    usdc: H160(hex!("036cbd53842c5426634e7929541ec2318f3dcf7e")),
                    weth: OP_STACK_WETH,
                },
                contracts: ChainContracts {
                    exec_core: None,
                    swap_router: SWAP_ROUTER_02,
                    quoter: H160(hex!("C5290058841028F1614F3A6F0F5816cAd0df5E27")),
                    multicall_handler: H160(hex!("Ce2982F214236B7286313DCc8Bbb36A5eFa9eeF2")),
                    spoke_pool: Some(H160(hex!("82B564983aE7274c86695917BBf8C99ECb6F0F8F"))),
                },
                default_asset: ETH,
                pool_fee: 3000,
            },
            ChainConfig {
                chain_id: OPTIMISM_SEPOLIA,
                name: "OP Sepolia".to_string(),
                tokens: ChainTokens {
                    usdc: H160(hex!("5fd84259d66Cd46123540766Be93DFE6D43130D7")),
                    weth: OP_STACK_WETH,
                },
                contracts: ChainContracts {
                    exec_core: None,
                    swap_router: SWAP_ROUTER_02,
                    quoter: H160(hex!("0FBEa6cf957d95ee9313490050F6A0DA68039404")),
                    multicall_handler: H160(hex!("18574652852147d6445d3db18D0810D3E5f5241c")),
                    spoke_pool: Some(H160(hex!("4e8E101924eDE233C13e2D8622DC8aED2872d505"))),
                },
                default_asset: ETH,
                pool_fee: 500,
            },
        ];

        Self {
            chains: chains.into_iter().map(|c| (c.chain_id, c)).collect(),
        }
    }

    /// Builtin table with deployment overrides applied.
    ///
    /// Override keys are chain ids as strings (TOML table keys). Overrides
    /// for chains outside the builtin table are rejected.
    pub fn with_overrides(
        mut self,
        overrides: &HashMap<String, ChainOverride>,
    ) -> Result<Self, ChainConfigError> {
        for (key, ov) in overrides {
            let chain_id: u64 = key
                .trim()
                .parse()
                .map_err(|_| ChainConfigError::InvalidChainId(key.clone()))?;
            let chain = self
                .chains
                .get_mut(&chain_id)
                .ok_or(ChainConfigError::UnsupportedChain(chain_id))?;
            chain.apply(ov)?;
            tracing::debug!("Applied configuration overrides for chain {}", chain_id);
        }
        Ok(self)
    }

    pub fn get(&self, chain_id: u64) -> Option<&ChainConfig> {
        self.chains.get(&chain_id)
    }

    pub fn contains(&self, chain_id: u64) -> bool {
        self.chains.contains_key(&chain_id)
    }

    pub fn chain_ids(&self) -> Vec<u64> {
        self.chains.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChainConfig> {
        self.chains.values()
    }
}

static BUILTIN_CHAINS: Lazy<ChainRegistry> = Lazy::new(ChainRegistry::builtin);

/// Builtin config for `chain_id`, `None` when the chain is not supported
pub fn chain_config(chain_id: u64) -> Option<&'static ChainConfig> {
    BUILTIN_CHAINS.get(chain_id)
}

pub fn supported_chain_ids() -> Vec<u64> {
    BUILTIN_CHAINS.chain_ids()
}

fn parse_address(field: &str, value: &str) -> Result<Address, ChainConfigError> {
    value
        .trim()
        .parse::<Address>()
        .map_err(|_| ChainConfigError::InvalidAddress {
            field: field.to_string(),
            value: value.to_string(),
        })
}
