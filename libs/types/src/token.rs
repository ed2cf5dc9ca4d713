//! Token metadata shared by every supported chain

use serde::Serialize;

/// Chain-independent token metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenInfo {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

pub const USDC: TokenInfo = TokenInfo {
    name: "USD Coin",
    symbol: "USDC",
    decimals: 6,
};

pub const WETH: TokenInfo = TokenInfo {
    name: "Wrapped Ether",
    symbol: "WETH",
    decimals: 18,
};

/// Native gas currency
pub const ETH: TokenInfo = TokenInfo {
    name: "Ethereum",
    symbol: "ETH",
    decimals: 18,
};

/// Reward token minted per refuelled USDC
pub const EXEC: TokenInfo = TokenInfo {
    name: "Exec402 Token",
    symbol: "EXEC",
    decimals: 18,
};
