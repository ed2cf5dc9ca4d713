//! Bridge quote types

use crate::{Address, U256};
use serde::{Deserialize, Serialize};

/// Parameters for a bridge quote request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteParams {
    /// Input amount in the input token's smallest unit
    pub amount: U256,
    pub input_token: Address,
    pub output_token: Address,
    pub source_chain_id: u64,
    pub target_chain_id: u64,
}

/// Quote for a bridge deposit.
///
/// Only valid inside its window: relayers reject fills after `fill_deadline`,
/// and until `exclusivity_deadline` only `exclusive_relayer` may fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcrossQuote {
    /// Amount delivered on the destination chain after the relay fee
    pub output_amount: U256,
    pub quote_timestamp: u32,
    pub fill_deadline: u32,
    pub exclusivity_deadline: u32,
    pub exclusive_relayer: Address,
}

impl AcrossQuote {
    /// Fee the bridge keeps out of `input_amount`
    pub fn relay_fee(&self, input_amount: U256) -> U256 {
        input_amount.saturating_sub(self.output_amount)
    }

    pub fn is_exclusive(&self) -> bool {
        !self.exclusive_relayer.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_fee() {
        let quote = AcrossQuote {
            output_amount: U256::from(9_950_000u64),
            quote_timestamp: 1_700_000_000,
            fill_deadline: 1_700_014_400,
            exclusivity_deadline: 0,
            exclusive_relayer: Address::zero(),
        };

        assert_eq!(quote.relay_fee(U256::from(10_000_000u64)), U256::from(50_000u64));
        assert!(!quote.is_exclusive());
    }
}
