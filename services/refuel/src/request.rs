//! Refuel request model and validation

use crate::error::{RefuelError, Result};
use ethers_core::utils::parse_units;
use refuel_types::{Address, Call, U256};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Decimals of the native currency on every supported chain
pub const NATIVE_DECIMALS: u32 = 18;

fn default_min_eth_out() -> String {
    "0".to_string()
}

/// What the user asked for: pay `amount` of `token` on the source chain,
/// receive native gas split across `recipients` on the target chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefuelRequest {
    /// Fallback recipient of the batch if any call reverts
    pub initiator: Address,
    /// Stablecoin paid on the source chain
    pub token: Address,
    /// Amount of `token` in base units
    pub amount: U256,
    pub recipients: Vec<Address>,
    pub source_chain_id: u64,
    pub target_chain_id: u64,
    /// Minimum native out of the swap, as an 18-decimals string
    #[serde(default = "default_min_eth_out")]
    pub min_eth_out: String,
    /// Overrides the target chain's default pool fee tier
    #[serde(default)]
    pub pool_fee: Option<u32>,
    /// Extra calls executed on the source chain alongside the refuel
    #[serde(default)]
    pub source_calls: Vec<Call>,
}

impl RefuelRequest {
    pub fn new(
        initiator: Address,
        token: Address,
        amount: U256,
        recipients: Vec<Address>,
        source_chain_id: u64,
        target_chain_id: u64,
    ) -> Self {
        Self {
            initiator,
            token,
            amount,
            recipients,
            source_chain_id,
            target_chain_id,
            min_eth_out: default_min_eth_out(),
            pool_fee: None,
            source_calls: Vec::new(),
        }
    }

    pub fn with_min_eth_out(mut self, min_eth_out: impl Into<String>) -> Self {
        self.min_eth_out = min_eth_out.into();
        self
    }

    pub fn with_pool_fee(mut self, pool_fee: u32) -> Self {
        self.pool_fee = Some(pool_fee);
        self
    }

    pub fn with_source_calls(mut self, calls: Vec<Call>) -> Self {
        self.source_calls = calls;
        self
    }

    pub fn is_cross_chain(&self) -> bool {
        self.source_chain_id != self.target_chain_id
    }

    /// Fail fast on requests that could never execute
    pub fn validate(&self) -> Result<()> {
        if self.amount.is_zero() {
            return Err(RefuelError::InvalidRequest(
                "amount must be greater than zero".to_string(),
            ));
        }
        if self.recipients.is_empty() {
            return Err(RefuelError::InvalidRequest(
                "at least one recipient is required".to_string(),
            ));
        }
        parse_min_eth_out(&self.min_eth_out)?;
        Ok(())
    }
}

/// Parse a human-readable native amount into wei
pub fn parse_min_eth_out(value: &str) -> Result<U256> {
    let trimmed = value.trim();
    let decimal = Decimal::from_str(trimmed).map_err(|_| {
        RefuelError::InvalidRequest(format!("min_eth_out is not a decimal number: {value}"))
    })?;
    if decimal.is_sign_negative() {
        return Err(RefuelError::InvalidRequest(format!(
            "min_eth_out must be non-negative: {value}"
        )));
    }

    let wei = parse_units(trimmed, NATIVE_DECIMALS).map_err(|e| {
        RefuelError::InvalidRequest(format!("min_eth_out {value}: {e}"))
    })?;
    Ok(wei.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RefuelRequest {
        RefuelRequest::new(
            Address::repeat_byte(0x01),
            Address::repeat_byte(0x02),
            U256::from(10_000_000u64),
            vec![Address::repeat_byte(0x03)],
            84532,
            84532,
        )
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
        assert!(!request().is_cross_chain());
    }

    #[test]
    fn test_zero_amount_rejected() {
        let mut req = request();
        req.amount = U256::zero();
        assert!(matches!(req.validate(), Err(RefuelError::InvalidRequest(_))));
    }

    #[test]
    fn test_empty_recipients_rejected() {
        let mut req = request();
        req.recipients.clear();
        assert!(matches!(req.validate(), Err(RefuelError::InvalidRequest(_))));
    }

    #[test]
    fn test_min_eth_out_units() {
        assert_eq!(parse_min_eth_out("0").unwrap(), U256::zero());
        assert_eq!(
            parse_min_eth_out("0.001").unwrap(),
            U256::from(1_000_000_000_000_000u64)
        );
        assert_eq!(
            parse_min_eth_out("2").unwrap(),
            U256::from(2_000_000_000_000_000_000u128)
        );
    }

    #[test]
    fn test_min_eth_out_rejects_garbage() {
        assert!(parse_min_eth_out("abc").is_err());
        assert!(parse_min_eth_out("-1").is_err());
        assert!(request().with_min_eth_out("lots").validate().is_err());
    }

    #[test]
    fn test_request_json_defaults() {
        let json = r#"{
            "initiator": "0x0101010101010101010101010101010101010101",
            "token": "0x0202020202020202020202020202020202020202",
            "amount": "0x989680",
            "recipients": ["0x0303030303030303030303030303030303030303"],
            "sourceChainId": 84532,
            "targetChainId": 84532
        }"#;
        let req: RefuelRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req, request());
    }
}
