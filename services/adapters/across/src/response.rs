//! `GET /suggested-fees` response shape and normalisation
//!
//! The API mixes JSON numbers and decimal strings for the same kind of
//! field, and older deployments omit the timing fields entirely. Everything
//! is decoded leniently here and turned into a strict [`AcrossQuote`].

use crate::error::{QuoteError, Result};
use refuel_types::{Address, AcrossQuote, U256};
use serde::Deserialize;

/// Fill deadline used when the API gives none
pub const DEFAULT_FILL_WINDOW_SECS: u32 = 4 * 60 * 60;

/// A JSON value that may be a number or a decimal string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(u64),
    String(String),
}

impl NumberOrString {
    fn to_u256(&self, field: &str) -> Result<U256> {
        match self {
            NumberOrString::Number(n) => Ok(U256::from(*n)),
            NumberOrString::String(s) => U256::from_dec_str(s.trim())
                .map_err(|_| QuoteError::Decode(format!("{field}: not a decimal integer: {s}"))),
        }
    }

    fn to_u32(&self, field: &str) -> Result<u32> {
        let value = self.to_u256(field)?;
        if value > U256::from(u32::MAX) {
            return Err(QuoteError::Decode(format!("{field}: {value} exceeds uint32")));
        }
        Ok(value.low_u32())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelayFee {
    #[serde(default)]
    pub pct: Option<NumberOrString>,
    pub total: NumberOrString,
}

/// Raw `suggested-fees` body. Only the fields a deposit needs are decoded.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedFeesResponse {
    #[serde(default)]
    pub output_amount: Option<NumberOrString>,
    #[serde(default)]
    pub total_relay_fee: Option<RelayFee>,
    #[serde(default, alias = "quoteTimestamp")]
    pub timestamp: Option<NumberOrString>,
    #[serde(default)]
    pub fill_deadline: Option<NumberOrString>,
    #[serde(default)]
    pub exclusivity_deadline: Option<NumberOrString>,
    #[serde(default)]
    pub exclusive_relayer: Option<Address>,
    #[serde(default)]
    pub is_amount_too_low: bool,
}

impl SuggestedFeesResponse {
    /// Turn the raw response into a quote for `input_amount`, filling absent
    /// timing fields relative to `now`
    pub fn normalise(&self, input_amount: U256, now: u32) -> Result<AcrossQuote> {
        if self.is_amount_too_low {
            return Err(QuoteError::AmountTooLow);
        }

        let output_amount = match (&self.output_amount, &self.total_relay_fee) {
            (Some(output), _) => output.to_u256("outputAmount")?,
            (None, Some(fee)) => {
                let total = fee.total.to_u256("totalRelayFee.total")?;
                if total > input_amount {
                    return Err(QuoteError::InvalidQuote(format!(
                        "relay fee {total} exceeds input amount {input_amount}"
                    )));
                }
                input_amount - total
            }
            (None, None) => {
                return Err(QuoteError::InvalidQuote(
                    "response has neither outputAmount nor totalRelayFee".to_string(),
                ))
            }
        };

        if output_amount.is_zero() {
            return Err(QuoteError::InvalidQuote("zero output amount".to_string()));
        }

        let quote_timestamp = match &self.timestamp {
            Some(ts) => ts.to_u32("timestamp")?,
            None => now,
        };
        let fill_deadline = match &self.fill_deadline {
            Some(deadline) => deadline.to_u32("fillDeadline")?,
            None => now.saturating_add(DEFAULT_FILL_WINDOW_SECS),
        };
        let exclusivity_deadline = match &self.exclusivity_deadline {
            Some(deadline) => deadline.to_u32("exclusivityDeadline")?,
            None => 0,
        };

        Ok(AcrossQuote {
            output_amount,
            quote_timestamp,
            fill_deadline,
            exclusivity_deadline,
            exclusive_relayer: self.exclusive_relayer.unwrap_or_else(Address::zero),
        })
    }
}
