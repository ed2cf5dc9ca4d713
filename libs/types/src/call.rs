//! Multicall handler call structures

use crate::{hex_bytes, Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// One atomic sub-call executed by the multicall handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub target: Address,
    #[serde(with = "hex_bytes")]
    pub call_data: Bytes,
    pub value: U256,
}

impl Call {
    /// Call with zero native value attached
    pub fn new(target: Address, call_data: Bytes) -> Self {
        Self {
            target,
            call_data,
            value: U256::zero(),
        }
    }

    pub fn with_value(target: Address, call_data: Bytes, value: U256) -> Self {
        Self {
            target,
            call_data,
            value,
        }
    }

    /// First four bytes of the calldata, if present
    pub fn selector(&self) -> Option<[u8; 4]> {
        self.call_data
            .get(..4)
            .map(|s| [s[0], s[1], s[2], s[3]])
    }
}

/// Patch instruction: overwrite 32 bytes at `offset` in a call's data with the
/// handler's balance of `token` right before the call executes.
///
/// `token == address(0)` refers to the native balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub token: Address,
    pub offset: U256,
}

impl Replacement {
    pub fn new(token: Address, offset: u64) -> Self {
        Self {
            token,
            offset: U256::from(offset),
        }
    }
}

/// Decoded multicall handler message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MulticallInstructions {
    pub calls: Vec<Call>,
    /// Receives leftover funds if any call in the batch reverts
    pub fallback_recipient: Address,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_requires_four_bytes() {
        let short = Call::new(Address::zero(), vec![0x01, 0x02]);
        assert_eq!(short.selector(), None);

        let call = Call::new(Address::zero(), vec![0x2e, 0x1a, 0x7d, 0x4d, 0x00]);
        assert_eq!(call.selector(), Some([0x2e, 0x1a, 0x7d, 0x4d]));
    }

    #[test]
    fn test_call_json_uses_hex_calldata() {
        let call = Call::with_value(Address::repeat_byte(0x11), vec![0xab, 0xcd], U256::from(7));
        let json = serde_json::to_value(&call).unwrap();

        assert_eq!(json["callData"], "0xabcd");
        assert_eq!(
            json["target"],
            "0x1111111111111111111111111111111111111111"
        );

        let back: Call = serde_json::from_value(json).unwrap();
        assert_eq!(back, call);
    }
}
