//! Final refuel instruction handed to the submission layer

use crate::{hex_bytes, Address, Bytes};
use serde::{Deserialize, Serialize};

/// Transaction target and calldata for one refuel request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefuelData {
    pub target: Address,
    #[serde(with = "hex_bytes")]
    pub data: Bytes,
}

impl RefuelData {
    pub fn new(target: Address, data: Bytes) -> Self {
        Self { target, data }
    }

    /// Calldata as a `0x`-prefixed hex string
    pub fn data_hex(&self) -> String {
        hex_bytes::encode(&self.data)
    }
}
