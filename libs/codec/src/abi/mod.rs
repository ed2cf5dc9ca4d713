//! Canonical ABI definitions for the contracts a refuel touches
//!
//! # Supported Contracts
//! - ERC-20 tokens (`approve`, `transferFrom`)
//! - Wrapped native (`withdraw`)
//! - Uniswap SwapRouter02 and QuoterV2
//! - Multicall handler (`handleMessage`, `makeCallWithBalance`, `distributeTokenEvenly`)
//! - Across spoke pool (`depositV3`)
//! - EXEC reward minter (`mintFor`)

pub mod erc20;
pub mod minter;
pub mod multicall_handler;
pub mod spoke_pool;
pub mod uniswap_v3;
pub mod weth;

use crate::error::{CodecError, Result};
use ethabi::{Function, Param, ParamType, StateMutability, Token};

pub(crate) fn param(name: &str, kind: ParamType) -> Param {
    Param {
        name: name.to_string(),
        kind,
        internal_type: None,
    }
}

#[allow(deprecated)]
pub(crate) fn function(
    name: &str,
    inputs: Vec<Param>,
    outputs: Vec<Param>,
    state_mutability: StateMutability,
) -> Function {
    Function {
        name: name.to_string(),
        inputs,
        outputs,
        constant: None,
        state_mutability,
    }
}

/// Selector plus ABI-encoded arguments
pub fn encode_call(function: &Function, tokens: &[Token]) -> Result<Vec<u8>> {
    function
        .encode_input(tokens)
        .map_err(|source| CodecError::Encode {
            function: function.name.clone(),
            source,
        })
}

/// Check the selector and decode the arguments of `function` from `data`
pub fn decode_call(function: &Function, data: &[u8]) -> Result<Vec<Token>> {
    if data.len() < 4 {
        return Err(CodecError::CalldataTooShort {
            function: function.name.clone(),
            len: data.len(),
        });
    }

    let expected = function.short_signature();
    if data[..4] != expected {
        return Err(CodecError::SelectorMismatch {
            function: function.name.clone(),
            expected: hex::encode(expected),
            got: hex::encode(&data[..4]),
        });
    }

    function
        .decode_input(&data[4..])
        .map_err(|source| CodecError::Decode {
            context: function.name.clone(),
            source,
        })
}
