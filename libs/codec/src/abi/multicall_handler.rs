//! Multicall handler ABIs
//!
//! The handler receives a message (directly or from a bridge fill), decodes
//! it as `Instructions { Call[] calls; address fallbackRecipient; }` and runs
//! the calls in order. `makeCallWithBalance` and `distributeTokenEvenly` are
//! only callable by the handler itself, as calls inside its own batch.

use super::{function, param};
use ethabi::{Function, ParamType, StateMutability};

/// struct Call { address target; bytes callData; uint256 value; }
pub fn call_param_type() -> ParamType {
    ParamType::Tuple(vec![
        ParamType::Address,
        ParamType::Bytes,
        ParamType::Uint(256),
    ])
}

/// struct Instructions { Call[] calls; address fallbackRecipient; }
pub fn instructions_param_type() -> ParamType {
    ParamType::Tuple(vec![
        ParamType::Array(Box::new(call_param_type())),
        ParamType::Address,
    ])
}

/// struct Replacement { address token; uint256 offset; }
pub fn replacement_param_type() -> ParamType {
    ParamType::Tuple(vec![ParamType::Address, ParamType::Uint(256)])
}

/// function handleMessage(address token, bytes message)
pub fn handle_message_function() -> Function {
    function(
        "handleMessage",
        vec![
            param("token", ParamType::Address),
            param("message", ParamType::Bytes),
        ],
        vec![],
        StateMutability::NonPayable,
    )
}

/// function makeCallWithBalance(address target, bytes callData, uint256 value, Replacement[] replacement)
pub fn make_call_with_balance_function() -> Function {
    function(
        "makeCallWithBalance",
        vec![
            param("target", ParamType::Address),
            param("callData", ParamType::Bytes),
            param("value", ParamType::Uint(256)),
            param(
                "replacement",
                ParamType::Array(Box::new(replacement_param_type())),
            ),
        ],
        vec![],
        StateMutability::NonPayable,
    )
}

/// function distributeTokenEvenly(address token, address[] recipients)
///
/// `token == address(0)` distributes the native balance.
pub fn distribute_token_evenly_function() -> Function {
    function(
        "distributeTokenEvenly",
        vec![
            param("token", ParamType::Address),
            param("recipients", ParamType::Array(Box::new(ParamType::Address))),
        ],
        vec![],
        StateMutability::NonPayable,
    )
}
