//! ERC-20 function ABIs

use super::{function, param};
use ethabi::{Function, ParamType, StateMutability};

/// function approve(address spender, uint256 amount) returns (bool)
pub fn approve_function() -> Function {
    function(
        "approve",
        vec![
            param("spender", ParamType::Address),
            param("amount", ParamType::Uint(256)),
        ],
        vec![param("", ParamType::Bool)],
        StateMutability::NonPayable,
    )
}

/// function transferFrom(address from, address to, uint256 amount) returns (bool)
pub fn transfer_from_function() -> Function {
    function(
        "transferFrom",
        vec![
            param("from", ParamType::Address),
            param("to", ParamType::Address),
            param("amount", ParamType::Uint(256)),
        ],
        vec![param("", ParamType::Bool)],
        StateMutability::NonPayable,
    )
}
