//! Wrapped native currency ABI

use super::{function, param};
use ethabi::{Function, ParamType, StateMutability};

/// function withdraw(uint256 wad)
pub fn withdraw_function() -> Function {
    function(
        "withdraw",
        vec![param("wad", ParamType::Uint(256))],
        vec![],
        StateMutability::NonPayable,
    )
}
