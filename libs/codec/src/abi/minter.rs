//! EXEC reward minter ABI

use super::{function, param};
use ethabi::{Function, ParamType, StateMutability};

/// function mintFor(address account)
pub fn mint_for_function() -> Function {
    function(
        "mintFor",
        vec![param("account", ParamType::Address)],
        vec![],
        StateMutability::NonPayable,
    )
}
