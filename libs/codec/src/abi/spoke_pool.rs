//! Across spoke pool ABI

use super::{function, param};
use ethabi::{Function, ParamType, StateMutability};

/// function depositV3(
///     address depositor, address recipient, address inputToken, address outputToken,
///     uint256 inputAmount, uint256 outputAmount, uint256 destinationChainId,
///     address exclusiveRelayer, uint32 quoteTimestamp, uint32 fillDeadline,
///     uint32 exclusivityDeadline, bytes message
/// ) payable
pub fn deposit_v3_function() -> Function {
    function(
        "depositV3",
        vec![
            param("depositor", ParamType::Address),
            param("recipient", ParamType::Address),
            param("inputToken", ParamType::Address),
            param("outputToken", ParamType::Address),
            param("inputAmount", ParamType::Uint(256)),
            param("outputAmount", ParamType::Uint(256)),
            param("destinationChainId", ParamType::Uint(256)),
            param("exclusiveRelayer", ParamType::Address),
            param("quoteTimestamp", ParamType::Uint(32)),
            param("fillDeadline", ParamType::Uint(32)),
            param("exclusivityDeadline", ParamType::Uint(32)),
            param("message", ParamType::Bytes),
        ],
        vec![],
        StateMutability::Payable,
    )
}
