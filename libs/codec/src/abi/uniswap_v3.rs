//! Uniswap V3 periphery ABIs
//!
//! SwapRouter02 and QuoterV2 take their arguments as a single struct; the
//! router variant has no `deadline` field.

use super::{function, param};
use ethabi::{Function, ParamType, StateMutability};

/// struct ExactInputSingleParams {
///     address tokenIn; address tokenOut; uint24 fee; address recipient;
///     uint256 amountIn; uint256 amountOutMinimum; uint160 sqrtPriceLimitX96;
/// }
pub fn exact_input_single_params() -> ParamType {
    ParamType::Tuple(vec![
        ParamType::Address,
        ParamType::Address,
        ParamType::Uint(24),
        ParamType::Address,
        ParamType::Uint(256),
        ParamType::Uint(256),
        ParamType::Uint(160),
    ])
}

/// function exactInputSingle(ExactInputSingleParams params) payable returns (uint256 amountOut)
pub fn exact_input_single_function() -> Function {
    function(
        "exactInputSingle",
        vec![param("params", exact_input_single_params())],
        vec![param("amountOut", ParamType::Uint(256))],
        StateMutability::Payable,
    )
}

/// struct QuoteExactInputSingleParams {
///     address tokenIn; address tokenOut; uint256 amountIn; uint24 fee; uint160 sqrtPriceLimitX96;
/// }
///
/// function quoteExactInputSingle(QuoteExactInputSingleParams params)
///     returns (uint256 amountOut, uint160 sqrtPriceX96After, uint32 initializedTicksCrossed, uint256 gasEstimate)
pub fn quote_exact_input_single_function() -> Function {
    function(
        "quoteExactInputSingle",
        vec![param(
            "params",
            ParamType::Tuple(vec![
                ParamType::Address,
                ParamType::Address,
                ParamType::Uint(256),
                ParamType::Uint(24),
                ParamType::Uint(160),
            ]),
        )],
        vec![
            param("amountOut", ParamType::Uint(256)),
            param("sqrtPriceX96After", ParamType::Uint(160)),
            param("initializedTicksCrossed", ParamType::Uint(32)),
            param("gasEstimate", ParamType::Uint(256)),
        ],
        StateMutability::NonPayable,
    )
}
