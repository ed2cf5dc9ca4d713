//! Refuel message construction
//!
//! A refuel message is the multicall handler batch that turns stablecoin
//! sitting in the handler into native gas for the recipients. Call order is
//! fixed:
//!
//! 1. `transferFrom(exec_core → handler)` (same-chain only; cross-chain the
//!    bridge fill already delivered the funds)
//! 2. `approve(router, MAX)`
//! 3. `exactInputSingle(usdc → weth)` with the handler as recipient
//! 4. `makeCallWithBalance(weth.withdraw(<balance>))`
//! 5. `distributeTokenEvenly(native, recipients)`
//! 6. caller-supplied extra calls

use crate::error::{RefuelError, Result};
use crate::request::parse_min_eth_out;
use refuel_codec::{
    build_approve_call, build_distribute_token_evenly_call, build_make_call_with_balance_call,
    build_transfer_from_call, build_uniswap_v3_swap_call, encode_multicall_message,
    encode_withdraw, ExactInputSingleParams, FIRST_ARG_OFFSET,
};
use refuel_config::ChainRegistry;
use refuel_types::{Address, Bytes, Call, Replacement, NATIVE_TOKEN, U256};
use tracing::debug;

/// Inputs of a refuel message. Addresses and pool fee come from the
/// target chain unless overridden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefuelMessageParams {
    pub initiator: Address,
    pub amount_usdc: U256,
    pub recipients: Vec<Address>,
    pub source_chain_id: u64,
    pub target_chain_id: u64,
    pub min_eth_out: String,
    pub extra_calls: Vec<Call>,
    /// Amount actually available to swap. Cross-chain this is the bridge's
    /// quoted output, never the deposited input.
    pub amount_usdc_override: Option<U256>,
    pub pool_fee_override: Option<u32>,
    pub usdc_override: Option<Address>,
}

impl RefuelMessageParams {
    pub fn is_cross_chain(&self) -> bool {
        self.source_chain_id != self.target_chain_id
    }

    fn amount_in(&self) -> U256 {
        self.amount_usdc_override.unwrap_or(self.amount_usdc)
    }
}

/// The ordered handler calls of a refuel, before packing
pub fn refuel_calls(registry: &ChainRegistry, params: &RefuelMessageParams) -> Result<Vec<Call>> {
    let target = registry
        .get(params.target_chain_id)
        .ok_or(RefuelError::UnsupportedChain(params.target_chain_id))?;

    let amount_in = params.amount_in();
    if amount_in.is_zero() {
        return Err(RefuelError::InvalidRequest(
            "swap amount must be greater than zero".to_string(),
        ));
    }
    if params.recipients.is_empty() {
        return Err(RefuelError::InvalidRequest(
            "at least one recipient is required".to_string(),
        ));
    }

    let usdc = params.usdc_override.unwrap_or(target.tokens.usdc);
    let weth = target.tokens.weth;
    let router = target.contracts.swap_router;
    let handler = target.contracts.multicall_handler;
    let pool_fee = params.pool_fee_override.unwrap_or(target.pool_fee);
    let min_eth_out = parse_min_eth_out(&params.min_eth_out)?;

    let mut calls = Vec::with_capacity(5 + params.extra_calls.len());

    if !params.is_cross_chain() {
        calls.push(build_transfer_from_call(
            usdc,
            target.exec_core()?,
            handler,
            amount_in,
        )?);
    }

    calls.push(build_approve_call(usdc, router, U256::MAX)?);

    calls.push(build_uniswap_v3_swap_call(
        router,
        &ExactInputSingleParams {
            token_in: usdc,
            token_out: weth,
            fee: pool_fee,
            recipient: handler,
            amount_in,
            amount_out_minimum: min_eth_out,
            sqrt_price_limit_x96: U256::zero(),
        },
    )?);

    // withdraw(0) is patched with the handler's live WETH balance
    calls.push(build_make_call_with_balance_call(
        handler,
        weth,
        encode_withdraw(U256::zero())?,
        U256::zero(),
        &[Replacement::new(weth, FIRST_ARG_OFFSET)],
    )?);

    calls.push(build_distribute_token_evenly_call(
        handler,
        NATIVE_TOKEN,
        &params.recipients,
    )?);

    calls.extend(params.extra_calls.iter().cloned());

    for (index, call) in calls.iter().enumerate() {
        debug!(
            index,
            target = ?call.target,
            selector = %call.selector().map(hex_selector).unwrap_or_default(),
            "Refuel call"
        );
    }

    Ok(calls)
}

/// Build and pack the refuel batch with the initiator as fallback recipient
pub fn build_refuel_message(registry: &ChainRegistry, params: &RefuelMessageParams) -> Result<Bytes> {
    let calls = refuel_calls(registry, params)?;
    Ok(encode_multicall_message(&calls, params.initiator))
}

fn hex_selector(selector: [u8; 4]) -> String {
    format!(
        "0x{:02x}{:02x}{:02x}{:02x}",
        selector[0], selector[1], selector[2], selector[3]
    )
}
