//! # Refuel Codec
//!
//! ## Purpose
//!
//! ABI encoding for every on-chain step of a refuel. Each builder produces the
//! exact calldata a contract expects, so a payload built here can be handed
//! to a transaction sender without further processing.
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → [codec] → services/refuel
//!     ↑           ↓             ↓
//! Plain Data   Calldata     Payload assembly
//! Call         approve()    RefuelDataBuilder
//! Replacement  depositV3()
//! ```
//!
//! ## What This Crate Contains
//! - Canonical `ethabi` function definitions ([`abi`])
//! - One builder per atomic step: approve, transferFrom, swap, unwrap, distribute ([`calls`])
//! - Multicall handler message packing ([`multicall`])
//! - Across `depositV3` and handler `handleMessage` calldata ([`bridge`])
//! - Permit deadline extraction ([`permit`])
//!
//! ## What This Crate Does NOT Contain
//! - Chain addresses (belongs in `refuel-config`)
//! - Quote fetching or any other I/O

pub mod abi;
pub mod bridge;
pub mod calls;
pub mod error;
pub mod multicall;
pub mod permit;

pub use bridge::{
    build_deposit_v3_call, decode_deposit_v3, decode_handle_message, encode_deposit_v3,
    encode_handle_message, DepositV3Params,
};
pub use calls::{
    build_approve_call, build_distribute_token_evenly_call, build_make_call_with_balance_call,
    build_mint_for_call, build_transfer_from_call, build_uniswap_v3_swap_call,
    decode_uniswap_v3_swap_call, encode_quote_exact_input_single, encode_withdraw,
    ExactInputSingleParams, QuoteExactInputSingleParams, FIRST_ARG_OFFSET,
};
pub use error::{CodecError, Result};
pub use multicall::{decode_multicall_message, encode_multicall_message};
pub use permit::task_expiration_time;
