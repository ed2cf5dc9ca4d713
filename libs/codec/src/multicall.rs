//! Multicall handler message packing
//!
//! A message is the ABI encoding of a single `Instructions` tuple:
//!
//! ```text
//! ((address target, bytes callData, uint256 value)[] calls, address fallbackRecipient)
//! ```
//!
//! Call order is preserved exactly; the handler executes calls in array order.

use crate::abi::multicall_handler;
use crate::calls::{next_address, next_uint};
use crate::error::{CodecError, Result};
use ethabi::Token;
use refuel_types::{Address, Bytes, Call, MulticallInstructions};
use tracing::debug;

/// Pack `calls` and the fallback recipient into a handler message
pub fn encode_multicall_message(calls: &[Call], fallback_recipient: Address) -> Bytes {
    let call_tokens = calls
        .iter()
        .map(|call| {
            Token::Tuple(vec![
                Token::Address(call.target),
                Token::Bytes(call.call_data.clone()),
                Token::Uint(call.value),
            ])
        })
        .collect();

    let message = ethabi::encode(&[Token::Tuple(vec![
        Token::Array(call_tokens),
        Token::Address(fallback_recipient),
    ])]);

    debug!(
        calls = calls.len(),
        bytes = message.len(),
        fallback = ?fallback_recipient,
        "Packed multicall message"
    );
    message
}

/// Unpack a handler message
pub fn decode_multicall_message(message: &[u8]) -> Result<MulticallInstructions> {
    let tokens = ethabi::decode(&[multicall_handler::instructions_param_type()], message)
        .map_err(|source| CodecError::Decode {
            context: "multicall message".to_string(),
            source,
        })?;

    let mut fields = tokens
        .into_iter()
        .next()
        .and_then(Token::into_tuple)
        .ok_or(CodecError::UnexpectedToken {
            field: "instructions",
        })?
        .into_iter();

    let call_tokens = fields
        .next()
        .and_then(Token::into_array)
        .ok_or(CodecError::UnexpectedToken { field: "calls" })?;
    let fallback_recipient = next_address(&mut fields, "fallbackRecipient")?;

    let calls = call_tokens
        .into_iter()
        .map(decode_call_tuple)
        .collect::<Result<Vec<_>>>()?;

    Ok(MulticallInstructions {
        calls,
        fallback_recipient,
    })
}

fn decode_call_tuple(token: Token) -> Result<Call> {
    let mut fields = token
        .into_tuple()
        .ok_or(CodecError::UnexpectedToken { field: "call" })?
        .into_iter();

    let target = next_address(&mut fields, "call.target")?;
    let call_data = fields
        .next()
        .and_then(Token::into_bytes)
        .ok_or(CodecError::UnexpectedToken {
            field: "call.callData",
        })?;
    let value = next_uint(&mut fields, "call.value")?;

    Ok(Call::with_value(target, call_data, value))
}
