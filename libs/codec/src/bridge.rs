//! Bridge entry points: Across `depositV3` and handler `handleMessage`

use crate::abi::{self, multicall_handler, spoke_pool};
use crate::calls::{next_address, next_uint};
use crate::error::{CodecError, Result};
use ethabi::Token;
use refuel_types::{Address, Bytes, Call, U256};

/// Arguments of `SpokePool.depositV3`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositV3Params {
    pub depositor: Address,
    pub recipient: Address,
    pub input_token: Address,
    pub output_token: Address,
    pub input_amount: U256,
    pub output_amount: U256,
    pub destination_chain_id: u64,
    pub exclusive_relayer: Address,
    pub quote_timestamp: u32,
    pub fill_deadline: u32,
    pub exclusivity_deadline: u32,
    /// Handler message executed on the destination after the fill
    pub message: Bytes,
}

/// Calldata for `depositV3(params)`
pub fn encode_deposit_v3(params: &DepositV3Params) -> Result<Bytes> {
    abi::encode_call(
        &spoke_pool::deposit_v3_function(),
        &[
            Token::Address(params.depositor),
            Token::Address(params.recipient),
            Token::Address(params.input_token),
            Token::Address(params.output_token),
            Token::Uint(params.input_amount),
            Token::Uint(params.output_amount),
            Token::Uint(U256::from(params.destination_chain_id)),
            Token::Address(params.exclusive_relayer),
            Token::Uint(U256::from(params.quote_timestamp)),
            Token::Uint(U256::from(params.fill_deadline)),
            Token::Uint(U256::from(params.exclusivity_deadline)),
            Token::Bytes(params.message.clone()),
        ],
    )
}

/// `spokePool.depositV3(params)` as a batch call
pub fn build_deposit_v3_call(spoke_pool: Address, params: &DepositV3Params) -> Result<Call> {
    Ok(Call::new(spoke_pool, encode_deposit_v3(params)?))
}

pub fn decode_deposit_v3(data: &[u8]) -> Result<DepositV3Params> {
    let mut fields = abi::decode_call(&spoke_pool::deposit_v3_function(), data)?.into_iter();

    let depositor = next_address(&mut fields, "depositor")?;
    let recipient = next_address(&mut fields, "recipient")?;
    let input_token = next_address(&mut fields, "inputToken")?;
    let output_token = next_address(&mut fields, "outputToken")?;
    let input_amount = next_uint(&mut fields, "inputAmount")?;
    let output_amount = next_uint(&mut fields, "outputAmount")?;
    let destination_chain_id = narrow_u64(next_uint(&mut fields, "destinationChainId")?, "destinationChainId")?;
    let exclusive_relayer = next_address(&mut fields, "exclusiveRelayer")?;
    // uint32 fields are range-checked by the decoder
    let quote_timestamp = next_uint(&mut fields, "quoteTimestamp")?.low_u32();
    let fill_deadline = next_uint(&mut fields, "fillDeadline")?.low_u32();
    let exclusivity_deadline = next_uint(&mut fields, "exclusivityDeadline")?.low_u32();
    let message = fields
        .next()
        .and_then(Token::into_bytes)
        .ok_or(CodecError::UnexpectedToken { field: "message" })?;

    Ok(DepositV3Params {
        depositor,
        recipient,
        input_token,
        output_token,
        input_amount,
        output_amount,
        destination_chain_id,
        exclusive_relayer,
        quote_timestamp,
        fill_deadline,
        exclusivity_deadline,
        message,
    })
}

/// Calldata for `handleMessage(token, message)`
pub fn encode_handle_message(token: Address, message: &[u8]) -> Result<Bytes> {
    abi::encode_call(
        &multicall_handler::handle_message_function(),
        &[Token::Address(token), Token::Bytes(message.to_vec())],
    )
}

/// Split `handleMessage` calldata into `(token, message)`
pub fn decode_handle_message(data: &[u8]) -> Result<(Address, Bytes)> {
    let mut fields =
        abi::decode_call(&multicall_handler::handle_message_function(), data)?.into_iter();

    let token = next_address(&mut fields, "token")?;
    let message = fields
        .next()
        .and_then(Token::into_bytes)
        .ok_or(CodecError::UnexpectedToken { field: "message" })?;
    Ok((token, message))
}

fn narrow_u64(value: U256, field: &'static str) -> Result<u64> {
    if value.bits() > 64 {
        return Err(CodecError::ValueOutOfRange {
            field,
            bits: 64,
            value: value.to_string(),
        });
    }
    Ok(value.low_u64())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_params() -> DepositV3Params {
        DepositV3Params {
            depositor: Address::repeat_byte(0x11),
            recipient: Address::repeat_byte(0x22),
            input_token: Address::repeat_byte(0x33),
            output_token: Address::repeat_byte(0x44),
            input_amount: U256::from(10_000_000u64),
            output_amount: U256::from(9_950_000u64),
            destination_chain_id: 11_155_420,
            exclusive_relayer: Address::zero(),
            quote_timestamp: 1_700_000_000,
            fill_deadline: 1_700_014_400,
            exclusivity_deadline: 0,
            message: vec![0xde, 0xad, 0xbe, 0xef],
        }
    }

    #[test]
    fn test_deposit_v3_selector() {
        let data = encode_deposit_v3(&sample_params()).unwrap();
        assert_eq!(
            data[..4],
            spoke_pool::deposit_v3_function().short_signature()
        );
        // 12 head words, message length word, one padded message word
        assert_eq!(data.len(), 4 + 32 * 14);
    }

    #[test]
    fn test_deposit_v3_decode() {
        let params = sample_params();
        let call = build_deposit_v3_call(Address::repeat_byte(0x99), &params).unwrap();

        assert_eq!(call.target, Address::repeat_byte(0x99));
        assert_eq!(call.value, U256::zero());
        assert_eq!(decode_deposit_v3(&call.call_data).unwrap(), params);
    }

    #[test]
    fn test_handle_message() {
        let token = Address::repeat_byte(0x05);
        let data = encode_handle_message(token, &[0x01, 0x02]).unwrap();

        assert_eq!(
            data[..4],
            multicall_handler::handle_message_function().short_signature()
        );
        assert_eq!(decode_handle_message(&data).unwrap(), (token, vec![0x01, 0x02]));
    }

    #[test]
    fn test_handle_message_rejects_deposit() {
        let data = encode_deposit_v3(&sample_params()).unwrap();
        assert!(matches!(
            decode_handle_message(&data),
            Err(CodecError::SelectorMismatch { .. })
        ));
    }
}
