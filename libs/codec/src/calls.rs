//! Call builders for each atomic refuel step
//!
//! Every builder returns a [`Call`] ready to be packed into a multicall
//! handler message. Builders are pure; they fail only when an argument does
//! not fit its ABI type.

use crate::abi::{self, erc20, minter, multicall_handler, uniswap_v3, weth};
use crate::error::{CodecError, Result};
use ethabi::Token;
use refuel_types::{Address, Bytes, Call, Replacement, U256};

/// Byte offset of the first argument word, right after the selector
pub const FIRST_ARG_OFFSET: u64 = 4;

/// Arguments of SwapRouter02 `exactInputSingle`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactInputSingleParams {
    pub token_in: Address,
    pub token_out: Address,
    /// Pool fee tier, uint24
    pub fee: u32,
    pub recipient: Address,
    pub amount_in: U256,
    pub amount_out_minimum: U256,
    /// uint160; zero disables the price limit
    pub sqrt_price_limit_x96: U256,
}

/// Arguments of QuoterV2 `quoteExactInputSingle`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteExactInputSingleParams {
    pub token_in: Address,
    pub token_out: Address,
    pub amount_in: U256,
    pub fee: u32,
    pub sqrt_price_limit_x96: U256,
}

/// `token.approve(spender, amount)`
pub fn build_approve_call(token: Address, spender: Address, amount: U256) -> Result<Call> {
    let data = abi::encode_call(
        &erc20::approve_function(),
        &[Token::Address(spender), Token::Uint(amount)],
    )?;
    Ok(Call::new(token, data))
}

/// `token.transferFrom(from, to, amount)`
pub fn build_transfer_from_call(
    token: Address,
    from: Address,
    to: Address,
    amount: U256,
) -> Result<Call> {
    let data = abi::encode_call(
        &erc20::transfer_from_function(),
        &[Token::Address(from), Token::Address(to), Token::Uint(amount)],
    )?;
    Ok(Call::new(token, data))
}

/// `router.exactInputSingle(params)`
pub fn build_uniswap_v3_swap_call(router: Address, params: &ExactInputSingleParams) -> Result<Call> {
    check_bits("fee", U256::from(params.fee), 24)?;
    check_bits("sqrtPriceLimitX96", params.sqrt_price_limit_x96, 160)?;

    let data = abi::encode_call(
        &uniswap_v3::exact_input_single_function(),
        &[Token::Tuple(vec![
            Token::Address(params.token_in),
            Token::Address(params.token_out),
            Token::Uint(U256::from(params.fee)),
            Token::Address(params.recipient),
            Token::Uint(params.amount_in),
            Token::Uint(params.amount_out_minimum),
            Token::Uint(params.sqrt_price_limit_x96),
        ])],
    )?;
    Ok(Call::new(router, data))
}

/// Decode `exactInputSingle` calldata back into its parameters
pub fn decode_uniswap_v3_swap_call(data: &[u8]) -> Result<ExactInputSingleParams> {
    let tokens = abi::decode_call(&uniswap_v3::exact_input_single_function(), data)?;
    let mut fields = tokens
        .into_iter()
        .next()
        .and_then(Token::into_tuple)
        .ok_or(CodecError::UnexpectedToken { field: "params" })?
        .into_iter();

    let token_in = next_address(&mut fields, "tokenIn")?;
    let token_out = next_address(&mut fields, "tokenOut")?;
    let fee = next_uint(&mut fields, "fee")?.low_u32();
    let recipient = next_address(&mut fields, "recipient")?;

    Ok(ExactInputSingleParams {
        token_in,
        token_out,
        fee,
        recipient,
        amount_in: next_uint(&mut fields, "amountIn")?,
        amount_out_minimum: next_uint(&mut fields, "amountOutMinimum")?,
        sqrt_price_limit_x96: next_uint(&mut fields, "sqrtPriceLimitX96")?,
    })
}

/// Calldata for `quoter.quoteExactInputSingle(params)`, meant for `eth_call`
pub fn encode_quote_exact_input_single(params: &QuoteExactInputSingleParams) -> Result<Bytes> {
    check_bits("fee", U256::from(params.fee), 24)?;
    check_bits("sqrtPriceLimitX96", params.sqrt_price_limit_x96, 160)?;

    abi::encode_call(
        &uniswap_v3::quote_exact_input_single_function(),
        &[Token::Tuple(vec![
            Token::Address(params.token_in),
            Token::Address(params.token_out),
            Token::Uint(params.amount_in),
            Token::Uint(U256::from(params.fee)),
            Token::Uint(params.sqrt_price_limit_x96),
        ])],
    )
}

/// Calldata for `weth.withdraw(amount)`
pub fn encode_withdraw(amount: U256) -> Result<Bytes> {
    abi::encode_call(&weth::withdraw_function(), &[Token::Uint(amount)])
}

/// Self-call on the handler that patches `call_data` with live balances
/// (one word per replacement) before calling `target`
pub fn build_make_call_with_balance_call(
    multicall_handler: Address,
    target: Address,
    call_data: Bytes,
    value: U256,
    replacements: &[Replacement],
) -> Result<Call> {
    let replacement_tokens = replacements
        .iter()
        .map(|r| Token::Tuple(vec![Token::Address(r.token), Token::Uint(r.offset)]))
        .collect();

    let data = abi::encode_call(
        &multicall_handler::make_call_with_balance_function(),
        &[
            Token::Address(target),
            Token::Bytes(call_data),
            Token::Uint(value),
            Token::Array(replacement_tokens),
        ],
    )?;
    Ok(Call::new(multicall_handler, data))
}

/// Self-call on the handler that splits its whole balance of `token`
/// (`address(0)` = native) evenly across `recipients`
pub fn build_distribute_token_evenly_call(
    multicall_handler: Address,
    token: Address,
    recipients: &[Address],
) -> Result<Call> {
    if recipients.is_empty() {
        return Err(CodecError::EmptyRecipients);
    }

    let data = abi::encode_call(
        &multicall_handler::distribute_token_evenly_function(),
        &[
            Token::Address(token),
            Token::Array(recipients.iter().copied().map(Token::Address).collect()),
        ],
    )?;
    Ok(Call::new(multicall_handler, data))
}

/// `minter.mintFor(account)` reward mint
pub fn build_mint_for_call(minter_address: Address, account: Address) -> Result<Call> {
    let data = abi::encode_call(&minter::mint_for_function(), &[Token::Address(account)])?;
    Ok(Call::new(minter_address, data))
}

fn check_bits(field: &'static str, value: U256, bits: usize) -> Result<()> {
    if value.bits() > bits {
        return Err(CodecError::ValueOutOfRange {
            field,
            bits,
            value: value.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn next_address(fields: &mut impl Iterator<Item = Token>, field: &'static str) -> Result<Address> {
    fields
        .next()
        .and_then(Token::into_address)
        .ok_or(CodecError::UnexpectedToken { field })
}

pub(crate) fn next_uint(fields: &mut impl Iterator<Item = Token>, field: &'static str) -> Result<U256> {
    fields
        .next()
        .and_then(Token::into_uint)
        .ok_or(CodecError::UnexpectedToken { field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    fn addr(byte: u8) -> Address {
        Address::repeat_byte(byte)
    }

    #[test]
    fn test_approve_encoding() {
        let call = build_approve_call(addr(0x01), addr(0x02), U256::MAX).unwrap();

        assert_eq!(call.target, addr(0x01));
        assert_eq!(call.value, U256::zero());
        assert_eq!(call.selector(), Some(hex!("095ea7b3")));
        assert_eq!(call.call_data.len(), 4 + 32 * 2);
        // spender word: 12 zero bytes then the address
        assert_eq!(&call.call_data[4..16], &[0u8; 12]);
        assert_eq!(&call.call_data[16..36], addr(0x02).as_bytes());
        assert_eq!(&call.call_data[36..68], &[0xffu8; 32]);
    }

    #[test]
    fn test_transfer_from_encoding() {
        let call =
            build_transfer_from_call(addr(0x01), addr(0x02), addr(0x03), U256::from(10_000_000u64))
                .unwrap();

        assert_eq!(call.selector(), Some(hex!("23b872dd")));
        assert_eq!(call.call_data.len(), 4 + 32 * 3);
        assert_eq!(U256::from_big_endian(&call.call_data[68..100]), U256::from(10_000_000u64));
    }

    #[test]
    fn test_swap_encoding_round_trip() {
        let params = ExactInputSingleParams {
            token_in: addr(0x0a),
            token_out: addr(0x0b),
            fee: 3000,
            recipient: addr(0x0c),
            amount_in: U256::from(10_000_000u64),
            amount_out_minimum: U256::exp10(15),
            sqrt_price_limit_x96: U256::zero(),
        };
        let call = build_uniswap_v3_swap_call(addr(0x99), &params).unwrap();

        assert_eq!(call.target, addr(0x99));
        assert_eq!(call.selector(), Some(hex!("04e45aaf")));
        // static struct: seven inline words
        assert_eq!(call.call_data.len(), 4 + 32 * 7);
        assert_eq!(decode_uniswap_v3_swap_call(&call.call_data).unwrap(), params);
    }

    #[test]
    fn test_swap_rejects_oversized_fee() {
        let params = ExactInputSingleParams {
            token_in: addr(0x0a),
            token_out: addr(0x0b),
            fee: 1 << 24,
            recipient: addr(0x0c),
            amount_in: U256::one(),
            amount_out_minimum: U256::zero(),
            sqrt_price_limit_x96: U256::zero(),
        };

        assert!(matches!(
            build_uniswap_v3_swap_call(addr(0x99), &params),
            Err(CodecError::ValueOutOfRange { field: "fee", bits: 24, .. })
        ));
    }

    #[test]
    fn test_withdraw_amount_sits_after_selector() {
        let data = encode_withdraw(U256::zero()).unwrap();
        assert_eq!(&data[..4], &hex!("2e1a7d4d"));
        assert_eq!(data.len(), 4 + 32);

        // the replacement offset points at this word
        let start = FIRST_ARG_OFFSET as usize;
        assert_eq!(&data[start..start + 32], &[0u8; 32]);
    }

    #[test]
    fn test_make_call_with_balance_wraps_inner_call() {
        let inner = encode_withdraw(U256::zero()).unwrap();
        let call = build_make_call_with_balance_call(
            addr(0x0d),
            addr(0x0e),
            inner.clone(),
            U256::zero(),
            &[Replacement::new(addr(0x0e), FIRST_ARG_OFFSET)],
        )
        .unwrap();

        assert_eq!(call.target, addr(0x0d));

        let tokens = abi::decode_call(
            &multicall_handler::make_call_with_balance_function(),
            &call.call_data,
        )
        .unwrap();
        assert_eq!(tokens[0], Token::Address(addr(0x0e)));
        assert_eq!(tokens[1], Token::Bytes(inner));
        assert_eq!(tokens[2], Token::Uint(U256::zero()));
        assert_eq!(
            tokens[3],
            Token::Array(vec![Token::Tuple(vec![
                Token::Address(addr(0x0e)),
                Token::Uint(U256::from(4)),
            ])])
        );
    }

    #[test]
    fn test_distribute_requires_recipients() {
        assert!(matches!(
            build_distribute_token_evenly_call(addr(0x0d), Address::zero(), &[]),
            Err(CodecError::EmptyRecipients)
        ));

        let call =
            build_distribute_token_evenly_call(addr(0x0d), Address::zero(), &[addr(0xaa), addr(0xbb)])
                .unwrap();
        let tokens = abi::decode_call(
            &multicall_handler::distribute_token_evenly_function(),
            &call.call_data,
        )
        .unwrap();
        assert_eq!(tokens[0], Token::Address(Address::zero()));
        assert_eq!(
            tokens[1],
            Token::Array(vec![Token::Address(addr(0xaa)), Token::Address(addr(0xbb))])
        );
    }

    #[test]
    fn test_decode_rejects_wrong_selector() {
        let approve = build_approve_call(addr(0x01), addr(0x02), U256::one()).unwrap();
        assert!(matches!(
            decode_uniswap_v3_swap_call(&approve.call_data),
            Err(CodecError::SelectorMismatch { .. })
        ));
        assert!(matches!(
            decode_uniswap_v3_swap_call(&[0x04]),
            Err(CodecError::CalldataTooShort { len: 1, .. })
        ));
    }

    #[test]
    fn test_quoter_and_mint_calls() {
        let data = encode_quote_exact_input_single(&QuoteExactInputSingleParams {
            token_in: addr(0x0a),
            token_out: addr(0x0b),
            amount_in: U256::from(1_000_000u64),
            fee: 500,
            sqrt_price_limit_x96: U256::zero(),
        })
        .unwrap();
        assert_eq!(data.len(), 4 + 32 * 5);

        let mint = build_mint_for_call(addr(0x77), addr(0x01)).unwrap();
        assert_eq!(mint.target, addr(0x77));
        assert_eq!(&mint.call_data[16..36], addr(0x01).as_bytes());
    }
}
