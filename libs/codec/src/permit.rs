//! Permit parameter decoding for task expiry

use crate::calls::next_uint;
use crate::error::{CodecError, Result};
use ethabi::ParamType;
use refuel_types::PermitType;

/// Parameter layout of the ABI-encoded permit params for each permit type,
/// with the position of the deadline field
fn permit_layout(permit_type: PermitType) -> (Vec<ParamType>, usize) {
    match permit_type {
        // owner, value, validAfter, validBefore, nonce
        PermitType::Eip3009 => (
            vec![
                ParamType::Address,
                ParamType::Uint(256),
                ParamType::Uint(256),
                ParamType::Uint(256),
                ParamType::FixedBytes(32),
            ],
            3,
        ),
        // owner, spender, value, nonce, deadline
        PermitType::Permit => (
            vec![
                ParamType::Address,
                ParamType::Address,
                ParamType::Uint(256),
                ParamType::Uint(256),
                ParamType::Uint(256),
            ],
            4,
        ),
        // token, owner, spender, amount, nonce, deadline
        PermitType::Permit2 => (
            vec![
                ParamType::Address,
                ParamType::Address,
                ParamType::Address,
                ParamType::Uint(256),
                ParamType::Uint(256),
                ParamType::Uint(256),
            ],
            5,
        ),
    }
}

/// Unix timestamp after which a task signed with this permit can no longer execute
pub fn task_expiration_time(permit_type: PermitType, permit_params: &[u8]) -> Result<u64> {
    let (layout, deadline_index) = permit_layout(permit_type);
    let tokens = ethabi::decode(&layout, permit_params).map_err(|source| CodecError::Decode {
        context: format!("{} permit params", permit_type),
        source,
    })?;

    let deadline = next_uint(&mut tokens.into_iter().skip(deadline_index), "deadline")?;
    if deadline.bits() > 64 {
        return Err(CodecError::ValueOutOfRange {
            field: "deadline",
            bits: 64,
            value: deadline.to_string(),
        });
    }
    Ok(deadline.low_u64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethabi::Token;
    use refuel_types::{Address, U256};

    #[test]
    fn test_eip3009_valid_before() {
        let params = ethabi::encode(&[
            Token::Address(Address::repeat_byte(0x01)),
            Token::Uint(U256::from(1_000_000u64)),
            Token::Uint(U256::zero()),
            Token::Uint(U256::from(1_700_003_600u64)),
            Token::FixedBytes(vec![0xaa; 32]),
        ]);
        assert_eq!(
            task_expiration_time(PermitType::Eip3009, &params).unwrap(),
            1_700_003_600
        );
    }

    #[test]
    fn test_permit_deadline() {
        let params = ethabi::encode(&[
            Token::Address(Address::repeat_byte(0x01)),
            Token::Address(Address::repeat_byte(0x02)),
            Token::Uint(U256::from(5u64)),
            Token::Uint(U256::from(7u64)),
            Token::Uint(U256::from(1_800_000_000u64)),
        ]);
        assert_eq!(
            task_expiration_time(PermitType::Permit, &params).unwrap(),
            1_800_000_000
        );
    }

    #[test]
    fn test_permit2_deadline() {
        let params = ethabi::encode(&[
            Token::Address(Address::repeat_byte(0x01)),
            Token::Address(Address::repeat_byte(0x02)),
            Token::Address(Address::repeat_byte(0x03)),
            Token::Uint(U256::from(5u64)),
            Token::Uint(U256::from(7u64)),
            Token::Uint(U256::from(1_900_000_000u64)),
        ]);
        assert_eq!(
            task_expiration_time(PermitType::Permit2, &params).unwrap(),
            1_900_000_000
        );
    }

    #[test]
    fn test_truncated_params() {
        let params = vec![0u8; 64];
        assert!(matches!(
            task_expiration_time(PermitType::Permit2, &params),
            Err(CodecError::Decode { .. })
        ));
    }

    #[test]
    fn test_deadline_overflow() {
        let params = ethabi::encode(&[
            Token::Address(Address::repeat_byte(0x01)),
            Token::Address(Address::repeat_byte(0x02)),
            Token::Uint(U256::from(5u64)),
            Token::Uint(U256::from(7u64)),
            Token::Uint(U256::MAX),
        ]);
        assert!(matches!(
            task_expiration_time(PermitType::Permit, &params),
            Err(CodecError::ValueOutOfRange { field: "deadline", .. })
        ));
    }
}
