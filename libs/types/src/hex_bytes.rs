//! Serde helper for `0x`-prefixed hex byte strings
//!
//! Use with `#[serde(with = "hex_bytes")]` on `Vec<u8>` fields.

use serde::{de::Error, Deserialize, Deserializer, Serializer};

pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&encode(bytes))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    decode(&s).map_err(D::Error::custom)
}

/// Encode bytes as a lowercase `0x`-prefixed string
pub fn encode(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Decode a hex string, with or without the `0x` prefix
pub fn decode(s: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(s.strip_prefix("0x").unwrap_or(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_optional_on_decode() {
        assert_eq!(decode("0x0a0b").unwrap(), vec![0x0a, 0x0b]);
        assert_eq!(decode("0a0b").unwrap(), vec![0x0a, 0x0b]);
        assert!(decode("0xzz").is_err());
    }

    #[test]
    fn test_empty_bytes() {
        assert_eq!(encode(&[]), "0x");
        assert!(decode("0x").unwrap().is_empty());
    }
}
