//! Byte⇄hex codec used at the host boundary.
//!
//! One shared, strict encode/decode pair: malformed hex is rejected rather
//! than truncated or zero-filled, so a bad input can never produce a
//! valid-looking digest downstream.

pub mod error;

pub use error::CodecError;

/// Encodes `bytes` as lowercase hex, two characters per byte, no prefix or
/// separators. Output length is always `2 * bytes.len()`.
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decodes a hex string into its byte sequence.
///
/// Rejects odd-length input and non-hex digits with
/// [`CodecError::MalformedInput`]. Uppercase digits are accepted.
pub fn decode_hex(s: &str) -> Result<Vec<u8>, CodecError> {
    Ok(hex::decode(s)?)
}

#[cfg(test)]
mod tests {
    use super::{decode_hex, encode_hex, CodecError};

    #[test]
    fn encode_is_lowercase_and_double_length() {
        let bytes = [0x00_u8, 0x0f, 0xab, 0xff];
        let encoded = encode_hex(&bytes);
        assert_eq!(encoded, "000fabff");
        assert_eq!(encoded.len(), 2 * bytes.len());
    }

    #[test]
    fn round_trip_preserves_bytes() {
        let bytes: Vec<u8> = (0..=255).collect();
        let decoded = decode_hex(&encode_hex(&bytes)).expect("valid hex");
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn round_trip_normalizes_uppercase_input() {
        let decoded = decode_hex("ABCDEF").expect("valid hex");
        assert_eq!(encode_hex(&decoded), "abcdef");
    }

    #[test]
    fn empty_string_decodes_to_empty_bytes() {
        assert!(decode_hex("").expect("valid hex").is_empty());
        assert_eq!(encode_hex(&[]), "");
    }

    #[test]
    fn odd_length_input_is_rejected() {
        let err = decode_hex("a").expect_err("odd length must fail");
        assert!(matches!(
            err,
            CodecError::MalformedInput(hex::FromHexError::OddLength)
        ));
    }

    #[test]
    fn non_hex_digits_are_rejected() {
        let err = decode_hex("zz").expect_err("non-hex digits must fail");
        assert!(matches!(
            err,
            CodecError::MalformedInput(hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 })
        ));
    }
}
