//! Host-visible vBlake entry points.
//!
//! Two exports mirror the two marshalling modes the host uses: raw bytes
//! (`hashBytes`) and hex strings (`hashHex`). The hex path's semantics live
//! in a pure function so native tests cover it without a JS runtime.

use vblake_codec::{decode_hex, encode_hex, CodecError};
use vblake_core::vblake;
use wasm_bindgen::prelude::*;

/// Hashes a hex-encoded message and returns the hex-encoded digest.
///
/// Malformed hex is an explicit error, never a truncated or zero-substituted
/// message silently hashed into a valid-looking digest.
pub fn hash_hex(input: &str) -> Result<String, CodecError> {
    let message = decode_hex(input)?;
    Ok(encode_hex(&vblake(&message)))
}

/// Hash raw message bytes into the raw fixed-size digest.
#[wasm_bindgen(js_name = hashBytes)]
pub fn hash_bytes(input: &[u8]) -> Vec<u8> {
    vblake(input).to_vec()
}

/// Hash a hex-encoded message; throws on malformed hex.
#[wasm_bindgen(js_name = hashHex)]
pub fn hash_hex_wasm(input: &str) -> Result<String, JsValue> {
    hash_hex(input).map_err(|err| JsValue::from_str(&err.to_string()))
}
