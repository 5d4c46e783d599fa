#![no_main]

use libfuzzer_sys::fuzz_target;
use vblake_codec::decode_hex;
use vblake_wasm::hash_hex;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let _ = decode_hex(input);
        let _ = hash_hex(input);
    }
});
