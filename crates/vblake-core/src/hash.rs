use crate::types::{Digest, VBLAKE_HASH_SIZE};

/// Message block width in bytes (16 little-endian `u64` words).
pub const BLOCK_SIZE: usize = 128;

const ROUNDS: usize = 12;

/// BLAKE2b initialization words.
const IV: [u64; 8] = [
    0x6a09_e667_f3bc_c908,
    0xbb67_ae85_12ca_af53,
    0x3c6e_f372_fe94_f82b,
    0xa54f_f53a_5f1d_36f1,
    0x510e_527f_ade6_82d1,
    0x9b05_688c_2b3e_6c1f,
    0x1f83_d9ab_fb41_bd6b,
    0x5be0_cd19_137e_2179,
];

/// Message word schedule. Rounds 10 and 11 reuse rows 0 and 1.
const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

fn g(v: &mut [u64; 16], a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
    v[d] = (v[d] ^ v[a]).rotate_right(32);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(24);
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(63);
}

/// Mixes one message block into the chaining state.
fn compress(h: &mut [u64; 8], block: &[u8; BLOCK_SIZE]) {
    let mut m = [0_u64; 16];
    for (i, word) in m.iter_mut().enumerate() {
        let mut bytes = [0_u8; 8];
        bytes.copy_from_slice(&block[i * 8..i * 8 + 8]);
        *word = u64::from_le_bytes(bytes);
    }

    let mut v = [0_u64; 16];
    v[..8].copy_from_slice(h);
    v[8..].copy_from_slice(&IV);

    for round in 0..ROUNDS {
        let s = &SIGMA[round % SIGMA.len()];
        g(&mut v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
        g(&mut v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
        g(&mut v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
        g(&mut v, 3, 7, 11, 15, m[s[6]], m[s[7]]);
        g(&mut v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
        g(&mut v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
        g(&mut v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
        g(&mut v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
    }

    for i in 0..8 {
        h[i] ^= v[i] ^ v[i + 8];
    }
}

/// Computes the vBlake digest of `input`.
///
/// Deterministic for any byte sequence, including empty input. The working
/// state lives on the stack of this call, so concurrent invocations never
/// interfere.
pub fn vblake(input: &[u8]) -> Digest {
    let mut h = IV;
    h[0] ^= 0x0101_0000 ^ VBLAKE_HASH_SIZE as u64;

    let mut chunks = input.chunks_exact(BLOCK_SIZE);
    for chunk in &mut chunks {
        let mut block = [0_u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        compress(&mut h, &block);
    }
    let rest = chunks.remainder();

    // Padded tail: remaining bytes, a 0x80 marker, zero fill, and the
    // 128-bit little-endian message bit length in the final 16 bytes. A
    // second block is needed when marker + length do not fit after the
    // remainder.
    let mut tail = [0_u8; 2 * BLOCK_SIZE];
    tail[..rest.len()].copy_from_slice(rest);
    tail[rest.len()] = 0x80;
    let end = if rest.len() + 1 + 16 <= BLOCK_SIZE {
        BLOCK_SIZE
    } else {
        2 * BLOCK_SIZE
    };
    let bit_len = (input.len() as u128) * 8;
    tail[end - 16..end].copy_from_slice(&bit_len.to_le_bytes());
    for block in tail[..end].chunks_exact(BLOCK_SIZE) {
        let mut buf = [0_u8; BLOCK_SIZE];
        buf.copy_from_slice(block);
        compress(&mut h, &buf);
    }

    let mut digest = [0_u8; VBLAKE_HASH_SIZE];
    for (out, word) in digest.chunks_exact_mut(8).zip(h.iter()) {
        out.copy_from_slice(&word.to_le_bytes());
    }
    digest
}
