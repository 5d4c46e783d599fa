/// Digest width in bytes (192-bit output).
pub const VBLAKE_HASH_SIZE: usize = 24;

/// Fixed-size vBlake digest.
pub type Digest = [u8; VBLAKE_HASH_SIZE];
