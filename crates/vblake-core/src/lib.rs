//! vBlake hash engine.
//!
//! Pure fixed-output hashing primitive: block compression, deterministic
//! padding, and the fixed-size digest type. No I/O, and no state is shared
//! between invocations.

pub mod hash;
pub mod types;

pub use hash::vblake;
pub use types::{Digest, VBLAKE_HASH_SIZE};
