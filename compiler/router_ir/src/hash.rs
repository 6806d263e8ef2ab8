//! Keccak-256 hashing.

use sha3::{Digest, Keccak256};

/// Keccak-256 digest of `data` (the pre-standard SHA-3 padding used by the EVM).
#[inline]
pub fn keccak256(data: impl AsRef<[u8]>) -> [u8; 32] {
    let digest = Keccak256::digest(data.as_ref());
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}
