//! 4-byte function selectors.

use std::fmt;

use crate::hash::keccak256;

/// A 4-byte function selector.
///
/// Ordered as an unsigned big-endian 32-bit integer, which is how the
/// generated dispatcher compares it (`shr(224, calldataload(0))`).
///
/// Displays as `0x` followed by 8 lowercase hex digits, the literal form used
/// in the emitted `case` labels.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct Selector(u32);

impl Selector {
    /// Create a selector from its numeric value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Selector(value)
    }

    /// Create a selector from its 4 raw bytes (big-endian).
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Selector(u32::from_be_bytes(bytes))
    }

    /// Compute the selector of a canonical signature such as
    /// `transfer(address,uint256)`.
    ///
    /// The signature must already be canonical: no whitespace, no parameter
    /// names, aliases widened. See [`crate::AbiFragment::signature`].
    pub fn of_signature(signature: &str) -> Self {
        let digest = keccak256(signature.as_bytes());
        Selector::from_bytes([digest[0], digest[1], digest[2], digest[3]])
    }

    /// Numeric value of the selector.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Selector(0x{:08x})", self.0)
    }
}

impl From<[u8; 4]> for Selector {
    fn from(bytes: [u8; 4]) -> Self {
        Selector::from_bytes(bytes)
    }
}
