//! 20-byte account addresses with EIP-55 checksums.
//!
//! The emitted router embeds module addresses as literals, and the target
//! compiler rejects mixed-case literals whose checksum is wrong. Addresses are
//! therefore always displayed in checksummed form, and mixed-case input is
//! verified on parse.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::hash::keccak256;

/// Error when parsing an address from text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// Missing `0x` prefix.
    #[error("address `{0}` must start with 0x")]
    MissingPrefix(String),
    /// Wrong number of hex digits after the prefix.
    #[error("address `{input}` has {digits} hex digits, expected 40")]
    BadLength { input: String, digits: usize },
    /// Non-hex character in the body.
    #[error("address `{0}` contains non-hex characters")]
    BadHex(String),
    /// Mixed-case input whose casing does not match the EIP-55 checksum.
    #[error("address `{input}` has an invalid checksum (expected {expected})")]
    BadChecksum { input: String, expected: String },
}

/// A 20-byte account address.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct Address([u8; 20]);

impl Address {
    /// The zero address.
    pub const ZERO: Address = Address([0; 20]);

    /// Create an address from raw bytes.
    #[inline]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }

    /// Raw bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// EIP-55 checksummed form, e.g. `0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed`.
    pub fn to_checksum(&self) -> String {
        let lower = hex::encode(self.0);
        let digest = keccak256(lower.as_bytes());

        let mut out = String::with_capacity(42);
        out.push_str("0x");
        for (i, c) in lower.chars().enumerate() {
            let byte = digest[i / 2];
            let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
            if c.is_ascii_alphabetic() && nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| AddressError::MissingPrefix(s.to_string()))?;

        if body.len() != 40 {
            return Err(AddressError::BadLength {
                input: s.to_string(),
                digits: body.len(),
            });
        }

        let mut bytes = [0u8; 20];
        hex::decode_to_slice(body, &mut bytes).map_err(|_| AddressError::BadHex(s.to_string()))?;
        let address = Address(bytes);

        let has_lower = body.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = body.chars().any(|c| c.is_ascii_uppercase());
        if has_lower && has_upper {
            let expected = address.to_checksum();
            if expected[2..] != *body {
                return Err(AddressError::BadChecksum {
                    input: s.to_string(),
                    expected,
                });
            }
        }

        Ok(address)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_checksum())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
