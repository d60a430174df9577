//! SHA-256d hashing and the 256-bit hash type
//!
//! Hashes are stored in internal (little-endian) byte order and displayed
//! reversed, the way block explorers and the reference client print them.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// 32-byte hash output, also used for 256-bit numbers (targets, chain work)
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hash(pub [u8; 32]);

impl Hash {
    /// Create a zero hash (used for genesis previous hash)
    pub const fn zero() -> Self {
        Hash([0u8; 32])
    }

    /// Create hash from bytes in internal order
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash(bytes)
    }

    /// Parse a hash from display-order hex.
    ///
    /// An optional `0x` prefix is accepted; exactly 64 hex digits must follow.
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        let bytes = hex::decode(hex)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        arr.reverse();
        Ok(Hash(arr))
    }

    /// Convert to display-order hex string
    pub fn to_hex(&self) -> String {
        let mut display = self.0;
        display.reverse();
        hex::encode(display)
    }

    /// Get as bytes (internal order)
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Hash {
    fn default() -> Self {
        Self::zero()
    }
}

/// Double SHA-256 of arbitrary bytes
pub fn sha256d(data: &[u8]) -> Hash {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    Hash(second.into())
}

/// Hash two hashes together (for Merkle tree)
pub fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    let mut data = Vec::with_capacity(64);
    data.extend_from_slice(&left.0);
    data.extend_from_slice(&right.0);
    sha256d(&data)
}
