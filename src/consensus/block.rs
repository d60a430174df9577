//! Block structure
//!
//! Defines the block header, its 80-byte consensus serialization and the
//! hashing seam through which the proof-of-work hash is supplied.

use serde::{Deserialize, Serialize};

use super::Transaction;
use crate::crypto::{compute_merkle_root, sha256d, Hash};

/// Serialized header size in bytes
pub const HEADER_SIZE: usize = 80;

/// Computes the identity hash of a serialized block header.
///
/// The header hash of this chain is X11, which lives outside this crate;
/// the node passes its implementation in when building parameters.
pub trait BlockHasher: Send + Sync {
    fn hash_header(&self, header: &[u8; HEADER_SIZE]) -> Hash;
}

/// SHA-256d header hashing, as used by Bitcoin-derived chains
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleSha256;

impl BlockHasher for DoubleSha256 {
    fn hash_header(&self, header: &[u8; HEADER_SIZE]) -> Hash {
        sha256d(header)
    }
}

/// Block header containing all metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockHeader {
    /// Protocol version
    pub version: i32,
    /// Hash of the previous block
    pub prev_hash: Hash,
    /// Merkle root of all transactions
    pub merkle_root: Hash,
    /// Block timestamp (seconds since Unix epoch)
    pub time: u32,
    /// Difficulty target (compact representation)
    pub bits: u32,
    /// Nonce used for PoW
    pub nonce: u32,
}

impl BlockHeader {
    /// Serialize the header for hashing
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.version.to_le_bytes());
        bytes[4..36].copy_from_slice(&self.prev_hash.0);
        bytes[36..68].copy_from_slice(&self.merkle_root.0);
        bytes[68..72].copy_from_slice(&self.time.to_le_bytes());
        bytes[72..76].copy_from_slice(&self.bits.to_le_bytes());
        bytes[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        bytes
    }

    /// Calculate the hash of this header
    pub fn hash(&self, hasher: &dyn BlockHasher) -> Hash {
        hasher.hash_header(&self.to_bytes())
    }
}

/// A complete block containing header and transactions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Block {
    /// Block header
    pub header: BlockHeader,
    /// List of transactions in this block
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn new(header: BlockHeader, transactions: Vec<Transaction>) -> Self {
        Self {
            header,
            transactions,
        }
    }

    /// Get the block hash
    pub fn hash(&self, hasher: &dyn BlockHasher) -> Hash {
        self.header.hash(hasher)
    }

    /// Merkle root recomputed from the transaction list
    pub fn compute_merkle_root(&self) -> Hash {
        let txids: Vec<Hash> = self.transactions.iter().map(Transaction::txid).collect();
        compute_merkle_root(&txids)
    }

    /// Check if this is the genesis block
    pub fn is_genesis(&self) -> bool {
        self.header.prev_hash.is_zero()
    }
}
