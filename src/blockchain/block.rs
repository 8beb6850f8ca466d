use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::hash::block_digest;
use super::{GENESIS_DATA, GENESIS_PARENT_HASH};

/// A single block in the ledger holding an opaque payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub timestamp: i64, // Unix timestamp (UTC)
    pub parent_hash: String,
    pub data: String,
    pub nonce: u64,   // Proof-of-Work nonce
    pub hash: String, // Cached hash of the block
}

impl Block {
    /// Create the genesis block (first block in the chain).
    pub fn genesis() -> Self {
        Self::new(
            0,
            Utc::now().timestamp(),
            GENESIS_PARENT_HASH.to_string(),
            GENESIS_DATA.to_string(),
            0,
        )
    }

    /// Create a block from its fields, sealed with its computed hash.
    pub fn new(index: u64, timestamp: i64, parent_hash: String, data: String, nonce: u64) -> Self {
        let mut block = Self {
            index,
            timestamp,
            parent_hash,
            data,
            nonce,
            hash: String::new(),
        };
        block.hash = block.recompute_hash();
        block
    }

    /// Compute the SHA-256 hash of this block using its fields
    /// (excluding the cached `hash` itself).
    pub fn recompute_hash(&self) -> String {
        block_digest(
            self.nonce,
            self.index,
            self.timestamp,
            &self.parent_hash,
            &self.data,
        )
    }

    /// Validate that the cached `hash` still matches the block's content.
    /// (Does NOT validate chain linkage or difficulty.)
    pub fn verify(&self) -> bool {
        self.hash == self.recompute_hash()
    }
}

#[cfg(test)]
mod tests {
    use super::{Block, GENESIS_PARENT_HASH};

    #[test]
    fn genesis_has_index_zero_and_verifies() {
        let b = Block::genesis();
        assert_eq!(b.index, 0);
        assert_eq!(b.parent_hash, GENESIS_PARENT_HASH);
        assert_eq!(b.nonce, 0);
        assert!(b.verify());
    }

    #[test]
    fn new_block_is_sealed_with_its_hash() {
        let b = Block::new(1, 1_700_000_000, "prev".into(), "payload".into(), 42);
        assert_eq!(b.hash, b.recompute_hash());
        assert!(b.verify());
    }

    #[test]
    fn invalid_when_mutated() {
        let mut b = Block::new(2, 1_700_000_000, "prev".into(), "payload".into(), 7);
        let old_hash = b.hash.clone();

        b.data.push_str(" tampered");

        assert_ne!(old_hash, b.recompute_hash());
        assert!(!b.verify());
    }
}
