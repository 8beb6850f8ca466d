use thiserror::Error;

use super::{Block, GENESIS_PARENT_HASH};

/// Why a candidate block was rejected by the chain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// Index or parent hash does not extend the current tip.
    #[error("block does not link to the chain tip")]
    LinkageMismatch,
    /// The block's cached hash does not match its contents.
    #[error("block hash does not match its contents")]
    HashMismatch,
}

/// Append-only, in-memory chain of hash-linked blocks.
#[derive(Debug)]
pub struct Blockchain {
    chain: Vec<Block>,
}

impl Blockchain {
    /// Initialize a new blockchain seeded with the genesis block.
    pub fn new() -> Self {
        Self {
            chain: vec![Block::genesis()],
        }
    }

    /// Return the most recently appended block.
    pub fn last_block(&self) -> &Block {
        self.chain
            .last()
            .expect("Blockchain should always have at least the genesis block")
    }

    /// Append `block` iff it extends the current tip and its hash verifies.
    /// A rejected block leaves the chain untouched.
    pub fn append(&mut self, block: Block) -> Result<(), ChainError> {
        let last = self.last_block();
        if block.index != last.index + 1 || block.parent_hash != last.hash {
            return Err(ChainError::LinkageMismatch);
        }
        if !block.verify() {
            return Err(ChainError::HashMismatch);
        }
        self.chain.push(block);
        Ok(())
    }

    /// Return the block at `index`, or none if out of range.
    pub fn block_at(&self, index: u64) -> Option<&Block> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.chain.get(i))
    }

    /// True iff `hash` is the hash of the current tip. Used to reject mining
    /// requests built against a stale tip before any search starts.
    pub fn parent_matches(&self, hash: &str) -> bool {
        hash == self.last_block().hash
    }

    pub fn blocks(&self) -> &[Block] {
        &self.chain
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Validate the entire chain: genesis shape, linkage and per-block hashes.
    pub fn is_valid_chain(&self) -> bool {
        if self.chain.is_empty() {
            return false;
        }

        // Validate genesis block immutability
        let genesis = &self.chain[0];
        if genesis.index != 0 || genesis.parent_hash != GENESIS_PARENT_HASH || !genesis.verify() {
            return false;
        }

        // Validate the rest of the chain
        for i in 1..self.chain.len() {
            let current = &self.chain[i];
            let prev = &self.chain[i - 1];

            // Check linkage
            if current.parent_hash != prev.hash || current.index != prev.index + 1 {
                return false;
            }

            // Check hash integrity
            if !current.verify() {
                return false;
            }
        }

        true
    }
}

impl Default for Blockchain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Blockchain, ChainError};
    use crate::blockchain::{Block, miner};

    fn mine_next(bc: &Blockchain, data: &str) -> Block {
        let last = bc.last_block();
        miner::mine(last.index + 1, last.timestamp, &last.hash, data, 0, 1).expect("trivial mine")
    }

    #[test]
    fn new_chain_holds_verified_genesis() {
        let bc = Blockchain::new();
        assert_eq!(bc.len(), 1);
        assert_eq!(bc.last_block().index, 0);
        assert!(bc.last_block().verify());
        assert!(bc.is_valid_chain());
    }

    #[test]
    fn append_links_blocks() {
        let mut bc = Blockchain::new();
        let b1 = mine_next(&bc, "a");
        bc.append(b1).expect("append");
        let b2 = mine_next(&bc, "b");
        bc.append(b2).expect("append");

        assert_eq!(bc.len(), 3);
        for i in 1..bc.len() {
            assert_eq!(bc.blocks()[i].parent_hash, bc.blocks()[i - 1].hash);
            assert_eq!(bc.blocks()[i].index, bc.blocks()[i - 1].index + 1);
        }
        assert!(bc.is_valid_chain());
    }

    #[test]
    fn append_rejects_bad_linkage() {
        let mut bc = Blockchain::new();
        let stray = Block::new(5, 1_700_000_000, "nowhere".into(), "x".into(), 0);
        assert_eq!(bc.append(stray), Err(ChainError::LinkageMismatch));
        assert_eq!(bc.len(), 1);
    }

    #[test]
    fn append_rejects_tampered_block() {
        let mut bc = Blockchain::new();
        let mut b1 = mine_next(&bc, "a");
        b1.data = "tampered".into(); // hash no longer matches
        assert_eq!(bc.append(b1), Err(ChainError::HashMismatch));
        assert_eq!(bc.len(), 1);
    }

    #[test]
    fn block_at_bounds() {
        let bc = Blockchain::new();
        assert!(bc.block_at(0).is_some());
        assert!(bc.block_at(1).is_none());
        assert!(bc.block_at(u64::MAX).is_none());
    }

    #[test]
    fn parent_matches_tracks_tip() {
        let mut bc = Blockchain::new();
        let genesis_hash = bc.last_block().hash.clone();
        assert!(bc.parent_matches(&genesis_hash));

        let b1 = mine_next(&bc, "a");
        bc.append(b1).expect("append");
        assert!(!bc.parent_matches(&genesis_hash));
        assert!(bc.parent_matches(&bc.last_block().hash.clone()));
    }
}
