use chrono::Utc;
use log::info;
use thiserror::Error;

use crate::blockchain::{
    Block, Blockchain, MAX_DIFFICULTY, MiningFailure, hash::block_digest, miner,
};

/// Rejected engine configuration update; the prior value is retained.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration value: {0}")]
    InvalidValue(String),
}

/// A lookup addressed an index outside the chain.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no block at that index")]
pub struct NotFound;

/// Single-writer facade over the chain and the mining configuration.
///
/// One instance is created at startup and shared behind a mutex; every
/// state-mutating operation runs to completion under that lock, so the
/// check-parent / mine / append sequence behaves as one atomic unit.
pub struct Engine {
    chain: Blockchain,
    difficulty: u32,
    max_iterations: u64,
}

impl Engine {
    pub fn new(difficulty: u32, max_iterations: u64) -> Self {
        Self {
            chain: Blockchain::new(),
            difficulty,
            max_iterations,
        }
    }

    /// Return the current chain tip.
    pub fn last_block(&self) -> &Block {
        self.chain.last_block()
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn max_iterations(&self) -> u64 {
        self.max_iterations
    }

    pub fn blocks(&self) -> &[Block] {
        self.chain.blocks()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_valid_chain(&self) -> bool {
        self.chain.is_valid_chain()
    }

    /// Update the difficulty required of future blocks. A SHA-256 digest has
    /// only 64 hex digits, so a higher requirement is rejected outright.
    pub fn set_difficulty(&mut self, difficulty: u32) -> Result<(), ConfigError> {
        if difficulty > MAX_DIFFICULTY {
            return Err(ConfigError::InvalidValue(format!(
                "difficulty {} exceeds digest length {}",
                difficulty, MAX_DIFFICULTY
            )));
        }
        self.difficulty = difficulty;
        Ok(())
    }

    /// Update the cap on nonce attempts per mining call; must be positive.
    pub fn set_max_iterations(&mut self, max_iterations: u64) -> Result<(), ConfigError> {
        if max_iterations == 0 {
            return Err(ConfigError::InvalidValue(
                "max_iterations must be positive".to_string(),
            ));
        }
        self.max_iterations = max_iterations;
        Ok(())
    }

    /// True iff `hash` still names the current tip. Callers check this before
    /// mining so no search is spent on a request built against a stale tip.
    pub fn check_block_parent(&self, hash: &str) -> bool {
        self.chain.parent_matches(hash)
    }

    /// Mine a block holding `data` on top of the current tip and append it.
    ///
    /// The tip is snapshotted before the search. An append rejection after a
    /// successful search means the tip moved in between; the mined block is
    /// discarded and the caller gets `StaleParent`.
    pub fn mine_block(&mut self, data: &str) -> Result<Block, MiningFailure> {
        let (index, parent_hash) = {
            let last = self.chain.last_block();
            (last.index + 1, last.hash.clone())
        };
        let timestamp = Utc::now().timestamp();

        let block = miner::mine(
            index,
            timestamp,
            &parent_hash,
            data,
            self.difficulty,
            self.max_iterations,
        )?;

        match self.chain.append(block.clone()) {
            Ok(()) => {
                info!(
                    "MINER - sealed block #{} (hash={}, nonce={})",
                    block.index, block.hash, block.nonce
                );
                Ok(block)
            }
            Err(_) => Err(MiningFailure::StaleParent),
        }
    }

    /// Stored hash of the block at `index`.
    pub fn block_hash(&self, index: u64) -> Result<String, NotFound> {
        self.chain
            .block_at(index)
            .map(|b| b.hash.clone())
            .ok_or(NotFound)
    }

    /// Recompute a digest over the supplied fields and compare it against the
    /// hash stored on-chain at `index`.
    pub fn check_block(
        &self,
        nonce: u64,
        index: u64,
        timestamp: i64,
        parent_hash: &str,
        data: &str,
    ) -> Result<bool, NotFound> {
        let stored = self.chain.block_at(index).ok_or(NotFound)?;
        Ok(block_digest(nonce, index, timestamp, parent_hash, data) == stored.hash)
    }

    /// True iff `candidate` meets or exceeds the current difficulty.
    pub fn check_difficulty(&self, candidate: u32) -> bool {
        candidate >= self.difficulty
    }
}
