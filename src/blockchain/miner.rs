use log::debug;
use thiserror::Error;

use super::Block;
use super::hash::block_digest;

/// Why a mining attempt produced no appended block.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MiningFailure {
    /// No nonce within the iteration budget met the difficulty target.
    /// Recoverable: retry with a larger budget or a lower difficulty.
    #[error("no nonce within {0} iterations met the difficulty target")]
    IterationsExceeded(u64),
    /// The chain tip moved between the start of the search and the append.
    /// Recoverable: refresh the tip and retry.
    #[error("chain tip changed while mining")]
    StaleParent,
}

/// Search the nonce space for a block whose hash carries at least
/// `difficulty` leading zero hex digits.
///
/// Nonces are tried from 0 upward, so the search is deterministic: the same
/// inputs always reproduce the same accepted nonce. A `difficulty` of 0 is
/// trivially satisfied at nonce 0. Once `max_iterations` attempts are spent
/// the search gives up with `IterationsExceeded`.
pub fn mine(
    index: u64,
    timestamp: i64,
    parent_hash: &str,
    data: &str,
    difficulty: u32,
    max_iterations: u64,
) -> Result<Block, MiningFailure> {
    let target_prefix = "0".repeat(difficulty as usize);
    for nonce in 0..max_iterations {
        let digest = block_digest(nonce, index, timestamp, parent_hash, data);
        if digest.starts_with(&target_prefix) {
            debug!(
                "MINER - nonce {} met difficulty {} for block #{}",
                nonce, difficulty, index
            );
            return Ok(Block::new(
                index,
                timestamp,
                parent_hash.to_string(),
                data.to_string(),
                nonce,
            ));
        }
    }
    Err(MiningFailure::IterationsExceeded(max_iterations))
}
