pub mod block;
pub mod hash;
pub mod miner;
pub mod model;

pub use block::Block;
pub use miner::MiningFailure;
pub use model::{Blockchain, ChainError};

/// Default Proof-of-Work difficulty (number of leading zero hex digits).
pub const DEFAULT_DIFFICULTY: u32 = 2;

/// Default cap on nonce attempts per mining call.
pub const DEFAULT_MAX_ITERATIONS: u64 = 10_000;

/// Upper bound on difficulty: a SHA-256 digest is 64 hex digits long, so a
/// higher requirement can never be satisfied.
pub const MAX_DIFFICULTY: u32 = 64;

/// Sentinel parent hash carried by the genesis block (all-zero digest).
pub const GENESIS_PARENT_HASH: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

/// Payload stored in the genesis block.
pub const GENESIS_DATA: &str = "Genesis";
