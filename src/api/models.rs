use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::blockchain::{Block, DEFAULT_DIFFICULTY, DEFAULT_MAX_ITERATIONS};
use crate::engine::Engine;

/// Shared application state with the in-memory ledger engine.
pub struct AppState {
    pub engine: Mutex<Engine>,
}

impl AppState {
    pub fn new(difficulty: u32, max_iterations: u64) -> Self {
        Self {
            engine: Mutex::new(Engine::new(difficulty, max_iterations)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_DIFFICULTY, DEFAULT_MAX_ITERATIONS)
    }
}

/* ---------- Chain API Models ---------- */

/// Full record of one block plus the current mining configuration.
/// Returned by the tip read and by a successful mine.
#[derive(Serialize)]
pub struct BlockRecord {
    pub index: u64,
    pub parent_hash: String,
    pub timestamp: i64,
    pub data: String,
    pub hash: String,
    pub nonce: u64,
    pub difficulty: u32,
    pub max_iterations: u64,
}

impl BlockRecord {
    pub fn new(block: &Block, difficulty: u32, max_iterations: u64) -> Self {
        Self {
            index: block.index,
            parent_hash: block.parent_hash.clone(),
            timestamp: block.timestamp,
            data: block.data.clone(),
            hash: block.hash.clone(),
            nonce: block.nonce,
            difficulty,
            max_iterations,
        }
    }
}

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub length: usize,
    pub difficulty: u32,
    pub chain: &'a [Block],
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub length: usize,
}

#[derive(Serialize)]
pub struct BlockHashResponse {
    pub index: u64,
    pub hash: String,
}

/* ---------- Mining API Models ---------- */

#[derive(Deserialize)]
pub struct MineRequest {
    pub difficulty: u32,
    pub data: String,
    pub max_iterations: u64,
    pub parent: String,
}

#[derive(Deserialize)]
pub struct CheckBlockRequest {
    pub nonce: u64,
    pub index: u64,
    pub timestamp: i64,
    pub parent: String,
    pub data: String,
}

#[derive(Serialize)]
pub struct CheckBlockResponse {
    pub matches: bool,
}

#[derive(Deserialize)]
pub struct CheckDifficultyRequest {
    pub difficulty: u32,
}

#[derive(Serialize)]
pub struct CheckDifficultyResponse {
    pub acceptable: bool,
}

#[derive(Serialize)]
pub struct DifficultyResponse {
    pub difficulty: u32,
}

#[derive(Serialize)]
pub struct MaxIterationsResponse {
    pub max_iterations: u64,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
