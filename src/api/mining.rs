use actix_web::{HttpResponse, Responder, get, post, web};
use log::{debug, info, warn};

use super::models::{
    AppState, BlockRecord, CheckBlockRequest, CheckBlockResponse, CheckDifficultyRequest,
    CheckDifficultyResponse, DifficultyResponse, ErrorResponse, MaxIterationsResponse, MineRequest,
};
use crate::blockchain::MiningFailure;

/// Mine a new block on top of the declared parent:
/// - reject the request before any search if `parent` is not the current tip
/// - adopt the requested difficulty and iteration budget
/// - run the bounded nonce search and append the winning block
#[post("/mine/")]
pub async fn mine_block(state: web::Data<AppState>, req: web::Json<MineRequest>) -> impl Responder {
    let mut engine = state.engine.lock().expect("mutex poisoned");

    if !engine.check_block_parent(&req.parent) {
        warn!(
            "MINE - rejected: parent {} does not match the chain tip",
            req.parent
        );
        return HttpResponse::Conflict().json(ErrorResponse {
            error: "parent does not match the last block on the chain".to_string(),
        });
    }

    if let Err(e) = engine.set_difficulty(req.difficulty) {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: e.to_string(),
        });
    }
    if let Err(e) = engine.set_max_iterations(req.max_iterations) {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: e.to_string(),
        });
    }

    debug!(
        "MINE - searching: difficulty={} max_iterations={} data_len={}",
        req.difficulty,
        req.max_iterations,
        req.data.len()
    );
    match engine.mine_block(&req.data) {
        Ok(block) => {
            let resp = BlockRecord::new(&block, engine.difficulty(), engine.max_iterations());
            HttpResponse::Ok().json(resp)
        }
        Err(e @ MiningFailure::IterationsExceeded(_)) => {
            info!("MINE - gave up: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: e.to_string(),
            })
        }
        Err(e) => {
            warn!("MINE - {}", e);
            HttpResponse::Conflict().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}

/// Check a candidate block's fields against the hash stored on-chain at its
/// index.
#[post("/check-block/")]
pub async fn check_block(
    state: web::Data<AppState>,
    req: web::Json<CheckBlockRequest>,
) -> impl Responder {
    let engine = state.engine.lock().expect("mutex poisoned");
    match engine.check_block(req.nonce, req.index, req.timestamp, &req.parent, &req.data) {
        Ok(matches) => HttpResponse::Ok().json(CheckBlockResponse { matches }),
        Err(e) => HttpResponse::NotFound().json(ErrorResponse {
            error: e.to_string(),
        }),
    }
}

/// Check whether a candidate difficulty meets the current requirement.
#[post("/check-difficulty/")]
pub async fn check_difficulty(
    state: web::Data<AppState>,
    req: web::Json<CheckDifficultyRequest>,
) -> impl Responder {
    let engine = state.engine.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(CheckDifficultyResponse {
        acceptable: engine.check_difficulty(req.difficulty),
    })
}

/// Get current PoW difficulty.
#[get("/difficulty/")]
pub async fn get_difficulty(state: web::Data<AppState>) -> impl Responder {
    let engine = state.engine.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(DifficultyResponse {
        difficulty: engine.difficulty(),
    })
}

/// Get the current cap on nonce attempts per mining call.
#[get("/max-iterations/")]
pub async fn get_max_iterations(state: web::Data<AppState>) -> impl Responder {
    let engine = state.engine.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(MaxIterationsResponse {
        max_iterations: engine.max_iterations(),
    })
}
