use actix_web::{HttpResponse, Responder, get, web};

use super::models::{
    AppState, BlockHashResponse, BlockRecord, ChainResponse, ErrorResponse, ValidateResponse,
};

/// Get the full record of the chain tip.
#[get("/tip/")]
pub async fn get_tip(state: web::Data<AppState>) -> impl Responder {
    let engine = state.engine.lock().expect("mutex poisoned");
    let resp = BlockRecord::new(
        engine.last_block(),
        engine.difficulty(),
        engine.max_iterations(),
    );
    HttpResponse::Ok().json(resp)
}

/// Get the full blockchain.
#[get("/chain/")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let engine = state.engine.lock().expect("mutex poisoned");
    let resp = ChainResponse {
        length: engine.len(),
        difficulty: engine.difficulty(),
        chain: engine.blocks(),
    };
    HttpResponse::Ok().json(resp)
}

/// Validate the whole chain.
#[get("/validate/")]
pub async fn validate_chain(state: web::Data<AppState>) -> impl Responder {
    let engine = state.engine.lock().expect("mutex poisoned");
    let resp = ValidateResponse {
        valid: engine.is_valid_chain(),
        length: engine.len(),
    };
    HttpResponse::Ok().json(resp)
}

/// Get the stored hash of the block at `index`.
#[get("/block/{index}/hash/")]
pub async fn get_block_hash(
    state: web::Data<AppState>,
    path: web::Path<(u64,)>,
) -> impl Responder {
    let index = path.into_inner().0;
    let engine = state.engine.lock().expect("mutex poisoned");
    match engine.block_hash(index) {
        Ok(hash) => HttpResponse::Ok().json(BlockHashResponse { index, hash }),
        Err(e) => HttpResponse::NotFound().json(ErrorResponse {
            error: e.to_string(),
        }),
    }
}
