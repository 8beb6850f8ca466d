mod api;
mod blockchain;
mod engine;

use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use std::env;

use api::AppState;
use blockchain::{DEFAULT_DIFFICULTY, DEFAULT_MAX_ITERATIONS};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::init();

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080);
    let difficulty: u32 = env::var("DIFFICULTY")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_DIFFICULTY);
    let max_iterations: u64 = env::var("MAX_ITERATIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_MAX_ITERATIONS);

    println!("⛓️ Starting ledger API at http://{host}:{port}");

    let state = web::Data::new(AppState::new(difficulty, max_iterations));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
