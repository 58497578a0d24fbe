//! Random pre-fill API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/random/{entity}", get(handler::generate))
}
