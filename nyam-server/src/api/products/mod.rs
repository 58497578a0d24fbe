//! Product API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/insert-product", post(handler::insert))
        .route("/api/products", get(handler::list))
}
