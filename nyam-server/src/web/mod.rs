//! Server-rendered pages
//!
//! Read-only views (the table dump and the report menu) rendered
//! directly from query rows, plus the embedded insert-forms bundle.

pub mod assets;
pub mod pages;
pub mod table;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/data", get(pages::data))
        .route("/queries", get(pages::queries))
        .route("/insert", get(assets::insert_page))
        .route("/assets/{*path}", get(assets::asset))
}
