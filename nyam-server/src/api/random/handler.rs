//! Random pre-fill handlers
//!
//! Serves one plausible fake payload per entity for the forms'
//! "fill with random data" buttons. The random order is built against
//! the current product list so its lines reference real products.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use crate::core::ServerState;
use crate::db::repository;
use crate::random;
use crate::utils::{AppError, AppResult};
use shared::ApiResponse;

/// GET /api/random/{entity}
pub async fn generate(
    State(state): State<ServerState>,
    Path(entity): Path<String>,
) -> AppResult<Json<ApiResponse<Value>>> {
    let payload = match entity.as_str() {
        "category" => to_value(random::random_category(&mut rand::thread_rng()))?,
        "client" => to_value(random::random_client(&mut rand::thread_rng()))?,
        "product" => to_value(random::random_product(&mut rand::thread_rng()))?,
        "reservation" => to_value(random::random_reservation(&mut rand::thread_rng()))?,
        "order" => {
            let products = repository::product::find_summaries(state.pool()).await?;
            to_value(random::random_order(&mut rand::thread_rng(), &products))?
        }
        other => {
            return Err(AppError::validation(format!(
                "unknown entity '{other}', expected one of category, client, product, reservation, order"
            )));
        }
    };

    Ok(Json(ApiResponse::ok(payload)))
}

fn to_value<T: serde::Serialize>(value: T) -> AppResult<Value> {
    serde_json::to_value(value).map_err(|e| AppError::internal(e.to_string()))
}
