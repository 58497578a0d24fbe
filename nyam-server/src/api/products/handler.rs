//! Product API Handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::core::ServerState;
use crate::db::repository;
use crate::money;
use crate::utils::validation::{
    MAX_NAME_LEN, MIN_PRODUCT_NAME_LEN, validate_min_text, validate_positive_id,
};
use crate::utils::{AppJson, AppResult};
use shared::ApiResponse;
use shared::models::{Product, ProductCreate, ProductSummary};

/// POST /api/insert-product
///
/// `category_id` is not looked up here; a dangling reference is caught
/// by the foreign key and reported as a validation failure.
pub async fn insert(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<ProductCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<Product>>)> {
    validate_min_text(&payload.name, "name", MIN_PRODUCT_NAME_LEN, MAX_NAME_LEN)?;
    money::validate_price(payload.price, "price")?;
    validate_positive_id(payload.category_id, "category_id")?;

    let data = ProductCreate {
        name: payload.name.trim().to_string(),
        price: money::round(payload.price),
        category_id: payload.category_id,
        available: payload.available,
    };
    let product = repository::product::create(state.pool(), data).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message("Product inserted.", product)),
    ))
}

/// GET /api/products — every product with its category name resolved,
/// for the order form's selector.
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<ProductSummary>>>> {
    let products = repository::product::find_summaries(state.pool()).await?;
    Ok(Json(ApiResponse::ok(products)))
}
