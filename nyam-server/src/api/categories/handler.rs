//! Category API Handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::core::ServerState;
use crate::db::repository;
use crate::utils::validation::{MAX_NAME_LEN, MIN_NAME_LEN, validate_min_text};
use crate::utils::{AppJson, AppResult};
use shared::ApiResponse;
use shared::models::{Category, CategoryCreate};

/// POST /api/insert-category
pub async fn insert(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<CategoryCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<Category>>)> {
    validate_min_text(&payload.name, "name", MIN_NAME_LEN, MAX_NAME_LEN)?;

    let data = CategoryCreate {
        name: payload.name.trim().to_string(),
    };
    let category = repository::category::create(state.pool(), data).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message("Category inserted.", category)),
    ))
}
