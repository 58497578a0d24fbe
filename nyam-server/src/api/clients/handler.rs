//! Client API Handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::core::ServerState;
use crate::db::repository;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN, MAX_SHORT_TEXT_LEN, MIN_NAME_LEN,
    validate_min_text, validate_required_text,
};
use crate::utils::{AppError, AppJson, AppResult};
use shared::ApiResponse;
use shared::models::{Client, ClientCreate};

/// POST /api/insert-client
///
/// Email is normalized (trimmed, lower-cased) before the uniqueness
/// check; the unique index catches a concurrent duplicate the pre-check
/// missed. The password is stored as given, untrimmed.
pub async fn insert(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<ClientCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<Client>>)> {
    validate_min_text(&payload.name, "name", MIN_NAME_LEN, MAX_NAME_LEN)?;
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.password, "password", MAX_PASSWORD_LEN)?;

    let email = payload.email.trim().to_lowercase();
    if repository::client::find_by_email(state.pool(), &email)
        .await?
        .is_some()
    {
        return Err(AppError::conflict(
            "This email is already registered. Try another address.",
        ));
    }

    let data = ClientCreate {
        name: payload.name.trim().to_string(),
        email,
        phone: payload.phone.trim().to_string(),
        password: payload.password,
    };
    let client = repository::client::create(state.pool(), data).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message("Client inserted.", client)),
    ))
}
